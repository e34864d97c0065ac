//! Definition extraction from Java source text.
//!
//! Extraction sits behind the [`DefinitionExtractor`] trait so the heuristic
//! used to find a type name and its fields can change without touching
//! rendering or compiler invocation.
//!
//! # Extractors
//!
//! - [`PatternExtractor`]: the regular-expression heuristic. A type name is
//!   the first word followed by `{`; a field is any word followed by `,` or
//!   `;`. It over-matches on anything but flat enum or POJO files.
//! - [`DeclarationExtractor`](crate::DeclarationExtractor): a Java-aware
//!   scanner that understands comments, annotations, methods and nested
//!   blocks.

use crate::definition::TypeDefinition;
use crate::error::{GeneratorError, GeneratorResult};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Whitespace, a word, optional whitespace, then an opening brace.
#[allow(clippy::expect_used)] // Safe: literal pattern
static TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\w*)\s*\{").expect("type pattern is valid"));

/// Whitespace, a word, then a comma or semicolon.
#[allow(clippy::expect_used)] // Safe: literal pattern
static FIELD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\w*)[,;]").expect("field pattern is valid"));

/// Extracts a type name and field names from definition source text.
pub trait DefinitionExtractor {
    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Find the declared type name, or `None` if the source has no match.
    fn extract_type_name(&self, source: &str) -> Option<String>;

    /// Collect field names in order of appearance. May be empty.
    fn extract_field_names(&self, source: &str) -> Vec<String>;

    /// Extract the type name and fields together, or `None` when there is no
    /// type name.
    ///
    /// Extractors that parse the whole source should override this to parse
    /// it only once.
    fn extract(&self, source: &str) -> Option<TypeDefinition> {
        let name = self.extract_type_name(source)?;
        Some(TypeDefinition::new(name, self.extract_field_names(source)))
    }
}

/// Extract a full [`TypeDefinition`] from the source text of `path`.
///
/// Fails with [`GeneratorError::Extraction`] when no type name is found.
pub fn extract_definition(
    extractor: &dyn DefinitionExtractor,
    path: &Path,
    source: &str,
) -> GeneratorResult<TypeDefinition> {
    let definition = extractor
        .extract(source)
        .ok_or_else(|| GeneratorError::Extraction {
            path: path.to_path_buf(),
        })?;

    tracing::debug!(
        extractor = extractor.name(),
        file = %path.display(),
        type_name = %definition.name,
        fields = definition.fields.len(),
        "Extracted definition"
    );

    Ok(definition)
}

/// Regular-expression extractor.
///
/// Matches are taken exactly as the patterns produce them: the type name is
/// the first capture of `\s(\w*)\s*\{` and the fields are every capture of
/// `\s(\w*)[,;]`, so local variables, return values and even empty words
/// ahead of a separator are reported as fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl PatternExtractor {
    /// Create an extractor using the standard patterns.
    pub fn new() -> Self {
        Self
    }
}

impl DefinitionExtractor for PatternExtractor {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn extract_type_name(&self, source: &str) -> Option<String> {
        TYPE_PATTERN
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn extract_field_names(&self, source: &str) -> Vec<String> {
        FIELD_PATTERN
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
#[path = "extract/extract_tests.rs"]
mod extract_tests;
