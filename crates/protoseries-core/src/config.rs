//! Generator configuration

use crate::compiler::CompilerFailurePolicy;
use crate::declaration::DeclarationExtractor;
use crate::error::{GeneratorError, GeneratorResult};
use crate::extract::{DefinitionExtractor, PatternExtractor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "protoseries.toml";

/// Settings for one generation run.
///
/// Every key is optional in the TOML form; missing keys take the defaults
/// of the crypto-strats-server layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding the Java type definitions.
    pub input_dir: PathBuf,

    /// Directory the compiler writes Java bindings into.
    pub output_java_dir: PathBuf,

    /// Directory the `.proto` files are written to.
    pub proto_out_dir: PathBuf,

    /// Value of the `java_package` option in generated schemas.
    pub java_package: String,

    /// Extension (without the dot) of definition files.
    pub file_extension: String,

    /// Which extractor reads the definition files.
    pub extractor: ExtractorKind,

    /// Initial log level (a `tracing` filter directive)
    pub log_level: String,

    pub compiler: CompilerSection,
}

/// `[compiler]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerSection {
    /// Path of the `protoc` executable.
    pub executable: PathBuf,

    /// Run the compiler after writing each schema.
    pub enabled: bool,

    /// Handling of compiler failures.
    pub on_failure: CompilerFailurePolicy,
}

const JAVA_BASE_DIR: &str = "./crypto-strats-server/src/main/java";

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: Path::new(JAVA_BASE_DIR).join("io/hbar/fx/data/series/types"),
            output_java_dir: PathBuf::from(JAVA_BASE_DIR),
            proto_out_dir: PathBuf::from("."),
            java_package: "io.hbar.protobuf.schema".to_string(),
            file_extension: "java".to_string(),
            extractor: ExtractorKind::default(),
            log_level: "info".to_string(),
            compiler: CompilerSection::default(),
        }
    }
}

impl Default for CompilerSection {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("/usr/local/bin/protoc"),
            enabled: true,
            on_failure: CompilerFailurePolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GeneratorResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GeneratorError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> GeneratorResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GeneratorResult<()> {
        for (key, path) in [
            ("input_dir", &self.input_dir),
            ("output_java_dir", &self.output_java_dir),
            ("proto_out_dir", &self.proto_out_dir),
            ("compiler.executable", &self.compiler.executable),
        ] {
            if path.as_os_str().is_empty() {
                return Err(GeneratorError::Config(format!("{key} cannot be empty")));
            }
        }

        if self.file_extension.is_empty() {
            return Err(GeneratorError::Config(
                "file_extension cannot be empty".to_string(),
            ));
        }
        if self.file_extension.starts_with('.') {
            return Err(GeneratorError::Config(format!(
                "file_extension should not start with a dot: {}",
                self.file_extension
            )));
        }

        if !is_valid_java_package(&self.java_package) {
            return Err(GeneratorError::Config(format!(
                "invalid java_package: '{}'",
                self.java_package
            )));
        }

        Ok(())
    }

    /// Check if `path` has the configured definition file extension.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.file_extension.as_str())
    }
}

/// Check that a package is a dotted sequence of Java identifiers
fn is_valid_java_package(package: &str) -> bool {
    !package.is_empty()
        && package.split('.').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
                    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
                }
                _ => false,
            }
        })
}

/// Available definition extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Regular-expression heuristic ([`PatternExtractor`]).
    #[default]
    Pattern,
    /// Java-aware scanner ([`DeclarationExtractor`]).
    Declaration,
}

impl ExtractorKind {
    /// Create the extractor for this kind.
    pub fn build(self) -> Box<dyn DefinitionExtractor> {
        match self {
            ExtractorKind::Pattern => Box::new(PatternExtractor::new()),
            ExtractorKind::Declaration => Box::new(DeclarationExtractor::new()),
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractorKind::Pattern => write!(f, "pattern"),
            ExtractorKind::Declaration => write!(f, "declaration"),
        }
    }
}

impl FromStr for ExtractorKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pattern" => Ok(ExtractorKind::Pattern),
            "declaration" => Ok(ExtractorKind::Declaration),
            other => Err(GeneratorError::Config(format!(
                "unknown extractor '{other}' (expected pattern or declaration)"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
