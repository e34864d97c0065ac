//! The schema translation pass.
//!
//! For every definition file in the input directory the [`Translator`]
//! extracts a [`TypeDefinition`](crate::TypeDefinition), writes the matching
//! `<Type>Series.proto` and hands it to the schema compiler. Files are
//! handled one at a time, in path order, each to completion before the next.
//!
//! An extraction or filesystem error stops the whole run; schemas already
//! written stay on disk. Compiler failures follow the configured
//! [`CompilerFailurePolicy`].

use crate::compiler::{CompilerFailurePolicy, CompilerStatus, ProtocCompiler, SchemaCompiler};
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::extract::{DefinitionExtractor, extract_definition};
use crate::schema::SchemaDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the compiler step for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    /// Compilation is disabled.
    Skipped,
    /// The compiler exited successfully.
    Succeeded,
    /// The compiler exited unsuccessfully.
    Failed(CompilerStatus),
    /// The compiler could not be started.
    Unavailable(String),
}

/// One schema produced by a translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSchema {
    /// Extracted type name.
    pub type_name: String,

    /// Path of the written `.proto` file.
    pub proto_path: PathBuf,

    pub compile: CompileOutcome,
}

/// Runs the extraction, rendering and compilation pipeline.
pub struct Translator {
    config: GeneratorConfig,
    extractor: Box<dyn DefinitionExtractor>,
    compiler: Box<dyn SchemaCompiler>,
}

impl Translator {
    /// Create a translator using the extractor and compiler named by `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        let extractor = config.extractor.build();
        let compiler = Box::new(ProtocCompiler::new(config.compiler.executable.clone()));

        Self {
            config,
            extractor,
            compiler,
        }
    }

    /// Replace the schema compiler.
    pub fn with_compiler(mut self, compiler: impl SchemaCompiler + 'static) -> Self {
        self.compiler = Box::new(compiler);
        self
    }

    /// List definition files in the input directory, sorted by path.
    ///
    /// Only regular files with the configured extension are returned; hidden
    /// files and subdirectories are skipped.
    pub fn discover_inputs(&self) -> GeneratorResult<Vec<PathBuf>> {
        let dir = &self.config.input_dir;
        let list_err = |source: std::io::Error| GeneratorError::ListInputs {
            path: dir.clone(),
            source,
        };

        let mut inputs = Vec::new();
        for entry in fs::read_dir(dir).map_err(list_err)? {
            let path = entry.map_err(list_err)?.path();

            let hidden = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('.'));

            if !hidden && path.is_file() && self.config.matches_extension(&path) {
                inputs.push(path);
            }
        }

        inputs.sort();
        Ok(inputs)
    }

    /// Read one definition file and build its schema document.
    pub fn render_file(&self, path: &Path) -> GeneratorResult<SchemaDocument> {
        let source = fs::read_to_string(path).map_err(|source| GeneratorError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

        let definition = extract_definition(self.extractor.as_ref(), path, &source)?;

        Ok(SchemaDocument::from_definition(
            &definition,
            &self.config.java_package,
        ))
    }

    /// Generate, write and compile the schema for one definition file.
    pub fn translate_file(&self, path: &Path) -> GeneratorResult<GeneratedSchema> {
        let document = self.render_file(path)?;

        let proto_dir = &self.config.proto_out_dir;
        fs::create_dir_all(proto_dir).map_err(|source| GeneratorError::WriteSchema {
            path: proto_dir.clone(),
            source,
        })?;

        let proto_path = proto_dir.join(document.file_name());
        fs::write(&proto_path, document.render()).map_err(|source| {
            GeneratorError::WriteSchema {
                path: proto_path.clone(),
                source,
            }
        })?;

        tracing::info!(
            source = %path.display(),
            schema = %proto_path.display(),
            fields = document.fields.len(),
            "Wrote schema"
        );

        let compile = self.compile(&proto_path)?;

        Ok(GeneratedSchema {
            type_name: document.record_name,
            proto_path,
            compile,
        })
    }

    /// Translate every definition file in the input directory.
    ///
    /// Stops at the first error.
    pub fn run(&self) -> GeneratorResult<Vec<GeneratedSchema>> {
        let inputs = self.discover_inputs()?;

        tracing::info!(
            input_dir = %self.config.input_dir.display(),
            files = inputs.len(),
            extractor = self.extractor.name(),
            "Translating definitions"
        );

        inputs
            .iter()
            .map(|path| self.translate_file(path))
            .collect()
    }

    fn compile(&self, proto_path: &Path) -> GeneratorResult<CompileOutcome> {
        if !self.config.compiler.enabled {
            return Ok(CompileOutcome::Skipped);
        }

        let args = ProtocCompiler::java_args(
            &self.config.proto_out_dir,
            &self.config.output_java_dir,
            proto_path,
        );
        let policy = self.config.compiler.on_failure;

        match self.compiler.run(&args) {
            Ok(status) if status.success() => Ok(CompileOutcome::Succeeded),
            Ok(status) => match policy {
                CompilerFailurePolicy::Fail => Err(GeneratorError::CompilerFailed {
                    path: proto_path.to_path_buf(),
                    status,
                }),
                CompilerFailurePolicy::Warn => {
                    tracing::warn!(
                        schema = %proto_path.display(),
                        %status,
                        "Schema compiler failed"
                    );
                    Ok(CompileOutcome::Failed(status))
                }
                CompilerFailurePolicy::Ignore => Ok(CompileOutcome::Failed(status)),
            },
            Err(source) => {
                let program = self.compiler.program();
                match policy {
                    CompilerFailurePolicy::Fail => {
                        Err(GeneratorError::CompilerUnavailable { program, source })
                    }
                    CompilerFailurePolicy::Warn => {
                        tracing::warn!(%program, error = %source, "Schema compiler could not be started");
                        Ok(CompileOutcome::Unavailable(source.to_string()))
                    }
                    CompilerFailurePolicy::Ignore => {
                        Ok(CompileOutcome::Unavailable(source.to_string()))
                    }
                }
            }
        }
    }
}
