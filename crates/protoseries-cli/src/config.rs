//! Configuration loading and command-line overrides

use anyhow::{Context, Result};
use clap::Args;
use protoseries_core::{CompilerFailurePolicy, DEFAULT_CONFIG_FILE, ExtractorKind, GeneratorConfig};
use std::path::{Path, PathBuf};

/// Flags that override values from the configuration file
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Directory containing the Java type definitions
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Directory for the Java bindings generated by protoc
    #[arg(long)]
    pub java_out: Option<PathBuf>,

    /// Directory for the generated .proto files
    #[arg(long)]
    pub proto_out: Option<PathBuf>,

    /// Java package of the generated schema classes
    #[arg(short, long)]
    pub package: Option<String>,

    /// Path of the protoc executable
    #[arg(long)]
    pub protoc: Option<PathBuf>,

    /// Write .proto files without running protoc
    #[arg(long)]
    pub no_compile: bool,

    /// Definition extractor (pattern, declaration)
    #[arg(short, long)]
    pub extractor: Option<ExtractorKind>,

    /// What to do when protoc fails (ignore, warn, fail)
    #[arg(long)]
    pub on_compiler_failure: Option<CompilerFailurePolicy>,
}

impl ConfigOverrides {
    /// Apply the flags that were given on top of `config`
    pub fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(dir) = self.input_dir {
            config.input_dir = dir;
        }
        if let Some(dir) = self.java_out {
            config.output_java_dir = dir;
        }
        if let Some(dir) = self.proto_out {
            config.proto_out_dir = dir;
        }
        if let Some(package) = self.package {
            config.java_package = package;
        }
        if let Some(protoc) = self.protoc {
            config.compiler.executable = protoc;
        }
        if self.no_compile {
            config.compiler.enabled = false;
        }
        if let Some(extractor) = self.extractor {
            config.extractor = extractor;
        }
        if let Some(policy) = self.on_compiler_failure {
            config.compiler.on_failure = policy;
        }
        config
    }
}

/// Load the configuration file.
///
/// Uses `path` when given, otherwise `./protoseries.toml` if it exists, and
/// falls back to the built-in defaults.
pub fn load_config(path: Option<&str>) -> Result<GeneratorConfig> {
    match resolve_config_path(path) {
        Some(path) => GeneratorConfig::from_file(&path)
            .with_context(|| format!("Failed to load configuration: {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

fn resolve_config_path(path: Option<&str>) -> Option<PathBuf> {
    match path {
        Some(path) => Some(PathBuf::from(path)),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            default.is_file().then(|| default.to_path_buf())
        }
    }
}
