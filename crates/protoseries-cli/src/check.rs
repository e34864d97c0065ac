//! Check command implementation

use crate::config::load_config;
use anyhow::Result;
use protoseries_core::GeneratorConfig;

/// Validate the configuration and print its effective values
pub fn run(config_path: Option<&str>) -> Result<()> {
    println!(
        "Checking configuration: {}",
        config_path.unwrap_or("protoseries.toml (or defaults)")
    );

    let config = load_config(config_path)?;
    config.validate()?;

    for line in describe(&config) {
        println!("{line}");
    }
    if !config.input_dir.is_dir() {
        println!("! input_dir does not exist yet");
    }
    println!("\nConfiguration is valid!");

    Ok(())
}

/// One line per effective setting
fn describe(config: &GeneratorConfig) -> Vec<String> {
    let compiler = if config.compiler.enabled {
        format!(
            "{} (on failure: {})",
            config.compiler.executable.display(),
            config.compiler.on_failure
        )
    } else {
        "disabled".to_string()
    };

    vec![
        format!("✓ Input: {}/*.{}", config.input_dir.display(), config.file_extension),
        format!("✓ Proto output: {}", config.proto_out_dir.display()),
        format!("✓ Java output: {}", config.output_java_dir.display()),
        format!("✓ Java package: {}", config.java_package),
        format!("✓ Extractor: {}", config.extractor),
        format!("✓ Compiler: {compiler}"),
    ]
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn describe___default_config___lists_settings() {
        let lines = describe(&GeneratorConfig::default());

        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with("io/hbar/fx/data/series/types/*.java"));
        assert_eq!(lines[3], "✓ Java package: io.hbar.protobuf.schema");
        assert_eq!(lines[4], "✓ Extractor: pattern");
        assert_eq!(lines[5], "✓ Compiler: /usr/local/bin/protoc (on failure: warn)");
    }

    #[test]
    fn describe___compiler_disabled___says_so() {
        let mut config = GeneratorConfig::default();
        config.compiler.enabled = false;

        let lines = describe(&config);

        assert_eq!(lines[5], "✓ Compiler: disabled");
    }

    #[test]
    fn run___invalid_config_file___returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("protoseries.toml");
        std::fs::write(&path, "file_extension = \".java\"\n").unwrap();

        assert!(run(path.to_str()).is_err());
    }
}
