#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GeneratorConfig___default___matches_server_layout() {
    let config = GeneratorConfig::default();

    assert_eq!(
        config.input_dir,
        PathBuf::from("./crypto-strats-server/src/main/java/io/hbar/fx/data/series/types")
    );
    assert_eq!(
        config.output_java_dir,
        PathBuf::from("./crypto-strats-server/src/main/java")
    );
    assert_eq!(config.proto_out_dir, PathBuf::from("."));
    assert_eq!(config.java_package, "io.hbar.protobuf.schema");
    assert_eq!(config.file_extension, "java");
    assert_eq!(config.extractor, ExtractorKind::Pattern);
    assert_eq!(config.compiler.executable, PathBuf::from("/usr/local/bin/protoc"));
    assert!(config.compiler.enabled);
    assert_eq!(config.compiler.on_failure, CompilerFailurePolicy::Warn);
    assert!(config.validate().is_ok());
}

#[test]
fn GeneratorConfig___from_toml___empty_document_uses_defaults() {
    let config = GeneratorConfig::from_toml("").unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___from_toml___parses_all_keys() {
    let toml = r#"
input_dir = "defs"
output_java_dir = "gen/java"
proto_out_dir = "gen/proto"
java_package = "com.example.schema"
file_extension = "jav"
extractor = "declaration"
log_level = "debug"

[compiler]
executable = "protoc"
enabled = false
on_failure = "fail"
"#;

    let config = GeneratorConfig::from_toml(toml).unwrap();

    assert_eq!(config.input_dir, PathBuf::from("defs"));
    assert_eq!(config.output_java_dir, PathBuf::from("gen/java"));
    assert_eq!(config.proto_out_dir, PathBuf::from("gen/proto"));
    assert_eq!(config.java_package, "com.example.schema");
    assert_eq!(config.file_extension, "jav");
    assert_eq!(config.extractor, ExtractorKind::Declaration);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.compiler.executable, PathBuf::from("protoc"));
    assert!(!config.compiler.enabled);
    assert_eq!(config.compiler.on_failure, CompilerFailurePolicy::Fail);
}

#[test]
fn GeneratorConfig___from_toml___partial_compiler_table_keeps_defaults() {
    let config = GeneratorConfig::from_toml("[compiler]\nenabled = false\n").unwrap();

    assert!(!config.compiler.enabled);
    assert_eq!(config.compiler.executable, PathBuf::from("/usr/local/bin/protoc"));
}

#[test]
fn GeneratorConfig___from_toml___rejects_unknown_extractor() {
    let result = GeneratorConfig::from_toml("extractor = \"antlr\"");

    assert!(matches!(result, Err(GeneratorError::Config(_))));
}

#[test]
fn GeneratorConfig___from_file___missing_file___returns_config_error() {
    let result = GeneratorConfig::from_file("/nonexistent/protoseries.toml");

    assert!(matches!(result, Err(GeneratorError::Config(_))));
}

#[test]
fn GeneratorConfig___from_file___reads_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(&path, "java_package = \"org.sample\"\n").unwrap();

    let config = GeneratorConfig::from_file(&path).unwrap();

    assert_eq!(config.java_package, "org.sample");
}

// Validation tests

#[test_case("io.hbar.protobuf.schema" ; "dotted")]
#[test_case("schema" ; "single segment")]
#[test_case("com.$internal._gen2" ; "dollar and underscore")]
fn GeneratorConfig___validate___accepts_package(package: &str) {
    let config = GeneratorConfig {
        java_package: package.to_string(),
        ..GeneratorConfig::default()
    };

    assert!(config.validate().is_ok());
}

#[test_case("" ; "empty")]
#[test_case("io..hbar" ; "empty segment")]
#[test_case("io.hbar." ; "trailing dot")]
#[test_case("io.1hbar" ; "leading digit")]
#[test_case("io.hb-ar" ; "dash")]
fn GeneratorConfig___validate___rejects_package(package: &str) {
    let config = GeneratorConfig {
        java_package: package.to_string(),
        ..GeneratorConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn GeneratorConfig___validate___rejects_empty_input_dir() {
    let config = GeneratorConfig {
        input_dir: PathBuf::new(),
        ..GeneratorConfig::default()
    };

    let err = config.validate().unwrap_err();

    assert!(err.to_string().contains("input_dir"));
}

#[test_case("" ; "empty")]
#[test_case(".java" ; "leading dot")]
fn GeneratorConfig___validate___rejects_extension(extension: &str) {
    let config = GeneratorConfig {
        file_extension: extension.to_string(),
        ..GeneratorConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn GeneratorConfig___matches_extension___compares_exactly() {
    let config = GeneratorConfig::default();

    assert!(config.matches_extension(Path::new("types/OHLCV.java")));
    assert!(!config.matches_extension(Path::new("types/OHLCV.java.bak")));
    assert!(!config.matches_extension(Path::new("types/OHLCV.JAVA")));
    assert!(!config.matches_extension(Path::new("types/README")));
}

// ExtractorKind tests

#[test_case("pattern", ExtractorKind::Pattern)]
#[test_case("declaration", ExtractorKind::Declaration)]
fn ExtractorKind___from_str___parses(input: &str, expected: ExtractorKind) {
    let kind: ExtractorKind = input.parse().unwrap();

    assert_eq!(kind, expected);
    assert_eq!(kind.to_string(), input);
    assert_eq!(kind.build().name(), input);
}

#[test]
fn ExtractorKind___from_str___rejects_unknown() {
    assert!("regex".parse::<ExtractorKind>().is_err());
}
