//! Generate command implementation

use anyhow::{Context, Result};
use protoseries_core::{CompileOutcome, GeneratedSchema, GeneratorConfig, Translator};

/// Run the generate command
pub fn run(config: GeneratorConfig) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    println!(
        "Generating schemas from: {}",
        config.input_dir.display()
    );

    let translator = Translator::new(config);
    let generated = translator.run().context("Schema generation failed")?;

    for schema in &generated {
        println!("{}", summary_line(schema));
    }
    println!("\nGenerated {} schema(s)", generated.len());

    Ok(())
}

fn summary_line(schema: &GeneratedSchema) -> String {
    let outcome = match &schema.compile {
        CompileOutcome::Skipped => "not compiled".to_string(),
        CompileOutcome::Succeeded => "compiled".to_string(),
        CompileOutcome::Failed(status) => format!("protoc failed: {status}"),
        CompileOutcome::Unavailable(reason) => format!("protoc unavailable: {reason}"),
    };
    let mark = match schema.compile {
        CompileOutcome::Skipped | CompileOutcome::Succeeded => '✓',
        _ => '!',
    };

    format!("{mark} {} ({outcome})", schema.proto_path.display())
}
