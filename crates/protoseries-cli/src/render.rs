//! Render command implementation

use anyhow::{Context, Result};
use protoseries_core::{GeneratorConfig, Translator};
use std::io::Write;
use std::path::Path;

/// Print the schema for one definition file to stdout
pub fn run(file: &str, config: GeneratorConfig) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let document = Translator::new(config)
        .render_file(Path::new(file))
        .with_context(|| format!("Failed to render {file}"))?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(document.render().as_bytes())
        .context("Failed to write schema to stdout")?;
    stdout.flush()?;

    Ok(())
}
