//! protoseries CLI - proto2 time-series schema generator
//!
//! Commands:
//! - `protoseries generate` - Generate schemas and Java bindings for a directory
//! - `protoseries render` - Print the schema for a single definition file
//! - `protoseries check` - Validate a protoseries.toml configuration

use clap::{Parser, Subcommand};

mod check;
mod config;
mod generate;
mod logging;
mod render;

use config::{ConfigOverrides, load_config};

#[derive(Parser)]
#[command(name = "protoseries")]
#[command(author, version, about = "Generate proto2 time-series schemas from Java types", long_about = None)]
struct Cli {
    /// Log level or tracing filter directive (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a schema for every definition file and compile it with protoc
    Generate {
        /// Path to protoseries.toml (default: ./protoseries.toml if present)
        #[arg(short, long)]
        config: Option<String>,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Print the schema for one definition file without writing anything
    Render {
        /// Path to the Java definition file
        file: String,

        /// Path to protoseries.toml (default: ./protoseries.toml if present)
        #[arg(short, long)]
        config: Option<String>,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Validate a protoseries.toml configuration
    Check {
        /// Path to protoseries.toml (default: ./protoseries.toml if present)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { config, overrides } => {
            let config = overrides.apply(load_config(config.as_deref())?);
            logging::init_logging(cli.log_level.as_deref(), &config.log_level)?;
            generate::run(config)?;
        }
        Commands::Render {
            file,
            config,
            overrides,
        } => {
            let config = overrides.apply(load_config(config.as_deref())?);
            logging::init_logging(cli.log_level.as_deref(), &config.log_level)?;
            render::run(&file, config)?;
        }
        Commands::Check { config } => {
            check::run(config.as_deref())?;
        }
    }

    Ok(())
}
