//! `halcyon` — print the front-end layout and theme constants.
//!
//! Build pipelines use this to feed the same values to stylesheets and
//! scripts that the Rust crates compile against.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use halcyon_core::{ExportConfig, ExportFormat, HalcyonError, Snapshot};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "halcyon", version, about = "Print the halcyon layout and theme constants")]
struct Cli {
    /// Output format: json, toml or css. Defaults to the config value.
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Read settings from this file instead of the user config.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prefix for CSS custom property names.
    #[arg(long)]
    css_prefix: Option<String>,

    /// Single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Print the user config path and exit.
    #[arg(long)]
    config_path: bool,
}

impl Cli {
    /// Load the config file, then apply flag overrides.
    fn resolve_config(&self) -> Result<ExportConfig, HalcyonError> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::load_from(path)?,
            None => ExportConfig::load()?,
        };
        if let Some(format) = self.format {
            config.export.format = format;
        }
        if let Some(prefix) = &self.css_prefix {
            config.css.prefix = prefix.clone();
        }
        if self.compact {
            config.export.pretty = false;
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), HalcyonError> {
    if cli.config_path {
        println!("{}", ExportConfig::config_path().display());
        return Ok(());
    }

    let config = cli.resolve_config()?;
    let out = Snapshot::CURRENT.render(config.export.format, &config)?;
    print!("{out}");
    if !out.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("halcyon=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
