//! `canopy emit` command implementation.

use std::io::Write;
use std::path::PathBuf;

use canopy_config::{CliSettings, Config};
use canopy_site::build_site_config;
use clap::Args;
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the emit command.
#[derive(Args)]
pub(crate) struct EmitArgs {
    /// Write the JSON document to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long)]
    base: Option<String>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Path to configuration file (default: auto-discover canopy.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl EmitArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            base: self.base.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let spec = super::site_spec(&config);
        let site = build_site_config(&config.docs_resolved.source_dir, spec)?;

        let section_count: usize = site.theme_config.sidebar.values().map(Vec::len).sum();
        info!(sections = section_count, "assembled site configuration");

        let json = if self.compact {
            serde_json::to_string(&site)?
        } else {
            serde_json::to_string_pretty(&site)?
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{json}\n"))?;
                output.success(&format!(
                    "Site configuration written to {}",
                    path.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}
