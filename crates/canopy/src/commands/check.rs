//! `canopy check` command implementation.

use std::path::PathBuf;

use canopy_config::{CliSettings, Config};
use canopy_site::build_site_config;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover canopy.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Docs root: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Site: {} ({})",
            config.site.title, config.site.base
        ));

        let spec = super::site_spec(&config);
        let site = build_site_config(&config.docs_resolved.source_dir, spec)?;

        output.info(&format!("Nav entries: {}", site.theme_config.nav.len()));

        // Sections preserve declaration order, so zip against the config to
        // split fixed items from generated ones
        if let Some(sections) = site.theme_config.sidebar.get("/") {
            for (entry, section) in config.sidebar.iter().zip(sections) {
                let fixed = entry.items.len();
                let generated = section.items.len() - fixed;
                output.info(&format!(
                    "Sidebar '{}': {fixed} fixed item(s), {generated} generated",
                    section.text
                ));
            }
        }

        output.success("Configuration OK");
        Ok(())
    }
}
