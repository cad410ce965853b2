//! Configuration management for the Canopy docs toolkit.
//!
//! Parses `canopy.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! The edit-link pattern supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "canopy.toml";

/// Search providers the site generator bundles.
const KNOWN_SEARCH_PROVIDERS: &[&str] = &["local"];

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the site base path.
    pub base: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteMeta,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Top-navigation entries.
    pub nav: Vec<NavEntry>,
    /// Sidebar section definitions.
    pub sidebar: Vec<SidebarEntry>,
    /// Social links.
    pub social: Vec<SocialEntry>,
    /// Search configuration.
    pub search: SearchConfig,
    /// Edit-link configuration.
    pub edit_link: Option<EditLinkConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Base path the site is served under. Must start and end with `/`.
    pub base: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: String::new(),
            base: "/".to_owned(),
        }
    }
}

/// Top-navigation entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NavEntry {
    /// Display text.
    pub text: String,
    /// Link target (site-relative path or absolute URL).
    pub link: String,
}

/// Sidebar section definition.
///
/// A section lists fixed `items`, names a `dir` to auto-generate items
/// from, or both.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SidebarEntry {
    /// Section heading text.
    pub text: String,
    /// Initial collapsed state.
    pub collapsed: Option<bool>,
    /// Fixed items.
    pub items: Vec<NavEntry>,
    /// Directory (relative to the docs source dir) to generate items from.
    pub dir: Option<String>,
}

/// Social link entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SocialEntry {
    /// Icon name known to the site generator.
    pub icon: String,
    /// Link target URL.
    pub link: String,
}

/// Search configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Provider name. Must be one of the generator's bundled providers.
    pub provider: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: "local".to_owned(),
        }
    }
}

/// Edit-link configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EditLinkConfig {
    /// URL pattern with a `:path` placeholder.
    pub pattern: String,
    /// Link label.
    pub text: Option<String>,
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`edit_link.pattern`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Expand environment variable references in a string.
///
/// Supports `${VAR}` (errors if unset) and `${VAR:-default}`. Bare `$VAR`
/// syntax is not expanded.
fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, String> {
        std::env::var(var).map(Some).map_err(|_| var.to_owned())
    })
    .map(|cow| cow.into_owned())
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause),
    })
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `canopy.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values. The merged
    /// configuration is validated before being returned.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base) = &settings.base {
            self.site.base.clone_from(base);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteMeta::default(),
            docs: DocsConfigRaw::default(),
            nav: Vec::new(),
            sidebar: Vec::new(),
            social: Vec::new(),
            search: SearchConfig::default(),
            edit_link: None,
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut edit_link) = self.edit_link {
            edit_link.pattern = expand_env(&edit_link.pattern, "edit_link.pattern")?;
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid
    /// values. Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_nav()?;
        self.validate_sidebar()?;
        self.validate_search()?;
        self.validate_edit_link()?;
        Ok(())
    }

    /// Validate site identity.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;

        if !self.site.base.starts_with('/') || !self.site.base.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base must start and end with '/'".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate top-navigation entries.
    fn validate_nav(&self) -> Result<(), ConfigError> {
        for entry in &self.nav {
            require_non_empty(&entry.text, "nav.text")?;
            require_non_empty(&entry.link, "nav.link")?;
        }
        Ok(())
    }

    /// Validate sidebar sections.
    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        for section in &self.sidebar {
            require_non_empty(&section.text, "sidebar.text")?;
            for item in &section.items {
                require_non_empty(&item.text, "sidebar.items.text")?;
                require_non_empty(&item.link, "sidebar.items.link")?;
            }
            if let Some(dir) = &section.dir {
                require_non_empty(dir, "sidebar.dir")?;
                // Absolute paths cannot be joined under the docs root
                if dir.starts_with('/') {
                    return Err(ConfigError::Validation(format!(
                        "sidebar.dir must be relative to the docs source dir, got '{dir}'"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate search provider selection.
    fn validate_search(&self) -> Result<(), ConfigError> {
        if !KNOWN_SEARCH_PROVIDERS.contains(&self.search.provider.as_str()) {
            return Err(ConfigError::Validation(format!(
                "search.provider must be one of: {}",
                KNOWN_SEARCH_PROVIDERS.join(", ")
            )));
        }
        Ok(())
    }

    /// Validate edit-link templating.
    fn validate_edit_link(&self) -> Result<(), ConfigError> {
        if let Some(edit_link) = &self.edit_link {
            require_non_empty(&edit_link.pattern, "edit_link.pattern")?;
            require_http_url(&edit_link.pattern, "edit_link.pattern")?;
            if !edit_link.pattern.contains(":path") {
                return Err(ConfigError::Validation(
                    "edit_link.pattern must contain a :path placeholder".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
