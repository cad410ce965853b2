//! Theme and site configuration types.
//!
//! These types serialize to the JSON document the external site generator
//! consumes, using its field spelling (`themeConfig`, `socialLinks`,
//! `editLink`). Empty collections and unset options are omitted so the
//! emitted document only contains what the site actually configures.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::nav::NavItem;
use crate::sidebar::SidebarSection;

/// Social media link rendered in the site header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Icon name known to the site generator (e.g. "github").
    pub icon: String,
    /// Link target URL.
    pub link: String,
}

/// Bundled search provider selection.
///
/// Only the provider is selected here; the search implementation itself is
/// owned by the site generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index bundled with the generated site.
    #[default]
    Local,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    /// Selected provider.
    pub provider: SearchProvider,
}

/// Edit-link templating for "edit this page" affordances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditLink {
    /// URL pattern with a `:path` placeholder the generator substitutes
    /// with the page's source path.
    pub pattern: String,
    /// Link label. Omitted to use the generator's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Theme-level configuration: navigation, sidebar, and page chrome.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Top-navigation entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavItem>,
    /// Sidebar sections keyed by path prefix.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub sidebar: BTreeMap<String, Vec<SidebarSection>>,
    /// Social links.
    #[serde(rename = "socialLinks", skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
    /// Search provider selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchOptions>,
    /// Edit-link template.
    #[serde(rename = "editLink", skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
}

/// Complete site configuration handed to the external generator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Base path the site is served under (e.g. "/canopy/"). Applied to
    /// links by the generator, not by this configuration.
    pub base: String,
    /// Theme configuration.
    #[serde(rename = "themeConfig")]
    pub theme_config: ThemeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_provider_serializes_lowercase() {
        let options = SearchOptions {
            provider: SearchProvider::Local,
        };

        let json = serde_json::to_value(options).unwrap();

        assert_eq!(json["provider"], "local");
    }

    #[test]
    fn test_edit_link_omits_unset_text() {
        let edit_link = EditLink {
            pattern: "https://github.com/rhizome-lab/canopy/edit/master/docs/:path".to_owned(),
            text: None,
        };

        let json = serde_json::to_value(&edit_link).unwrap();

        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_theme_config_uses_generator_field_names() {
        let theme = ThemeConfig {
            social_links: vec![SocialLink {
                icon: "github".to_owned(),
                link: "https://github.com/rhizome-lab/canopy".to_owned(),
            }],
            edit_link: Some(EditLink {
                pattern: "https://example.com/edit/:path".to_owned(),
                text: Some("Edit this page".to_owned()),
            }),
            ..ThemeConfig::default()
        };

        let json = serde_json::to_value(&theme).unwrap();

        assert_eq!(json["socialLinks"][0]["icon"], "github");
        assert_eq!(json["editLink"]["text"], "Edit this page");
    }

    #[test]
    fn test_theme_config_omits_empty_collections() {
        let theme = ThemeConfig::default();

        let json = serde_json::to_value(&theme).unwrap();

        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_site_config_nests_theme_config() {
        let site = SiteConfig {
            title: "Canopy".to_owned(),
            description: "Universal data UI client".to_owned(),
            base: "/canopy/".to_owned(),
            theme_config: ThemeConfig {
                search: Some(SearchOptions::default()),
                ..ThemeConfig::default()
            },
        };

        let json = serde_json::to_value(&site).unwrap();

        assert_eq!(json["title"], "Canopy");
        assert_eq!(json["base"], "/canopy/");
        assert_eq!(json["themeConfig"]["search"]["provider"], "local");
    }
}
