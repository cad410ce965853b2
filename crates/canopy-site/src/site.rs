//! Site configuration assembly.
//!
//! Builds a complete [`SiteConfig`] from a declarative [`SiteSpec`],
//! running sidebar item generation for sections that request it. This is
//! the single evaluation step: the result is computed fresh on each call
//! from the filesystem state at call time.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::nav::NavItem;
use crate::sidebar::{SidebarSection, sidebar_items};
use crate::theme::{EditLink, SearchOptions, SiteConfig, SocialLink, ThemeConfig};

/// Path prefix the assembled sidebar is registered under.
const ROOT_PREFIX: &str = "/";

/// Declarative description of one sidebar section.
///
/// A section lists fixed items, names a directory to generate items from,
/// or both. Generated items are appended after the fixed ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionSpec {
    /// Section heading text.
    pub text: String,
    /// Initial collapsed state.
    pub collapsed: Option<bool>,
    /// Fixed items, kept in declaration order.
    pub items: Vec<NavItem>,
    /// Directory (relative to the docs root) to generate items from.
    pub auto_dir: Option<String>,
}

/// Declarative description of the whole site.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteSpec {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Base path the site is served under.
    pub base: String,
    /// Top-navigation entries.
    pub nav: Vec<NavItem>,
    /// Sidebar sections in declaration order.
    pub sections: Vec<SectionSpec>,
    /// Social links.
    pub social_links: Vec<SocialLink>,
    /// Search provider selection.
    pub search: Option<SearchOptions>,
    /// Edit-link template.
    pub edit_link: Option<EditLink>,
}

/// Assemble a [`SiteConfig`] from a [`SiteSpec`].
///
/// Sections that name an `auto_dir` get their items extended with the
/// generated entries for that directory. The sidebar is registered under
/// the root path prefix.
///
/// # Errors
///
/// Returns any I/O error raised by sidebar generation. A missing
/// `auto_dir` is not an error (the section keeps only its fixed items).
pub fn build_site_config(docs_root: &Path, spec: SiteSpec) -> io::Result<SiteConfig> {
    let mut sections = Vec::with_capacity(spec.sections.len());
    for section in spec.sections {
        let mut items = section.items;
        if let Some(dir) = &section.auto_dir {
            items.extend(sidebar_items(docs_root, dir)?);
        }
        sections.push(SidebarSection {
            text: section.text,
            collapsed: section.collapsed,
            items,
        });
    }

    let mut sidebar = BTreeMap::new();
    if !sections.is_empty() {
        sidebar.insert(ROOT_PREFIX.to_owned(), sections);
    }

    Ok(SiteConfig {
        title: spec.title,
        description: spec.description,
        base: spec.base,
        theme_config: ThemeConfig {
            nav: spec.nav,
            sidebar,
            social_links: spec.social_links,
            search: spec.search,
            edit_link: spec.edit_link,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn create_docs_root() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_empty_spec_builds_empty_config() {
        let docs_root = create_docs_root();

        let site = build_site_config(docs_root.path(), SiteSpec::default()).unwrap();

        assert!(site.theme_config.sidebar.is_empty());
        assert!(site.theme_config.nav.is_empty());
    }

    #[test]
    fn test_fixed_items_precede_generated() {
        let docs_root = create_docs_root();
        let design = docs_root.path().join("design");
        fs::create_dir(&design).unwrap();
        fs::write(design.join("schema.md"), "# Schema").unwrap();

        let spec = SiteSpec {
            sections: vec![SectionSpec {
                text: "Design".to_owned(),
                items: vec![NavItem::new("Philosophy", "/philosophy")],
                auto_dir: Some("design".to_owned()),
                ..SectionSpec::default()
            }],
            ..SiteSpec::default()
        };

        let site = build_site_config(docs_root.path(), spec).unwrap();

        let sections = &site.theme_config.sidebar[ROOT_PREFIX];
        assert_eq!(
            sections[0].items,
            vec![
                NavItem::new("Philosophy", "/philosophy"),
                NavItem::new("Schema", "/design/schema"),
            ]
        );
    }

    #[test]
    fn test_sections_keep_declaration_order() {
        let docs_root = create_docs_root();

        let spec = SiteSpec {
            sections: vec![
                SectionSpec {
                    text: "Design".to_owned(),
                    items: vec![NavItem::new("Architecture", "/architecture")],
                    ..SectionSpec::default()
                },
                SectionSpec {
                    text: "Design Docs".to_owned(),
                    collapsed: Some(true),
                    auto_dir: Some("design".to_owned()),
                    ..SectionSpec::default()
                },
            ],
            ..SiteSpec::default()
        };

        let site = build_site_config(docs_root.path(), spec).unwrap();

        let sections = &site.theme_config.sidebar[ROOT_PREFIX];
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].text, "Design");
        assert_eq!(sections[1].text, "Design Docs");
        assert_eq!(sections[1].collapsed, Some(true));
        // The auto directory does not exist, so the section has no items
        assert!(sections[1].items.is_empty());
    }

    #[test]
    fn test_sidebar_registered_under_root_prefix() {
        let docs_root = create_docs_root();

        let spec = SiteSpec {
            sections: vec![SectionSpec {
                text: "Design".to_owned(),
                ..SectionSpec::default()
            }],
            ..SiteSpec::default()
        };

        let site = build_site_config(docs_root.path(), spec).unwrap();

        assert_eq!(site.theme_config.sidebar.len(), 1);
        assert!(site.theme_config.sidebar.contains_key("/"));
    }

    #[test]
    fn test_site_metadata_carried_through() {
        let docs_root = create_docs_root();

        let spec = SiteSpec {
            title: "Canopy".to_owned(),
            description: "Universal data UI client".to_owned(),
            base: "/canopy/".to_owned(),
            nav: vec![NavItem::new("Philosophy", "/philosophy")],
            search: Some(SearchOptions::default()),
            edit_link: Some(EditLink {
                pattern: "https://example.com/edit/:path".to_owned(),
                text: None,
            }),
            ..SiteSpec::default()
        };

        let site = build_site_config(docs_root.path(), spec).unwrap();

        assert_eq!(site.title, "Canopy");
        assert_eq!(site.description, "Universal data UI client");
        assert_eq!(site.base, "/canopy/");
        assert_eq!(site.theme_config.nav.len(), 1);
        assert!(site.theme_config.search.is_some());
        assert!(site.theme_config.edit_link.is_some());
    }
}
