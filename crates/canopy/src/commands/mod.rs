//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod emit;

pub(crate) use check::CheckArgs;
pub(crate) use emit::EmitArgs;

use canopy_config::Config;
use canopy_site::{
    EditLink, NavItem, SearchOptions, SearchProvider, SectionSpec, SiteSpec, SocialLink,
};

/// Map a loaded [`Config`] to the declarative [`SiteSpec`] the assembler
/// consumes.
///
/// The config is assumed to be validated, so the search provider is one of
/// the known names.
pub(crate) fn site_spec(config: &Config) -> SiteSpec {
    let search = match config.search.provider.as_str() {
        "local" => Some(SearchOptions {
            provider: SearchProvider::Local,
        }),
        _ => None,
    };

    SiteSpec {
        title: config.site.title.clone(),
        description: config.site.description.clone(),
        base: config.site.base.clone(),
        nav: config
            .nav
            .iter()
            .map(|entry| NavItem::new(&entry.text, &entry.link))
            .collect(),
        sections: config
            .sidebar
            .iter()
            .map(|section| SectionSpec {
                text: section.text.clone(),
                collapsed: section.collapsed,
                items: section
                    .items
                    .iter()
                    .map(|item| NavItem::new(&item.text, &item.link))
                    .collect(),
                auto_dir: section.dir.clone(),
            })
            .collect(),
        social_links: config
            .social
            .iter()
            .map(|entry| SocialLink {
                icon: entry.icon.clone(),
                link: entry.link.clone(),
            })
            .collect(),
        search,
        edit_link: config.edit_link.as_ref().map(|edit_link| EditLink {
            pattern: edit_link.pattern.clone(),
            text: edit_link.text.clone(),
        }),
    }
}
