//! Site configuration model and sidebar generation for Canopy docs.
//!
//! This crate provides:
//! - The data model the external site generator consumes: [`SiteConfig`]
//!   with its [`ThemeConfig`] (navigation, sidebar, social links, search,
//!   edit link)
//! - [`sidebar_items`]: sidebar item generation from a directory of
//!   Markdown files
//! - [`build_site_config`]: assembly of a complete [`SiteConfig`] from a
//!   declarative [`SiteSpec`]
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> std::io::Result<()> {
//! use std::path::Path;
//! use canopy_site::{SiteSpec, SectionSpec, build_site_config};
//!
//! let spec = SiteSpec {
//!     title: "Canopy".to_owned(),
//!     sections: vec![SectionSpec {
//!         text: "Design Docs".to_owned(),
//!         collapsed: Some(true),
//!         auto_dir: Some("design".to_owned()),
//!         ..SectionSpec::default()
//!     }],
//!     ..SiteSpec::default()
//! };
//!
//! let site = build_site_config(Path::new("docs"), spec)?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod nav;
pub(crate) mod sidebar;
pub(crate) mod site;
pub(crate) mod theme;

pub use nav::NavItem;
pub use sidebar::{SidebarSection, sidebar_items, title_from_slug};
pub use site::{SectionSpec, SiteSpec, build_site_config};
pub use theme::{EditLink, SearchOptions, SearchProvider, SiteConfig, SocialLink, ThemeConfig};
