//! Navigation entry type shared by top navigation and sidebar.

use serde::{Deserialize, Serialize};

/// Navigation entry with display text and a link target.
///
/// Used both for top-navigation entries (where the link may be an external
/// URL) and for sidebar items (site-relative paths without extension).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display text.
    pub text: String,
    /// Link target (site-relative path or absolute URL).
    pub link: String,
}

impl NavItem {
    /// Create a navigation entry.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_text_and_link() {
        let item = NavItem::new("Philosophy", "/philosophy");

        assert_eq!(item.text, "Philosophy");
        assert_eq!(item.link, "/philosophy");
    }

    #[test]
    fn test_serialization() {
        let item = NavItem::new("Architecture", "/architecture");

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["text"], "Architecture");
        assert_eq!(json["link"], "/architecture");
    }

    #[test]
    fn test_deserialization() {
        let item: NavItem =
            serde_json::from_str(r#"{"text": "Rhizome", "link": "https://rhizome-lab.github.io/"}"#)
                .unwrap();

        assert_eq!(item.text, "Rhizome");
        assert_eq!(item.link, "https://rhizome-lab.github.io/");
    }
}
