use serde::Deserialize;
use strum::{Display, EnumString};

/// Substring that marks a top-level entry as the product catalog when no
/// explicit [`MenuKind`] is supplied.
pub const CATALOG_MARKER: &str = "product";

/// Explicit discriminant for a top-level entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MenuKind {
    /// Navigates on click and shows its static sub-items on hover.
    #[default]
    Standard,
    /// Never navigates. Its dropdown lists the product categories.
    Catalog,
}

/// A static link in the dropdown of a standard entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubItem {
    /// Link text.
    pub title: String,
    /// Link target.
    pub path: String,
}

/// One entry of the horizontal menu bar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuEntry {
    /// Label text.
    pub pagename: Option<String>,
    /// Where clicking the label navigates to.
    pub path: Option<String>,
    /// Links shown in the dropdown of a standard entry.
    pub sub_items: Vec<SubItem>,
    /// Explicit kind. Overrides the name-based classification.
    pub kind: Option<MenuKind>,
}

impl MenuEntry {
    /// An entry labelled `pagename` with no path and no sub-items.
    pub fn new(pagename: impl Into<String>) -> Self {
        Self {
            pagename: Some(pagename.into()),
            ..Self::default()
        }
    }

    /// Sets the click target.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Appends a dropdown link.
    #[must_use]
    pub fn with_sub_item(mut self, title: impl Into<String>, path: impl Into<String>) -> Self {
        self.sub_items.push(SubItem {
            title: title.into(),
            path: path.into(),
        });
        self
    }

    /// Sets the explicit kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: MenuKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// The label text. A missing pagename renders as nothing.
    pub fn label(&self) -> &str {
        self.pagename.as_deref().unwrap_or_default()
    }

    /// The effective kind of this entry.
    ///
    /// An explicit `kind` wins. Without one, any pagename containing
    /// [`CATALOG_MARKER`] (ignoring case) is treated as the catalog.
    pub fn kind(&self) -> MenuKind {
        if let Some(kind) = self.kind {
            return kind;
        }
        match &self.pagename {
            Some(name) if name.to_lowercase().contains(CATALOG_MARKER) => MenuKind::Catalog,
            _ => MenuKind::Standard,
        }
    }

    /// Whether this entry lists the product categories.
    pub fn is_catalog(&self) -> bool {
        self.kind() == MenuKind::Catalog
    }

    /// Path handed to the navigation callback when the label is clicked.
    pub fn click_target(&self) -> Option<&str> {
        if self.is_catalog() {
            return None;
        }
        self.path.as_deref().filter(|path| !path.is_empty())
    }

    /// Whether hovering this entry can reveal a dropdown panel.
    pub fn has_dropdown(&self) -> bool {
        self.is_catalog() || !self.sub_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_catalog_detected_from_name_in_any_case() {
        for name in ["Products", "OUR PRODUCTS", "product range", "byProductLine"] {
            assert!(
                MenuEntry::new(name).is_catalog(),
                "{name} should be classified as the catalog"
            );
        }
        assert!(!MenuEntry::new("About Us").is_catalog());
        assert!(!MenuEntry::default().is_catalog());
    }

    #[test]
    fn test_explicit_kind_overrides_name() {
        let entry = MenuEntry::new("Production Facility").with_kind(MenuKind::Standard);
        assert!(!entry.is_catalog());

        let entry = MenuEntry::new("Shop").with_kind(MenuKind::Catalog);
        assert!(entry.is_catalog());
        assert!(entry.has_dropdown());
    }

    #[test]
    fn test_catalog_never_has_click_target() {
        let entry = MenuEntry::new("Products").with_path("/products");
        assert_eq!(entry.click_target(), None);
    }

    #[test]
    fn test_click_target_requires_non_empty_path() {
        assert_eq!(
            MenuEntry::new("About").with_path("/about").click_target(),
            Some("/about")
        );
        assert_eq!(MenuEntry::new("About").with_path("").click_target(), None);
        assert_eq!(MenuEntry::new("About").click_target(), None);
    }

    #[test]
    fn test_dropdown_only_with_sub_items_for_standard_entries() {
        let plain = MenuEntry::new("Contact").with_path("/contact");
        assert!(!plain.has_dropdown());

        let nested = MenuEntry::new("Company").with_sub_item("Team", "/team");
        assert!(nested.has_dropdown());

        // The catalog shows a panel even without categories.
        assert!(MenuEntry::new("Products").has_dropdown());
    }

    #[test]
    fn test_missing_pagename_renders_empty_label() {
        assert_eq!(MenuEntry::default().label(), "");
    }

    #[test]
    fn test_deserialize_camel_case_payload() {
        let entry: MenuEntry = serde_json::from_str(
            r#"{"pagename":"Company","path":null,"subItems":[{"title":"Team","path":"/team"}]}"#,
        )
        .unwrap();
        assert_eq!(entry.label(), "Company");
        assert_eq!(entry.path, None);
        assert_eq!(entry.sub_items.len(), 1);
        assert_eq!(entry.sub_items[0].path, "/team");
        assert_eq!(entry.kind(), MenuKind::Standard);
    }

    #[test]
    fn test_kind_parses_from_lowercase() {
        assert_eq!(MenuKind::from_str("catalog").unwrap(), MenuKind::Catalog);
        assert_eq!(MenuKind::Catalog.to_string(), "catalog");
        let entry: MenuEntry = serde_json::from_str(r#"{"pagename":"Shop","kind":"catalog"}"#).unwrap();
        assert!(entry.is_catalog());
    }
}
