use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Label shown for a category without a name.
pub const UNNAMED_CATEGORY: &str = "Unnamed Category";

/// Placeholder shown in the catalog dropdown when there are no categories.
pub const NO_CATEGORIES: &str = "No categories found";

/// A product category listed in the catalog dropdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductCategory {
    /// Display name.
    pub category: Option<String>,
    /// Path segment of the category page.
    pub slug: Option<String>,
}

impl ProductCategory {
    /// A category with both fields set.
    pub fn new(category: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            slug: Some(slug.into()),
        }
    }

    /// Display name, or [`UNNAMED_CATEGORY`].
    pub fn label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNNAMED_CATEGORY)
    }

    /// Site-relative link to the category page. Falls back to the site root.
    pub fn href(&self) -> String {
        format!("/{}", self.slug.as_deref().unwrap_or_default())
    }

    /// Reads a single category, defaulting every field that is missing or of
    /// the wrong type.
    fn from_value_lenient(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };
        Self {
            category: field("category"),
            slug: field("slug"),
        }
    }
}

/// Ordered list of product categories.
///
/// Construction never fails: anything that is not a list is read as an empty
/// one, so the catalog dropdown degrades to its placeholder instead of
/// erroring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductCategories(Vec<ProductCategory>);

impl ProductCategories {
    /// Wraps an already validated list.
    pub const fn new(categories: Vec<ProductCategory>) -> Self {
        Self(categories)
    }

    /// Reads categories from arbitrary JSON. Non-lists become empty.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self(items.iter().map(ProductCategory::from_value_lenient).collect()),
            Value::Null => Self::default(),
            other => {
                warn!("Expected a list of product categories, got {other}. Treating it as empty");
                Self::default()
            }
        }
    }

    /// Whether there are no categories.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of categories.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProductCategory> {
        self.0.iter()
    }

    /// The categories as a slice.
    pub const fn as_slice(&self) -> &[ProductCategory] {
        self.0.as_slice()
    }
}

impl<'de> Deserialize<'de> for ProductCategories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
