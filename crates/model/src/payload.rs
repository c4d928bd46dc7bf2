use crate::branding::LogoDescriptor;
use crate::category::ProductCategories;
use crate::entry::MenuEntry;
use crate::errors::MenuDataError;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

/// Everything the header needs, as the host application serves it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuPayload {
    /// Top-level entries, in display order.
    pub menu_items: Vec<MenuEntry>,
    /// Categories listed under the catalog entry.
    pub product_categories: ProductCategories,
    /// Logo shown at the left of the header.
    pub colorlogo: Option<LogoDescriptor>,
    /// Help desk number, used verbatim.
    pub phone_no: String,
}

impl MenuPayload {
    /// Parses a header payload.
    ///
    /// Only malformed JSON or a non-object root is an error. Fields that are
    /// missing or unusable fall back to their empty defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MenuDataError::Json`] when `input` is not valid JSON and
    /// [`MenuDataError::InvalidRoot`] when its root is not an object.
    pub fn from_json(input: &str) -> Result<Self, MenuDataError> {
        let value: Value = serde_json::from_str(input)?;
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => return Err(MenuDataError::InvalidRoot(json_kind(&other))),
        };

        let menu_items = fields
            .remove("menuItems")
            .map(|items| {
                serde_json::from_value(items).unwrap_or_else(|e| {
                    warn!("Ignoring unreadable menu items: {e}");
                    Vec::new()
                })
            })
            .unwrap_or_default();
        let product_categories = fields
            .remove("productCategories")
            .map(|categories| ProductCategories::from_value(&categories))
            .unwrap_or_default();
        let colorlogo = fields
            .remove("colorlogo")
            .and_then(|logo| serde_json::from_value(logo).ok());
        let phone_no = fields
            .remove("phoneNo")
            .and_then(|phone| phone.as_str().map(ToString::to_string))
            .unwrap_or_default();

        debug!(
            "Parsed menu payload with {} entries and {} categories",
            menu_items.len(),
            product_categories.len()
        );
        Ok(Self {
            menu_items,
            product_categories,
            colorlogo,
            phone_no,
        })
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
