use desktop_menu_model::prelude::{DEFAULT_LOGO_ENDPOINT, HOVER_DELAY};
use leptos::prelude::*;
use std::time::Duration;

/// Runtime configuration shared by every component of the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSettings {
    /// Delay before a hovered dropdown opens or a left one closes.
    pub hover_delay: Duration,
    /// Prefix the logo photo reference is appended to.
    pub logo_endpoint: String,
    /// Text in front of the phone link.
    pub help_desk_label: String,
    /// Text of the call-to-action button.
    pub inquiry_label: String,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            hover_delay: HOVER_DELAY,
            logo_endpoint: DEFAULT_LOGO_ENDPOINT.to_string(),
            help_desk_label: "Help Desk :".to_string(),
            inquiry_label: "Inquiry Now".to_string(),
        }
    }
}

/// Makes `settings` available to every menu component below the current owner.
pub fn provide_menu_settings(settings: MenuSettings) {
    provide_context(settings);
}

/// The provided [`MenuSettings`], or the defaults when none were provided.
pub fn use_menu_settings() -> MenuSettings {
    use_context::<MenuSettings>().unwrap_or_default()
}
