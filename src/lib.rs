//! Desktop header for marketing sites.
//!
//! [`MenuBar`](components::menu::MenuBar) renders the logo, the help desk
//! number, one [`MenuItem`](components::menu::MenuItem) per top-level entry and
//! the inquiry button. Data and callbacks are owned by the host application.

/// Leptos components of the menu.
pub mod components;
/// Runtime configuration of the menu.
pub mod settings;

pub use desktop_menu_model as model;

/// Components, settings and model types in one import.
pub mod prelude {
    pub use crate::components::menu::{MenuBar, MenuBarSkeleton, MenuItem};
    pub use crate::settings::{MenuSettings, provide_menu_settings, use_menu_settings};
    pub use desktop_menu_model::prelude::*;
}

/// Sets up logging for the current target.
///
/// In the browser this forwards [`log`] records to the console and installs
/// the panic hook. On the server it initialises `env_logger`, which still
/// honours `RUST_LOG`.
pub fn init_logging(level: log::Level) {
    #[cfg(feature = "wasm")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(level) {
            leptos::logging::warn!("Logger was already initialised: {e}");
        }
    }

    #[cfg(all(feature = "ssr", not(feature = "wasm")))]
    {
        if let Err(e) = env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .parse_default_env()
            .try_init()
        {
            log::warn!("Logger was already initialised: {e}");
        }
    }

    #[cfg(not(any(feature = "wasm", feature = "ssr")))]
    let _ = level;
}
