//! Data model of the desktop menu.
//!
//! Nothing in here touches the DOM. The components in the `desktop-menu`
//! crate render these types and feed pointer events into [`hover::HoverIntent`].

/// Logo and help desk link.
pub mod branding;
/// Product categories of the catalog dropdown.
pub mod category;
/// Top-level menu entries.
pub mod entry;
/// Errors of payload parsing.
pub mod errors;
pub mod hover;
/// Whole-header payloads.
pub mod payload;

/// Number of placeholder items the loading skeleton shows.
pub const SKELETON_ITEM_COUNT: usize = 5;

/// Re-exports of everything the components use.
pub mod prelude {
    pub use crate::SKELETON_ITEM_COUNT;
    pub use crate::branding::{DEFAULT_LOGO_ENDPOINT, DEFAULT_LOGO_TEXT, LogoDescriptor, tel_href};
    pub use crate::category::{NO_CATEGORIES, ProductCategories, ProductCategory, UNNAMED_CATEGORY};
    pub use crate::entry::{MenuEntry, MenuKind, SubItem};
    pub use crate::errors::MenuDataError;
    pub use crate::hover::{DropdownPhase, HOVER_DELAY, HoverEvent, HoverIntent, Ticket, TimerAction};
    pub use crate::payload::MenuPayload;
}
