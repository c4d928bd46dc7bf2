mod dropdown;
mod menu_bar;
mod menu_item;
mod skeleton;

pub use dropdown::{CategoryDropdown, SubItemDropdown};
pub use menu_bar::MenuBar;
pub use menu_item::MenuItem;
pub use skeleton::MenuBarSkeleton;
