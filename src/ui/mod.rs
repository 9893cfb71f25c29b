pub mod icon;
pub mod launcher_auth;
pub mod menu_panel;
pub mod view_state;

pub use icon::{Icon, icons};
pub use launcher_auth::LauncherAuth;
pub use menu_panel::{DropdownTheme, MenuPanel};
pub use view_state::{ViewState, provide_view_state};
