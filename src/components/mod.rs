//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod controller;
mod diagnostics_panel;
mod sidebar;
mod state;
mod status_poller;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use controller::*;
pub use diagnostics_panel::*;
pub use sidebar::*;
pub use state::*;
pub use status_poller::*;
// Views are accessed via views::ViewName
