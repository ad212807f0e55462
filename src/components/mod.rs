//! UI Components
//!
//! Leptos components of the feedback page.

mod clear_all_button;
mod export_toolbar;
mod feedback_form;
mod feedback_list;
mod nav_bar;
mod notification_area;
mod query_panel;
mod recent_log;

pub use clear_all_button::ClearAllButton;
pub use export_toolbar::ExportToolbar;
pub use feedback_form::FeedbackForm;
pub use feedback_list::FeedbackList;
pub use nav_bar::NavBar;
pub use notification_area::NotificationArea;
pub use query_panel::QueryPanel;
pub use recent_log::RecentLog;
