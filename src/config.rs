//! Page Configuration
//!
//! Fixed values shared by the store, the helpers and the components.

use log::LevelFilter;

/// Local storage key holding the whole collection
pub const STORAGE_KEY: &str = "feedbacks";

/// Company shown when the form field was left empty
pub const DEFAULT_COMPANY: &str = "Not specified";

/// Shown in place of the list when there is nothing to render
pub const EMPTY_LIST_MESSAGE: &str = "No feedback yet. Be the first to leave one!";

/// Transient notices disappear after this long
pub const NOTICE_LIFETIME_MS: u32 = 3_000;

/// Delay before scrolling to the list after a submit
pub const SCROLL_DELAY_MS: u32 = 500;

/// Object URLs of exported files stay valid this long after the click
pub const DOWNLOAD_REVOKE_DELAY_MS: u32 = 1_000;

/// Element id of the rendered list
pub const LIST_SECTION_ID: &str = "feedbacks-list";

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
