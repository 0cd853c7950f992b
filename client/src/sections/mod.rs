//! Dashboard sections, one per header button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section fetches its own data, owns its dialogs, and reports failures
//! and successful mutations through the shared toast queue. Filtering and
//! statistics are plain functions next to the component so they can be tested
//! without a browser.

pub mod blockchain;
pub mod devices;
pub mod logs;
pub mod overview;
pub mod settings;
pub mod users;
