//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the flows stay testable without a browser.

pub mod auth;
pub mod clipboard;
pub mod csv_export;
pub mod fetch;
pub mod format;
pub mod markdown;
pub mod poll;
pub mod table;
pub mod validation;
