//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and shared widgets while reading and
//! writing shared state from Leptos context providers.

pub mod auth_gate;
pub mod confirm_dialog;
pub mod dashboard_header;
pub mod load_state;
pub mod pager;
pub mod search_bar;
pub mod stat_card;
pub mod toast;
