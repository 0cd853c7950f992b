//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `nav`, `toast`, ...) so
//! components depend on small focused models. Each model is a plain struct
//! held in an `RwSignal` and provided through Leptos context.

pub mod auth;
pub mod chat;
pub mod nav;
pub mod remote;
pub mod search;
pub mod session;
pub mod toast;
