//! crmfind library - scoped search panels for CRM and project entities
//!
//! This library exposes the core functionality of crmfind for the binary
//! and for testing purposes.

pub mod app;
pub mod config;
pub mod context;
pub mod criteria;
pub mod entity;
pub mod error;
pub mod events;
pub mod help_line;
pub mod notification;
pub mod panel;
pub mod requests;
pub mod saved_filter;
pub mod theme;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, OutputMode};
pub use config::Config;
pub use criteria::SearchCriteria;
pub use entity::EntityKind;
