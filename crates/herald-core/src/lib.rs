//! Core infrastructure for Herald.
//!
//! This crate contains the app state shared by the feature crates and the
//! typed settings subsystem. Feature crates depend on it instead of each
//! other, which keeps the build graph flat.

pub mod app;
pub mod prelude;
pub mod settings;

// Re-export commonly used types
pub use app::{App, AppBuilder, AppBuilderOpts, AppState};

// vim: ts=4
