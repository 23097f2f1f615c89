//! Herald is a host-mountable notifications and settings package.
//!
//! # Features
//!
//! - Paginated listing endpoints for the stored notifications of
//!   arbitrary "notifiable" entities
//! - Authorization delegated to the host through the `Gate` trait;
//!   denials surface as HTTP 403, never as silently missing data
//! - Schema-driven typed settings: declared once in configuration,
//!   validated at load, stored as raw strings, converted on read
//! - Pluggable storage through the `MetaAdapter` trait (a SQLite adapter
//!   ships in this workspace)

// Re-export shared types and adapter traits from herald-types
pub use herald_types::error;
pub use herald_types::extract;
pub use herald_types::gate;
pub use herald_types::meta_adapter;
pub use herald_types::types;

// Feature crate re-exports
pub use herald_core::app;
pub use herald_core::settings;
pub use herald_notification as notification;

// Local modules
pub mod config;
pub mod prelude;
pub mod routes;

pub use crate::app::{App, AppBuilder};

// vim: ts=4
