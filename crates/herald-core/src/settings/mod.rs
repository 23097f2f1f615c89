//! Settings subsystem
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): type tags, values, schema entries, and the
//!   frozen schema
//! - **Manager** (`manager.rs`): `SettingManager` bridging raw stored
//!   values and schema-declared types, with caching
//! - **Handler** (`handler.rs`): HTTP API endpoints
//!
//! The schema is declared once in configuration and frozen for the
//! process lifetime; changing it requires a restart. Stored values are
//! raw nullable strings, and the declared type is applied on read.

pub mod handler;
pub mod manager;
pub mod types;

pub use manager::SettingManager;
pub use types::{
	Setting, SettingEntryConfig, SettingSchemaEntry, SettingType, SettingValue, SettingsSchema,
};

// vim: ts=4
