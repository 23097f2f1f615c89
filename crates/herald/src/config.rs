//! Host configuration
//!
//! A single YAML file read once at startup. The `settings:` map declares
//! the setting schema; entries may omit every field except `type`:
//!
//! ```yaml
//! listen: "127.0.0.1:8080"
//! db_dir: "./data"
//! settings:
//!   lang:
//!     type: string
//!     default: en
//!   wants_promotion_emails:
//!     title: Promotion emails
//!     type: boolean
//!     default: false
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use herald_core::settings::{SettingEntryConfig, SettingsSchema};

use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct Config {
	#[serde(default = "default_listen")]
	pub listen: Box<str>,
	#[serde(default = "default_db_dir")]
	pub db_dir: Box<str>,
	#[serde(default)]
	pub settings: HashMap<Box<str>, SettingEntryConfig>,
}

fn default_listen() -> Box<str> {
	"127.0.0.1:8080".into()
}

fn default_db_dir() -> Box<str> {
	"./data".into()
}

impl Default for Config {
	fn default() -> Self {
		Config { listen: default_listen(), db_dir: default_db_dir(), settings: HashMap::new() }
	}
}

impl Config {
	pub async fn load(path: impl AsRef<Path>) -> HrResult<Config> {
		let raw = tokio::fs::read_to_string(path.as_ref()).await?;

		serde_yaml::from_str(&raw).map_err(|err| Error::Config(err.to_string().into()))
	}

	/// Builds the frozen setting schema from the declared entries.
	/// Unknown type tags fail here, before anything is served.
	pub fn settings_schema(&self) -> HrResult<SettingsSchema> {
		SettingsSchema::from_config(self.settings.clone())
	}
}

#[cfg(test)]
mod tests {
	use herald_core::settings::{SettingType, SettingValue};

	use super::*;

	#[test]
	fn partial_entries_parse_with_defaults() {
		let config: Config = serde_yaml::from_str(
			"settings:\n  lang:\n    type: string\n    default: en\n  retries:\n    type: int\n",
		)
		.expect("valid yaml");

		let schema = config.settings_schema().expect("valid schema");
		let retries = schema.get("retries").expect("entry");
		assert_eq!(retries.typ, SettingType::Int);
		assert_eq!(retries.title, None);
		assert_eq!(retries.default, SettingValue::Null);
		assert!(!retries.nullable);

		let lang = schema.get("lang").expect("entry");
		assert_eq!(lang.default, SettingValue::String("en".into()));
	}

	#[test]
	fn unknown_type_tag_fails_schema_build() {
		let config: Config =
			serde_yaml::from_str("settings:\n  token:\n    type: uuid\n").expect("valid yaml");

		assert!(matches!(config.settings_schema(), Err(Error::UnsupportedType(_))));
	}

	#[test]
	fn missing_sections_fall_back() {
		let config: Config = serde_yaml::from_str("listen: \"0.0.0.0:9000\"\n").expect("valid yaml");

		assert_eq!(config.listen.as_ref(), "0.0.0.0:9000");
		assert_eq!(config.db_dir.as_ref(), "./data");
		assert!(config.settings.is_empty());
	}
}

// vim: ts=4
