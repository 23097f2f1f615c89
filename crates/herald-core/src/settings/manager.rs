//! Setting manager: bridges raw stored values and schema-declared types.

use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use herald_types::meta_adapter::MetaAdapter;
use herald_types::prelude::*;

use super::types::{
	stringify, Setting, SettingSchemaEntry, SettingType, SettingValue, SettingsSchema,
};

const DEFAULT_CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::MIN.saturating_add(99);

/// LRU cache for raw setting values. Only stored rows are cached;
/// defaults are resolved from the schema on every read.
struct SettingsCache {
	cache: Arc<parking_lot::RwLock<LruCache<Box<str>, Option<Box<str>>>>>,
}

impl SettingsCache {
	fn new(capacity: usize) -> Self {
		let non_zero = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CACHE_CAPACITY);
		Self { cache: Arc::new(parking_lot::RwLock::new(LruCache::new(non_zero))) }
	}

	fn get(&self, key: &str) -> Option<Option<Box<str>>> {
		let mut cache = self.cache.write();
		cache.get(key).cloned()
	}

	fn put(&self, key: Box<str>, value: Option<Box<str>>) {
		let mut cache = self.cache.write();
		cache.put(key, value);
	}

	/// Invalidate all cached settings
	fn clear(&self) {
		let mut cache = self.cache.write();
		cache.clear();
	}
}

/// Main interface for accessing and managing settings.
///
/// The schema is injected at construction and immutable afterwards; the
/// manager owns conversion and validation, the adapter owns persistence.
pub struct SettingManager {
	schema: Arc<SettingsSchema>,
	cache: SettingsCache,
	meta: Arc<dyn MetaAdapter>,
}

impl SettingManager {
	pub fn new(schema: Arc<SettingsSchema>, meta: Arc<dyn MetaAdapter>, cache_size: usize) -> Self {
		Self { schema, cache: SettingsCache::new(cache_size), meta }
	}

	/// The configured schema. Every entry carries all of title,
	/// description, type, default, and nullable; omitted config fields
	/// were defaulted at load time.
	pub fn configured(&self) -> &HashMap<Box<str>, SettingSchemaEntry> {
		self.schema.entries()
	}

	/// Whether `key` is declared in the schema. Absence is a normal
	/// outcome, never an error.
	pub fn exists(&self, key: &str) -> bool {
		self.schema.exists(key)
	}

	/// Pure conversion of a raw value to a declared type. See
	/// [`SettingType::convert`] for the exact semantics.
	pub fn convert_to_type(typ: SettingType, value: SettingValue) -> SettingValue {
		typ.convert(value)
	}

	fn entry(&self, key: &str) -> HrResult<&SettingSchemaEntry> {
		self.schema.get(key).ok_or_else(|| Error::UnknownSetting(key.into()))
	}

	/// Reads a setting. A missing row resolves to the schema default as
	/// the converted value, with `value: None` so callers can tell
	/// stored from defaulted.
	pub async fn read(&self, key: &str) -> HrResult<Setting> {
		let entry = self.entry(key)?;

		let row = match self.cache.get(key) {
			Some(value) => {
				debug!("Setting cache hit: {}", key);
				Some(value)
			}
			None => {
				let stored = self.meta.read_setting(key).await?;
				if let Some(row) = &stored {
					self.cache.put(row.key.clone(), row.value.clone());
				}
				stored.map(|row| row.value)
			}
		};

		match row {
			Some(value) => Ok(Setting {
				key: key.into(),
				converted_value: entry.typ.convert(match &value {
					Some(raw) => SettingValue::String(raw.clone()),
					None => SettingValue::Null,
				}),
				value,
			}),
			None => Ok(Setting {
				key: key.into(),
				value: None,
				converted_value: entry.default.clone(),
			}),
		}
	}

	/// Stores a setting. The raw stored representation is the stringified
	/// value; `Null` requires the entry to be nullable.
	pub async fn update(&self, key: &str, value: SettingValue) -> HrResult<Setting> {
		let entry = self.entry(key)?;

		let raw: Option<Box<str>> = match &value {
			SettingValue::Null => {
				if !entry.nullable {
					return Err(Error::Validation(
						format!("setting '{}' is not nullable", key).into(),
					));
				}
				None
			}
			other => Some(stringify(other)),
		};

		self.meta.update_setting(key, raw.as_deref()).await?;
		self.cache.clear();
		info!("Setting '{}' updated", key);

		// Convert through the raw form so reads and writes agree.
		let converted = entry.typ.convert(match &raw {
			Some(raw) => SettingValue::String(raw.clone()),
			None => SettingValue::Null,
		});
		Ok(Setting { key: key.into(), value: raw, converted_value: converted })
	}

	/// Deletes a stored setting row; reads fall back to the default.
	pub async fn delete(&self, key: &str) -> HrResult<()> {
		self.entry(key)?;

		self.meta.delete_setting(key).await?;
		self.cache.clear();
		info!("Setting '{}' deleted", key);

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::sync::Arc;

	use async_trait::async_trait;
	use parking_lot::Mutex;

	use herald_types::meta_adapter::{
		CreateNotification, ListNotificationOptions, MetaAdapter, Notification, NotifiableRef,
		SettingRow,
	};

	use super::*;
	use crate::settings::types::SettingEntryConfig;

	#[derive(Debug, Default)]
	struct MemMeta {
		settings: Mutex<HashMap<Box<str>, Option<Box<str>>>>,
	}

	#[async_trait]
	impl MetaAdapter for MemMeta {
		async fn create_notifiable(&self, _notifiable: &NotifiableRef) -> HrResult<()> {
			Err(Error::NotFound)
		}
		async fn read_notifiable(&self, _kind: &str, _id: &str) -> HrResult<NotifiableRef> {
			Err(Error::NotFound)
		}
		async fn create_notification(
			&self,
			_notification: CreateNotification,
		) -> HrResult<Notification> {
			Err(Error::NotFound)
		}
		async fn list_notifications(
			&self,
			_opts: &ListNotificationOptions,
		) -> HrResult<Vec<Notification>> {
			Ok(Vec::new())
		}
		async fn read_setting(&self, key: &str) -> HrResult<Option<SettingRow>> {
			Ok(self
				.settings
				.lock()
				.get(key)
				.map(|value| SettingRow { key: key.into(), value: value.clone() }))
		}
		async fn read_settings(&self) -> HrResult<Vec<SettingRow>> {
			Ok(self
				.settings
				.lock()
				.iter()
				.map(|(key, value)| SettingRow { key: key.clone(), value: value.clone() })
				.collect())
		}
		async fn update_setting(&self, key: &str, value: Option<&str>) -> HrResult<()> {
			self.settings.lock().insert(key.into(), value.map(Into::into));
			Ok(())
		}
		async fn delete_setting(&self, key: &str) -> HrResult<()> {
			self.settings.lock().remove(key);
			Ok(())
		}
	}

	fn config(typ: &str, default: SettingValue, nullable: bool) -> SettingEntryConfig {
		SettingEntryConfig { title: None, description: None, typ: typ.into(), default, nullable }
	}

	fn manager() -> SettingManager {
		let mut entries = HashMap::new();
		entries.insert(
			"wants_promotion_emails".into(),
			config("boolean", SettingValue::Bool(false), false),
		);
		entries.insert("lang".into(), config("string", SettingValue::String("en".into()), false));
		entries.insert("motd".into(), config("string", SettingValue::Null, true));
		entries.insert("retries".into(), config("int", SettingValue::Int(3), false));
		let schema = SettingsSchema::from_config(entries).expect("valid schema");

		SettingManager::new(Arc::new(schema), Arc::new(MemMeta::default()), 10)
	}

	#[tokio::test]
	async fn converts_stored_value_on_read() {
		let manager = manager();
		manager
			.update("wants_promotion_emails", SettingValue::Bool(true))
			.await
			.expect("update");

		let setting = manager.read("wants_promotion_emails").await.expect("read");

		assert_eq!(setting.value.as_deref(), Some("true"));
		assert_eq!(setting.converted_value, SettingValue::Bool(true));
	}

	#[tokio::test]
	async fn missing_row_resolves_to_default() {
		let manager = manager();

		let setting = manager.read("lang").await.expect("read");

		assert_eq!(setting.value, None);
		assert_eq!(setting.converted_value, SettingValue::String("en".into()));
	}

	#[tokio::test]
	async fn unknown_key_is_an_error_everywhere() {
		let manager = manager();

		assert!(matches!(manager.read("missing").await, Err(Error::UnknownSetting(_))));
		assert!(matches!(
			manager.update("missing", SettingValue::Int(1)).await,
			Err(Error::UnknownSetting(_))
		));
		assert!(matches!(manager.delete("missing").await, Err(Error::UnknownSetting(_))));
	}

	#[tokio::test]
	async fn null_requires_nullable() {
		let manager = manager();

		assert!(matches!(
			manager.update("lang", SettingValue::Null).await,
			Err(Error::Validation(_))
		));

		manager.update("motd", SettingValue::Null).await.expect("nullable update");
		let setting = manager.read("motd").await.expect("read");
		assert_eq!(setting.value, None);
		assert_eq!(setting.converted_value, SettingValue::Null);
	}

	#[tokio::test]
	async fn update_stores_stringified_raw_value() {
		let manager = manager();

		let setting = manager.update("retries", SettingValue::Int(7)).await.expect("update");

		assert_eq!(setting.value.as_deref(), Some("7"));
		assert_eq!(setting.converted_value, SettingValue::Int(7));
	}

	#[tokio::test]
	async fn update_invalidates_cached_reads() {
		let manager = manager();
		manager.update("retries", SettingValue::Int(1)).await.expect("update");

		// Prime the cache, then write through the manager again.
		assert_eq!(
			manager.read("retries").await.expect("read").converted_value,
			SettingValue::Int(1)
		);
		manager.update("retries", SettingValue::Int(2)).await.expect("update");

		assert_eq!(
			manager.read("retries").await.expect("read").converted_value,
			SettingValue::Int(2)
		);
	}

	#[tokio::test]
	async fn delete_falls_back_to_default() {
		let manager = manager();
		manager.update("retries", SettingValue::Int(9)).await.expect("update");

		manager.delete("retries").await.expect("delete");

		let setting = manager.read("retries").await.expect("read");
		assert_eq!(setting.value, None);
		assert_eq!(setting.converted_value, SettingValue::Int(3));
	}

	#[tokio::test]
	async fn exists_checks_schema_not_store() {
		let manager = manager();

		assert!(manager.exists("lang"));
		assert!(!manager.exists("missing"));
		assert!(!manager.exists("💩"));
	}

	#[test]
	fn convert_to_type_delegates() {
		assert_eq!(
			SettingManager::convert_to_type(
				SettingType::Boolean,
				SettingValue::String("true".into())
			),
			SettingValue::Bool(true)
		);
		assert_eq!(
			SettingManager::convert_to_type(SettingType::String, SettingValue::Null),
			SettingValue::Null
		);
	}
}

// vim: ts=4
