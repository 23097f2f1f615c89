//! Settings key-value store management
//!
//! Persists raw setting values as nullable strings, one row per key.
//! Typing and validation live above the adapter.

use sqlx::{Row, SqlitePool};

use herald::meta_adapter::SettingRow;
use herald::prelude::*;

/// List all stored settings
pub(crate) async fn list(db: &SqlitePool) -> HrResult<Vec<SettingRow>> {
	let rows = sqlx::query("SELECT key, value FROM settings")
		.fetch_all(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(rows
		.into_iter()
		.map(|row| SettingRow {
			key: row.get::<String, _>("key").into(),
			value: row.get::<Option<String>, _>("value").map(Into::into),
		})
		.collect())
}

/// Read a single setting by key
pub(crate) async fn read(db: &SqlitePool, key: &str) -> HrResult<Option<SettingRow>> {
	let row = sqlx::query("SELECT key, value FROM settings WHERE key = ?")
		.bind(key)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.map(|row| SettingRow {
		key: row.get::<String, _>("key").into(),
		value: row.get::<Option<String>, _>("value").map(Into::into),
	}))
}

/// Update or create a setting; `None` stores a null value
pub(crate) async fn update(db: &SqlitePool, key: &str, value: Option<&str>) -> HrResult<()> {
	sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")
		.bind(key)
		.bind(value)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

/// Delete a setting row
pub(crate) async fn delete(db: &SqlitePool, key: &str) -> HrResult<()> {
	sqlx::query("DELETE FROM settings WHERE key = ?")
		.bind(key)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
