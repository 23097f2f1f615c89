//! SQLite implementation of the Herald `MetaAdapter`.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool, SqliteRow};

use herald::meta_adapter::{
	CreateNotification, ListNotificationOptions, MetaAdapter, Notification, NotifiableRef,
	SettingRow,
};
use herald::prelude::*;

mod notification;
mod schema;
mod setting;

// Helper functions
//******************
fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> HrResult<T>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

#[derive(Debug)]
pub struct MetaAdapterSqlite {
	db: SqlitePool,
}

impl MetaAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> HrResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		Ok(MetaAdapterSqlite { db })
	}
}

#[async_trait]
impl MetaAdapter for MetaAdapterSqlite {
	// # Notifiables
	async fn create_notifiable(&self, notifiable: &NotifiableRef) -> HrResult<()> {
		notification::create_notifiable(&self.db, notifiable).await
	}

	async fn read_notifiable(&self, kind: &str, id: &str) -> HrResult<NotifiableRef> {
		notification::read_notifiable(&self.db, kind, id).await
	}

	// # Notifications
	async fn create_notification(
		&self,
		notification: CreateNotification,
	) -> HrResult<Notification> {
		notification::create(&self.db, notification).await
	}

	async fn list_notifications(
		&self,
		opts: &ListNotificationOptions,
	) -> HrResult<Vec<Notification>> {
		notification::list(&self.db, opts).await
	}

	// # Settings
	async fn read_setting(&self, key: &str) -> HrResult<Option<SettingRow>> {
		setting::read(&self.db, key).await
	}

	async fn read_settings(&self) -> HrResult<Vec<SettingRow>> {
		setting::list(&self.db).await
	}

	async fn update_setting(&self, key: &str, value: Option<&str>) -> HrResult<()> {
		setting::update(&self.db, key, value).await
	}

	async fn delete_setting(&self, key: &str) -> HrResult<()> {
		setting::delete(&self.db, key).await
	}
}

// vim: ts=4
