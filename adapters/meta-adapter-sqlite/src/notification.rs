//! Notifiable and notification storage

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use herald::meta_adapter::{
	CreateNotification, ListNotificationOptions, Notification, NotifiableRef,
};
use herald::prelude::*;

use crate::map_res;

fn map_notification(row: &SqliteRow) -> Result<Notification, sqlx::Error> {
	let data: Option<String> = row.get("data");

	Ok(Notification {
		id: row.get::<String, _>("id").into(),
		typ: row.get::<String, _>("type").into(),
		notifiable: NotifiableRef::new(
			row.get::<String, _>("notifiable_kind"),
			row.get::<String, _>("notifiable_id"),
		),
		data: data.and_then(|d| serde_json::from_str(&d).ok()).unwrap_or(serde_json::Value::Null),
		read_at: row.get::<Option<i64>, _>("read_at").map(Timestamp),
		created_at: Timestamp(row.get::<i64, _>("created_at")),
	})
}

pub(crate) async fn create_notifiable(
	db: &SqlitePool,
	notifiable: &NotifiableRef,
) -> HrResult<()> {
	sqlx::query("INSERT OR IGNORE INTO notifiables (kind, id) VALUES (?, ?)")
		.bind(notifiable.kind.as_ref())
		.bind(notifiable.id.as_ref())
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

pub(crate) async fn read_notifiable(
	db: &SqlitePool,
	kind: &str,
	id: &str,
) -> HrResult<NotifiableRef> {
	let row = sqlx::query("SELECT kind, id FROM notifiables WHERE kind = ? AND id = ?")
		.bind(kind)
		.bind(id)
		.fetch_one(db)
		.await;

	map_res(row, |row| {
		Ok(NotifiableRef::new(row.get::<String, _>("kind"), row.get::<String, _>("id")))
	})
}

pub(crate) async fn create(
	db: &SqlitePool,
	notification: CreateNotification,
) -> HrResult<Notification> {
	let id = Uuid::new_v4().to_string();
	let created_at = notification.created_at.unwrap_or_else(now);
	let data = notification.data.to_string();

	sqlx::query(
		"INSERT INTO notifications (id, type, notifiable_kind, notifiable_id, data, created_at)
			VALUES (?, ?, ?, ?, ?, ?)",
	)
	.bind(&id)
	.bind(notification.typ.as_ref())
	.bind(notification.notifiable.kind.as_ref())
	.bind(notification.notifiable.id.as_ref())
	.bind(&data)
	.bind(created_at.0)
	.execute(db)
	.await
	.inspect_err(|err| warn!("DB: {:#?}", err))
	.map_err(|_| Error::DbError)?;

	Ok(Notification {
		id: id.into(),
		typ: notification.typ,
		notifiable: notification.notifiable,
		data: notification.data,
		read_at: None,
		created_at,
	})
}

pub(crate) async fn list(
	db: &SqlitePool,
	opts: &ListNotificationOptions,
) -> HrResult<Vec<Notification>> {
	let rows = if let Some(notifiable) = &opts.notifiable {
		sqlx::query(
			"SELECT id, type, notifiable_kind, notifiable_id, data, read_at, created_at
				FROM notifications
				WHERE notifiable_kind = ? AND notifiable_id = ?
				ORDER BY created_at DESC, rowid DESC
				LIMIT ? OFFSET ?",
		)
		.bind(notifiable.kind.as_ref())
		.bind(notifiable.id.as_ref())
		.bind(i64::from(opts.limit()))
		.bind(i64::from(opts.offset()))
		.fetch_all(db)
		.await
	} else {
		sqlx::query(
			"SELECT id, type, notifiable_kind, notifiable_id, data, read_at, created_at
				FROM notifications
				ORDER BY created_at DESC, rowid DESC
				LIMIT ? OFFSET ?",
		)
		.bind(i64::from(opts.limit()))
		.bind(i64::from(opts.offset()))
		.fetch_all(db)
		.await
	};

	let rows = rows.inspect_err(|err| warn!("DB: {:#?}", err)).map_err(|_| Error::DbError)?;

	rows.iter().map(|row| map_notification(row).map_err(|_| Error::DbError)).collect()
}

// vim: ts=4
