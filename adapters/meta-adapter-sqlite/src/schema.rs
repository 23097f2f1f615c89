//! Database schema initialization
//!
//! Creates the tables and indexes the adapter relies on.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Notifiables
	//*************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS notifiables (
		kind text NOT NULL,
		id text NOT NULL,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(kind, id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Notifications
	//***************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS notifications (
		id text NOT NULL,
		type text NOT NULL,
		notifiable_kind text NOT NULL,
		notifiable_id text NOT NULL,
		data json,
		read_at datetime,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_notifications_notifiable
			ON notifications(notifiable_kind, notifiable_id, created_at)",
	)
	.execute(&mut *tx)
	.await?;

	// Settings
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
		key text NOT NULL,
		value text,
		PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
