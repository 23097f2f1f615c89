use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

use crate::prelude::*;

// Notifiable //
//************//

/// Reference to an entity that can own notifications. `kind` names the
/// host-side model ("users", "teams"), `id` identifies the instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifiableRef {
	pub kind: Box<str>,
	pub id: Box<str>,
}

impl NotifiableRef {
	pub fn new(kind: impl Into<Box<str>>, id: impl Into<Box<str>>) -> NotifiableRef {
		NotifiableRef { kind: kind.into(), id: id.into() }
	}
}

impl std::fmt::Display for NotifiableRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.kind, self.id)
	}
}

// Notifications //
//***************//

#[derive(Clone, Debug, Serialize)]
pub struct Notification {
	pub id: Box<str>,
	#[serde(rename = "type")]
	pub typ: Box<str>,
	pub notifiable: NotifiableRef,
	pub data: Value,
	#[serde(rename = "readAt")]
	pub read_at: Option<Timestamp>,
	#[serde(rename = "createdAt")]
	pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateNotification {
	pub typ: Box<str>,
	pub notifiable: NotifiableRef,
	pub data: Value,
	/// Stored as-is when given; the adapter stamps `now()` otherwise.
	pub created_at: Option<Timestamp>,
}

#[derive(Debug, Default)]
pub struct ListNotificationOptions {
	pub notifiable: Option<NotifiableRef>,
	/// 1-based page number; 0 is treated as the first page.
	pub page: u32,
	pub per_page: u32,
}

impl ListNotificationOptions {
	pub fn page(&self) -> u32 {
		self.page.max(1)
	}

	/// Row limit for the query. One row more than `per_page` so callers
	/// can tell whether a next page exists.
	pub fn limit(&self) -> u32 {
		self.per_page + 1
	}

	pub fn offset(&self) -> u32 {
		(self.page() - 1) * self.per_page
	}
}

// Settings //
//**********//

/// Raw persisted setting row. `value` is the stored representation,
/// always a string or a stored null; typing lives above the adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingRow {
	pub key: Box<str>,
	pub value: Option<Box<str>>,
}

#[async_trait]
pub trait MetaAdapter: Debug + Send + Sync {
	/// # Notifiables
	async fn create_notifiable(&self, notifiable: &NotifiableRef) -> HrResult<()>;
	/// Resolves a notifiable reference, `Error::NotFound` if it was never
	/// registered.
	async fn read_notifiable(&self, kind: &str, id: &str) -> HrResult<NotifiableRef>;

	/// # Notifications
	async fn create_notification(&self, notification: CreateNotification)
		-> HrResult<Notification>;
	/// Lists notifications newest first, sliced by `opts`. Returns up to
	/// `opts.limit()` rows.
	async fn list_notifications(&self, opts: &ListNotificationOptions)
		-> HrResult<Vec<Notification>>;

	/// # Settings
	async fn read_setting(&self, key: &str) -> HrResult<Option<SettingRow>>;
	async fn read_settings(&self) -> HrResult<Vec<SettingRow>>;
	/// Updates or creates a setting row. `None` stores a null value.
	async fn update_setting(&self, key: &str, value: Option<&str>) -> HrResult<()>;
	async fn delete_setting(&self, key: &str) -> HrResult<()>;
}

// vim: ts=4
