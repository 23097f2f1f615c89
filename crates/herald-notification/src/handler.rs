//! Notification listing HTTP handlers

use axum::{
	extract::{Path, Query, State},
	http::{StatusCode, Uri},
	Extension, Json,
};
use serde::Deserialize;

use herald_types::extract::Auth;
use herald_types::meta_adapter::Notification;
use herald_types::types::Page;

use crate::prelude::*;
use crate::service::{self, PageRequest};

/// Notifiable kind a route was registered for; attached to the router as
/// an extension by [`crate::routes::index_notifications`].
#[derive(Clone, Debug)]
pub struct NotifiableKind(pub &'static str);

#[derive(Debug, Deserialize)]
pub struct PageQuery {
	pub page: Option<u32>,
	#[serde(rename = "perPage")]
	pub per_page: Option<u32>,
}

impl From<PageQuery> for PageRequest {
	fn from(query: PageQuery) -> PageRequest {
		PageRequest { page: query.page.unwrap_or(1), per_page: query.per_page }
	}
}

/// GET {path} - all stored notifications
pub async fn list_notifications(
	State(app): State<App>,
	Auth(auth): Auth,
	Query(query): Query<PageQuery>,
	uri: Uri,
) -> HrResult<(StatusCode, Json<Page<Notification>>)> {
	let page = service::list_all(&app, &auth, query.into(), uri.path()).await?;

	Ok((StatusCode::OK, Json(page)))
}

/// GET {prefix}/{notifiable}/notifications - one notifiable's notifications
pub async fn list_for_notifiable(
	State(app): State<App>,
	Auth(auth): Auth,
	Extension(kind): Extension<NotifiableKind>,
	Path(notifiable): Path<String>,
	Query(query): Query<PageQuery>,
	uri: Uri,
) -> HrResult<(StatusCode, Json<Page<Notification>>)> {
	let page =
		service::list_for_notifiable(&app, &auth, kind.0, &notifiable, query.into(), uri.path())
			.await?;

	Ok((StatusCode::OK, Json(page)))
}

// vim: ts=4
