//! Route-table construction
//!
//! The host mounts notification endpoints by calling these functions once
//! at startup, one call per notifiable kind. The resulting routers carry
//! no state; the host applies its `App` with `with_state`.

use axum::{routing::get, Extension, Router};

use crate::handler::{self, NotifiableKind};
use crate::prelude::*;

/// Router serving `GET {path}` with every stored notification.
pub fn paginate_notifications(path: &str) -> Router<App> {
	let path = if path.is_empty() {
		"/".to_string()
	} else {
		format!("/{}", path.trim_matches('/'))
	};

	Router::new().route(&path, get(handler::list_notifications))
}

/// Router serving `GET {prefix}/{notifiable}/notifications` for one
/// notifiable kind. `prefix` may be empty.
pub fn index_notifications(prefix: &str, kind: &'static str) -> Router<App> {
	let prefix = prefix.trim_matches('/');
	let path = if prefix.is_empty() {
		"/{notifiable}/notifications".to_string()
	} else {
		format!("/{}/{{notifiable}}/notifications", prefix)
	};

	Router::new()
		.route(&path, get(handler::list_for_notifiable))
		.layer(Extension(NotifiableKind(kind)))
}

// vim: ts=4
