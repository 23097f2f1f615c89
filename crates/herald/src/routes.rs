//! Default route table

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use herald_core::settings::handler as settings_handler;
use herald_notification::routes as notification_routes;

use crate::prelude::*;

/// Builds the default API router: settings endpoints and the list-all
/// notifications endpoint. Per-notifiable listings are mounted by the
/// host with [`herald_notification::index_notifications`], one call per
/// notifiable kind.
pub fn init(app: App) -> Router {
	Router::new()
		.route("/api/settings", get(settings_handler::list_settings))
		.route(
			"/api/settings/{key}",
			get(settings_handler::get_setting)
				.put(settings_handler::update_setting)
				.delete(settings_handler::delete_setting),
		)
		.merge(notification_routes::paginate_notifications("api/notifications"))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
