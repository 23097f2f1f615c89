use std::{env, path::PathBuf, sync::Arc};

use herald::config::Config;
use herald::gate::{AuthCtx, GateFn};
use herald::meta_adapter::NotifiableRef;
use herald::AppBuilder;
use herald_meta_adapter_sqlite::MetaAdapterSqlite;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	let config_path = env::var("HERALD_CONFIG").unwrap_or("./herald.yaml".to_string());
	let config = match Config::load(&config_path).await {
		Ok(config) => config,
		Err(_) => {
			tracing::warn!("No config at {}, using defaults", config_path);
			Config::default()
		}
	};

	let db_dir = PathBuf::from(config.db_dir.as_ref());
	tokio::fs::create_dir_all(&db_dir).await.expect("Cannot create db dir");
	let meta_adapter = Arc::new(
		MetaAdapterSqlite::new(db_dir.join("meta.db"))
			.await
			.expect("FATAL: Failed to open meta database"),
	);

	// Users may list their own notifications; everything else needs the
	// admin role.
	let gate = Arc::new(GateFn(
		|auth: &AuthCtx, action: &str, resource: Option<&NotifiableRef>| match action {
			"viewNotificationsOf" => {
				resource.is_some_and(|r| r.kind.as_ref() == "users" && r.id == auth.user_id)
			}
			"viewAny" | "manageSettings" => auth.has_role("admin"),
			_ => false,
		},
	));

	let mut builder = AppBuilder::new();
	builder
		.settings_schema(config.settings_schema().expect("FATAL: Invalid settings schema"))
		.meta_adapter(meta_adapter)
		.gate(gate);
	let app = builder.build().expect("FATAL: Failed to build app");

	let router = herald::routes::init(app.clone())
		.merge(herald::notification::index_notifications("users", "users").with_state(app));

	let listener = tokio::net::TcpListener::bind(config.listen.as_ref())
		.await
		.expect("FATAL: Failed to bind");
	tracing::info!("Listening on {}", config.listen);
	axum::serve(listener, router).await.expect("FATAL: Server error");
}

// vim: ts=4
