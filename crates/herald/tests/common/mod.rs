//! Shared helpers for the feature tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use tempfile::TempDir;

use herald::app::AppBuilder;
use herald::gate::{AuthCtx, Gate};
use herald::prelude::*;
use herald::settings::{SettingEntryConfig, SettingValue, SettingsSchema};
use herald_meta_adapter_sqlite::MetaAdapterSqlite;

pub async fn test_adapter() -> (Arc<MetaAdapterSqlite>, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = MetaAdapterSqlite::new(temp_dir.path().join("meta.db"))
		.await
		.expect("Failed to create adapter");

	(Arc::new(adapter), temp_dir)
}

fn entry(typ: &str, default: SettingValue, nullable: bool) -> SettingEntryConfig {
	SettingEntryConfig { title: None, description: None, typ: typ.into(), default, nullable }
}

pub fn test_schema() -> SettingsSchema {
	let mut entries = HashMap::new();
	entries.insert(
		"lang".into(),
		SettingEntryConfig {
			title: Some("Language".into()),
			description: Some("UI language".into()),
			typ: "string".into(),
			default: SettingValue::String("en".into()),
			nullable: false,
		},
	);
	entries.insert(
		"wants_promotion_emails".into(),
		entry("boolean", SettingValue::Bool(false), false),
	);
	entries.insert("retries".into(), entry("int", SettingValue::Int(3), false));
	entries.insert("threshold".into(), entry("float", SettingValue::Float(0.5), false));
	entries.insert("motd".into(), entry("string", SettingValue::Null, true));

	SettingsSchema::from_config(entries).expect("valid schema")
}

/// Builds an app over a temporary database. Without a gate the app
/// denies everything, like a host that defined no policies.
pub async fn build_app(gate: Option<Arc<dyn Gate>>) -> (App, Arc<MetaAdapterSqlite>, TempDir) {
	let (adapter, temp) = test_adapter().await;

	let mut builder = AppBuilder::new();
	builder.settings_schema(test_schema()).meta_adapter(adapter.clone());
	if let Some(gate) = gate {
		builder.gate(gate);
	}
	let app = builder.build().expect("Failed to build app");

	(app, adapter, temp)
}

/// Request with the acting user riding the extensions, the way a host's
/// authentication middleware would inject it.
pub fn request(method: &str, path: &str, auth: Option<AuthCtx>) -> Request<Body> {
	let mut builder = Request::builder().method(method).uri(path);
	if let Some(auth) = auth {
		builder = builder.extension(auth);
	}

	builder.body(Body::empty()).expect("request")
}

pub fn json_request(
	method: &str,
	path: &str,
	auth: Option<AuthCtx>,
	body: serde_json::Value,
) -> Request<Body> {
	let mut builder = Request::builder()
		.method(method)
		.uri(path)
		.header(header::CONTENT_TYPE, "application/json");
	if let Some(auth) = auth {
		builder = builder.extension(auth);
	}

	builder.body(Body::from(body.to_string())).expect("request")
}

pub async fn body_json(response: Response) -> serde_json::Value {
	let bytes = response.into_body().collect().await.expect("body").to_bytes();

	serde_json::from_slice(&bytes).expect("json body")
}

// vim: ts=4
