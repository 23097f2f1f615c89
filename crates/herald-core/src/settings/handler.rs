//! Settings management handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	Json,
};
use serde::{Deserialize, Serialize};

use herald_types::extract::Auth;

use crate::prelude::*;
use crate::settings::types::{Setting, SettingSchemaEntry, SettingType, SettingValue};

/// A setting with its schema metadata and current values.
#[derive(Debug, Serialize)]
pub struct SettingResponse {
	pub key: Box<str>,
	pub title: Option<Box<str>>,
	pub description: Option<Box<str>>,
	#[serde(rename = "type")]
	pub typ: SettingType,
	pub default: SettingValue,
	pub nullable: bool,
	pub value: Option<Box<str>>,
	#[serde(rename = "convertedValue")]
	pub converted_value: SettingValue,
}

fn setting_response(key: &str, entry: &SettingSchemaEntry, setting: Setting) -> SettingResponse {
	SettingResponse {
		key: key.into(),
		title: entry.title.clone(),
		description: entry.description.clone(),
		typ: entry.typ,
		default: entry.default.clone(),
		nullable: entry.nullable,
		value: setting.value,
		converted_value: setting.converted_value,
	}
}

/// GET /settings - list all configured settings with current values
pub async fn list_settings(
	State(app): State<App>,
	Auth(_auth): Auth,
) -> HrResult<(StatusCode, Json<Vec<SettingResponse>>)> {
	let mut settings = Vec::new();
	for (key, entry) in app.settings.configured() {
		let setting = app.settings.read(key).await?;
		settings.push(setting_response(key, entry, setting));
	}
	settings.sort_by(|a, b| a.key.cmp(&b.key));

	Ok((StatusCode::OK, Json(settings)))
}

/// GET /settings/{key} - a single setting with metadata
pub async fn get_setting(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(key): Path<String>,
) -> HrResult<(StatusCode, Json<SettingResponse>)> {
	let setting = app.settings.read(&key).await?;
	let entry = app
		.settings
		.configured()
		.get(key.as_str())
		.ok_or_else(|| Error::UnknownSetting(key.as_str().into()))?;

	Ok((StatusCode::OK, Json(setting_response(&key, entry, setting))))
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingRequest {
	pub value: SettingValue,
}

/// PUT /settings/{key} - requires the host's `manageSettings` gate action
pub async fn update_setting(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(key): Path<String>,
	Json(req): Json<UpdateSettingRequest>,
) -> HrResult<(StatusCode, Json<SettingResponse>)> {
	if !app.gate.allows(&auth, "manageSettings", None).await {
		warn!("User {} may not manage settings", auth.user_id);
		return Err(Error::PermissionDenied);
	}

	let setting = app.settings.update(&key, req.value).await?;
	info!("User {} updated setting '{}'", auth.user_id, key);

	let entry = app
		.settings
		.configured()
		.get(key.as_str())
		.ok_or_else(|| Error::UnknownSetting(key.as_str().into()))?;

	Ok((StatusCode::OK, Json(setting_response(&key, entry, setting))))
}

/// DELETE /settings/{key} - requires the host's `manageSettings` gate action
pub async fn delete_setting(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(key): Path<String>,
) -> HrResult<StatusCode> {
	if !app.gate.allows(&auth, "manageSettings", None).await {
		warn!("User {} may not manage settings", auth.user_id);
		return Err(Error::PermissionDenied);
	}

	app.settings.delete(&key).await?;
	info!("User {} deleted setting '{}'", auth.user_id, key);

	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
