//! App state type

use std::sync::Arc;

use herald_types::gate::{DenyAll, Gate};
use herald_types::meta_adapter::MetaAdapter;

use crate::prelude::*;
use crate::settings::{SettingManager, SettingsSchema};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub meta_adapter: Arc<dyn MetaAdapter>,
	pub gate: Arc<dyn Gate>,

	// Settings subsystem
	pub settings: Arc<SettingManager>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	/// Default page size for notification listings.
	pub per_page: u32,
	/// Capacity of the raw setting value cache.
	pub settings_cache_size: usize,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	schema: Option<SettingsSchema>,
	meta_adapter: Option<Arc<dyn MetaAdapter>>,
	gate: Option<Arc<dyn Gate>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts { per_page: 15, settings_cache_size: 100 },
			schema: None,
			meta_adapter: None,
			gate: None,
		}
	}

	// Opts
	pub fn per_page(&mut self, per_page: u32) -> &mut Self { self.opts.per_page = per_page; self }
	pub fn settings_cache_size(&mut self, size: usize) -> &mut Self { self.opts.settings_cache_size = size; self }
	pub fn settings_schema(&mut self, schema: SettingsSchema) -> &mut Self { self.schema = Some(schema); self }

	// Adapters
	pub fn meta_adapter(&mut self, meta_adapter: Arc<dyn MetaAdapter>) -> &mut Self { self.meta_adapter = Some(meta_adapter); self }
	pub fn gate(&mut self, gate: Arc<dyn Gate>) -> &mut Self { self.gate = Some(gate); self }

	pub fn build(self) -> HrResult<App> {
		let meta_adapter =
			self.meta_adapter.ok_or_else(|| Error::Config("no meta adapter".into()))?;
		let schema = Arc::new(self.schema.unwrap_or_default());
		let gate = self.gate.unwrap_or_else(|| Arc::new(DenyAll));
		let settings = Arc::new(SettingManager::new(
			schema,
			meta_adapter.clone(),
			self.opts.settings_cache_size,
		));

		info!("Herald v{} app state ready", VERSION);
		Ok(Arc::new(AppState { opts: self.opts, meta_adapter, gate, settings }))
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
