//! Settings types and definitions
//!
//! A setting is declared in configuration with a type tag and optional
//! metadata, stored as a raw nullable string, and converted to its
//! declared type on read.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use herald_types::prelude::*;

// SettingType //
//*************//

/// Declared primitive type of a setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingType {
	#[serde(rename = "string")]
	String,
	#[serde(rename = "int")]
	Int,
	#[serde(rename = "boolean")]
	Boolean,
	#[serde(rename = "float")]
	Float,
}

impl SettingType {
	/// Parses a declared type tag. Anything outside the supported set
	/// fails here, at schema load, so conversion never sees one.
	pub fn parse(tag: &str) -> HrResult<SettingType> {
		match tag {
			"string" => Ok(SettingType::String),
			"int" => Ok(SettingType::Int),
			"boolean" => Ok(SettingType::Boolean),
			"float" => Ok(SettingType::Float),
			_ => Err(Error::UnsupportedType(tag.into())),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			SettingType::String => "string",
			SettingType::Int => "int",
			SettingType::Boolean => "boolean",
			SettingType::Float => "float",
		}
	}

	/// Converts a raw value to this declared type.
	///
	/// Null short-circuits to null before type dispatch. The numeric
	/// casts are lenient: the longest leading numeric prefix of a string
	/// is used, and anything unparseable yields 0 / 0.0 instead of an
	/// error.
	pub fn convert(&self, value: SettingValue) -> SettingValue {
		if let SettingValue::Null = value {
			return SettingValue::Null;
		}
		match self {
			SettingType::Boolean => SettingValue::Bool(truthy(&value)),
			SettingType::String => SettingValue::String(stringify(&value)),
			SettingType::Int => SettingValue::Int(lenient_i64(&value)),
			SettingType::Float => SettingValue::Float(lenient_f64(&value)),
		}
	}
}

impl std::fmt::Display for SettingType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

// SettingValue //
//**************//

/// Runtime value of a setting.
///
/// `Bool` must be before `Int` to avoid bool -> int coercion during
/// untagged deserialization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	String(Box<str>),
}

impl SettingValue {
	pub fn is_null(&self) -> bool {
		matches!(self, SettingValue::Null)
	}

	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::Null => "null",
			SettingValue::Bool(_) => "boolean",
			SettingValue::Int(_) => "int",
			SettingValue::Float(_) => "float",
			SettingValue::String(_) => "string",
		}
	}
}

/// String forms the boolean cast accepts as true, the usual query/form
/// boolean convention. Everything else is false.
const TRUTHY: [&str; 4] = ["1", "true", "on", "yes"];

fn truthy(value: &SettingValue) -> bool {
	match value {
		SettingValue::Null => false,
		SettingValue::Bool(b) => *b,
		SettingValue::Int(i) => *i != 0,
		SettingValue::Float(f) => *f != 0.0,
		SettingValue::String(s) => TRUTHY.iter().any(|t| s.eq_ignore_ascii_case(t)),
	}
}

/// Natural textual form of a value. Booleans render as "true"/"false",
/// which round-trips through the truthy set.
pub(crate) fn stringify(value: &SettingValue) -> Box<str> {
	match value {
		SettingValue::Null => "".into(),
		SettingValue::Bool(b) => if *b { "true".into() } else { "false".into() },
		SettingValue::Int(i) => i.to_string().into(),
		SettingValue::Float(f) => f.to_string().into(),
		SettingValue::String(s) => s.clone(),
	}
}

fn lenient_i64(value: &SettingValue) -> i64 {
	match value {
		SettingValue::Null => 0,
		SettingValue::Bool(b) => i64::from(*b),
		SettingValue::Int(i) => *i,
		SettingValue::Float(f) => *f as i64,
		SettingValue::String(s) => {
			s.trim().parse::<i64>().unwrap_or_else(|_| numeric_prefix(s) as i64)
		}
	}
}

fn lenient_f64(value: &SettingValue) -> f64 {
	match value {
		SettingValue::Null => 0.0,
		SettingValue::Bool(b) => if *b { 1.0 } else { 0.0 },
		SettingValue::Int(i) => *i as f64,
		SettingValue::Float(f) => *f,
		SettingValue::String(s) => numeric_prefix(s),
	}
}

/// Longest leading numeric prefix of `s`: optional sign, digits, optional
/// fraction, optional exponent. A prefix without digits parses as 0.
fn numeric_prefix(s: &str) -> f64 {
	let s = s.trim();
	let bytes = s.as_bytes();
	let mut end = 0;

	if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
		end += 1;
	}
	let mut digits = 0;
	while end < bytes.len() && bytes[end].is_ascii_digit() {
		end += 1;
		digits += 1;
	}
	if end < bytes.len() && bytes[end] == b'.' {
		let mark = end;
		end += 1;
		while end < bytes.len() && bytes[end].is_ascii_digit() {
			end += 1;
			digits += 1;
		}
		if digits == 0 {
			end = mark;
		}
	}
	if digits == 0 {
		return 0.0;
	}
	if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
		let mark = end;
		end += 1;
		if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
			end += 1;
		}
		let exp_start = end;
		while end < bytes.len() && bytes[end].is_ascii_digit() {
			end += 1;
		}
		if end == exp_start {
			end = mark;
		}
	}

	s[..end].parse::<f64>().unwrap_or(0.0)
}

// Schema //
//********//

/// Partial schema entry as declared in configuration. Only `type` is
/// required; the schema fills the rest at load time.
#[derive(Clone, Debug, Deserialize)]
pub struct SettingEntryConfig {
	#[serde(default)]
	pub title: Option<Box<str>>,
	#[serde(default)]
	pub description: Option<Box<str>>,
	#[serde(rename = "type")]
	pub typ: Box<str>,
	#[serde(default)]
	pub default: SettingValue,
	#[serde(default)]
	pub nullable: bool,
}

/// Fully populated schema entry. Every field is present; omitted config
/// fields were defaulted at load.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SettingSchemaEntry {
	pub title: Option<Box<str>>,
	pub description: Option<Box<str>>,
	#[serde(rename = "type")]
	pub typ: SettingType,
	pub default: SettingValue,
	pub nullable: bool,
}

/// Immutable setting schema, loaded once at startup.
#[derive(Debug, Default)]
pub struct SettingsSchema {
	entries: HashMap<Box<str>, SettingSchemaEntry>,
}

impl SettingsSchema {
	/// Builds the schema from declared configuration. Unknown type tags
	/// fail here, before anything is served.
	pub fn from_config(config: HashMap<Box<str>, SettingEntryConfig>) -> HrResult<SettingsSchema> {
		let mut entries = HashMap::new();
		for (key, entry) in config {
			let typ = SettingType::parse(&entry.typ)?;
			debug!("Registering setting: {}", key);
			entries.insert(
				key,
				SettingSchemaEntry {
					title: entry.title,
					description: entry.description,
					typ,
					default: entry.default,
					nullable: entry.nullable,
				},
			);
		}

		info!("Loaded setting schema with {} entries", entries.len());
		Ok(SettingsSchema { entries })
	}

	pub fn get(&self, key: &str) -> Option<&SettingSchemaEntry> {
		self.entries.get(key)
	}

	/// The full configured schema.
	pub fn entries(&self) -> &HashMap<Box<str>, SettingSchemaEntry> {
		&self.entries
	}

	pub fn exists(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

// Setting //
//*********//

/// A setting as read through the manager: the raw stored value plus the
/// value converted to the declared type. The converted value is derived
/// on read and never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Setting {
	pub key: Box<str>,
	pub value: Option<Box<str>>,
	#[serde(rename = "convertedValue")]
	pub converted_value: SettingValue,
}


// vim: ts=4
