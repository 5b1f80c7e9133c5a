//! Coercion rules shared by request and sanitizer construction.
//!
//! Every helper treats an absent key and an explicit null the same way: the field is left
//! unset (`None`) so callers can apply their own default. Values of the wrong runtime shape
//! fail with [`ConfigError::InvalidType`]; malformed JSON arrays fail with
//! [`ConfigError::InvalidJsonList`].

// self
use crate::{
	config::{ConfigMap, ConfigValue},
	error::ConfigError,
	obs,
};

/// Result alias used by coercion helpers.
pub type CoerceResult<T> = std::result::Result<T, ConfigError>;

/// Port used when a section does not configure one.
pub const DEFAULT_PROXY_PORT: u16 = 443;

/// Looks up a key, treating an explicit null as absent.
pub fn lookup<'a>(map: &'a ConfigMap, key: &str) -> Option<&'a ConfigValue> {
	map.get(key).filter(|value| !value.is_null())
}

/// Parses a boolean string. Only the exact lowercase `"true"` yields `true`.
pub fn parse_bool_str(raw: &str) -> bool {
	raw == "true"
}

/// Coerces a boolean field; `None` when the key is absent.
pub fn coerce_bool(map: &ConfigMap, key: &str) -> CoerceResult<Option<bool>> {
	lookup(map, key).map(|value| bool_from_value(key, value)).transpose()
}

/// Coerces a boolean field, consulting a legacy key only when the primary key is absent.
pub fn coerce_bool_with_fallback(
	map: &ConfigMap,
	primary: &str,
	legacy: &str,
) -> CoerceResult<Option<bool>> {
	match coerce_bool(map, primary)? {
		Some(value) => Ok(Some(value)),
		None => coerce_bool(map, legacy),
	}
}

/// Coerces a list field; `None` when the key is absent, which is distinct from an empty list.
pub fn coerce_list(map: &ConfigMap, key: &str) -> CoerceResult<Option<Vec<String>>> {
	let Some(value) = lookup(map, key) else {
		return Ok(None);
	};

	match value {
		ConfigValue::String(raw) => parse_list_str(key, raw).map(Some),
		ConfigValue::List(items) => items
			.iter()
			.map(|item| match item {
				ConfigValue::String(s) => Ok(s.clone()),
				_ => Err(ConfigError::invalid_type(key, "a list of strings")),
			})
			.collect::<CoerceResult<Vec<_>>>()
			.map(Some),
		_ => Err(ConfigError::invalid_type(key, "a list of strings")),
	}
}

/// Parses a string-encoded list: a JSON array when it starts with `[`, otherwise a comma list.
pub fn parse_list_str(key: &str, raw: &str) -> CoerceResult<Vec<String>> {
	let trimmed = raw.trim();

	obs::trace_raw_list(key, trimmed);

	if trimmed.starts_with('[') {
		let mut de = serde_json::Deserializer::from_str(trimmed);
		let list = serde_path_to_error::deserialize::<_, Vec<String>>(&mut de).map_err(|e| {
			let path = e.path().to_string();

			ConfigError::InvalidJsonList { key: key.to_owned(), path, source: e.into_inner() }
		})?;

		de.end().map_err(|source| ConfigError::InvalidJsonList {
			key: key.to_owned(),
			path: ".".into(),
			source,
		})?;

		Ok(list)
	} else {
		Ok(split_comma_list(trimmed))
	}
}

/// Splits on commas, trimming the whitespace around each separator.
///
/// Input without any comma yields a single entry, so `""` becomes `[""]` rather than an
/// empty list. Empty trailing segments are dropped (`"a, b,"` becomes `["a", "b"]`).
pub fn split_comma_list(raw: &str) -> Vec<String> {
	if !raw.contains(',') {
		return vec![raw.to_owned()];
	}

	let mut parts = raw.split(',').map(|part| part.trim().to_owned()).collect::<Vec<_>>();

	while parts.last().is_some_and(String::is_empty) {
		parts.pop();
	}

	parts
}

/// Coerces a string field; `None` when the key is absent.
pub fn coerce_string(map: &ConfigMap, key: &str) -> CoerceResult<Option<String>> {
	match lookup(map, key) {
		None => Ok(None),
		Some(ConfigValue::String(s)) => Ok(Some(s.clone())),
		Some(_) => Err(ConfigError::invalid_type(key, "a string value")),
	}
}

/// Coerces a port field, falling back to `default` when the key is absent.
pub fn coerce_port(map: &ConfigMap, key: &str, default: u16) -> CoerceResult<u16> {
	match lookup(map, key) {
		None => Ok(default),
		Some(ConfigValue::Integer(port)) => u16::try_from(*port)
			.map_err(|_| ConfigError::invalid_type(key, "an integer port number")),
		Some(_) => Err(ConfigError::invalid_type(key, "an integer port number")),
	}
}

/// Borrows a nested section; `None` when the key is absent.
pub fn coerce_section<'a>(map: &'a ConfigMap, key: &str) -> CoerceResult<Option<&'a ConfigMap>> {
	match lookup(map, key) {
		None => Ok(None),
		Some(ConfigValue::Map(section)) => Ok(Some(section)),
		Some(_) => Err(ConfigError::invalid_type(key, "a mapping")),
	}
}

fn bool_from_value(key: &str, value: &ConfigValue) -> CoerceResult<bool> {
	match value {
		ConfigValue::Bool(b) => Ok(*b),
		ConfigValue::String(s) => Ok(parse_bool_str(s)),
		_ => Err(ConfigError::invalid_type(key, "a boolean value")),
	}
}
