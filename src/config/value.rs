//! Runtime-ambiguous configuration values as handed over by a configuration loader.

// self
use crate::_prelude::*;

/// Ordered mapping from configuration keys to loosely-typed values.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A configuration value of runtime-ambiguous shape.
///
/// `Null` is treated exactly like an absent key by every coercion helper.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
	/// Explicit null.
	#[default]
	Null,
	/// Native boolean.
	Bool(bool),
	/// Integral number.
	Integer(i64),
	/// Non-integral number.
	Float(f64),
	/// Plain string, possibly holding a boolean, a comma list, or a JSON array.
	String(String),
	/// Native list.
	List(Vec<ConfigValue>),
	/// Nested section.
	Map(ConfigMap),
}
impl ConfigValue {
	/// Returns a stable label describing the runtime shape.
	pub const fn kind(&self) -> &'static str {
		match self {
			ConfigValue::Null => "null",
			ConfigValue::Bool(_) => "bool",
			ConfigValue::Integer(_) => "integer",
			ConfigValue::Float(_) => "float",
			ConfigValue::String(_) => "string",
			ConfigValue::List(_) => "list",
			ConfigValue::Map(_) => "map",
		}
	}

	/// Returns true for [`ConfigValue::Null`].
	pub const fn is_null(&self) -> bool {
		matches!(self, ConfigValue::Null)
	}

	/// Borrows the nested section, if this value is one.
	pub fn as_map(&self) -> Option<&ConfigMap> {
		match self {
			ConfigValue::Map(map) => Some(map),
			_ => None,
		}
	}
}
impl From<serde_json::Value> for ConfigValue {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => ConfigValue::Null,
			serde_json::Value::Bool(b) => ConfigValue::Bool(b),
			serde_json::Value::Number(n) => match n.as_i64() {
				Some(i) => ConfigValue::Integer(i),
				None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
			},
			serde_json::Value::String(s) => ConfigValue::String(s),
			serde_json::Value::Array(items) =>
				ConfigValue::List(items.into_iter().map(ConfigValue::from).collect()),
			serde_json::Value::Object(entries) =>
				ConfigValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect()),
		}
	}
}
impl From<bool> for ConfigValue {
	fn from(value: bool) -> Self {
		ConfigValue::Bool(value)
	}
}
impl From<i64> for ConfigValue {
	fn from(value: i64) -> Self {
		ConfigValue::Integer(value)
	}
}
impl From<&str> for ConfigValue {
	fn from(value: &str) -> Self {
		ConfigValue::String(value.to_owned())
	}
}
impl From<String> for ConfigValue {
	fn from(value: String) -> Self {
		ConfigValue::String(value)
	}
}
impl From<Vec<ConfigValue>> for ConfigValue {
	fn from(value: Vec<ConfigValue>) -> Self {
		ConfigValue::List(value)
	}
}
impl From<ConfigMap> for ConfigValue {
	fn from(value: ConfigMap) -> Self {
		ConfigValue::Map(value)
	}
}

/// Converts a JSON object into a [`ConfigMap`]; any other JSON value yields an empty map.
pub fn map_from_json(value: serde_json::Value) -> ConfigMap {
	match ConfigValue::from(value) {
		ConfigValue::Map(map) => map,
		_ => ConfigMap::new(),
	}
}
