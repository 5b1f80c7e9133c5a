//! Attribute filter settings consumed by a request/response sanitizer.
//!
//! Each direction (body, header) carries its own enable flag, encoder identifier, and two
//! independent attribute lists. Names may appear in both lists; the consuming encoder decides
//! precedence. Enable flags are not cross-checked against the lists.

// self
use crate::{
	_prelude::*,
	config::{
		ConfigMap, ConfigSource, coerce::CoerceResult, coerce_bool, coerce_bool_with_fallback,
		coerce_list, coerce_string,
	},
	error::ConfigError,
	obs::{BuildSpan, Flow},
};

/// Sanitizer configuration keys.
pub mod keys {
	/// Global switch.
	pub const ENABLED: &str = "enabled";
	/// Body processing switch.
	pub const BODY_ENABLED: &str = "bodyEnabled";
	/// Legacy alias for [`BODY_ENABLED`].
	pub const SANITIZE_BODY: &str = "sanitizeBody";
	/// Header processing switch.
	pub const HEADER_ENABLED: &str = "headerEnabled";
	/// Legacy alias for [`HEADER_ENABLED`].
	pub const SANITIZE_HEADER: &str = "sanitizeHeader";
	/// Encoder applied to body attributes.
	pub const BODY_ENCODER: &str = "bodyEncoder";
	/// Encoder applied to header values.
	pub const HEADER_ENCODER: &str = "headerEncoder";
	/// Body attributes to encode.
	pub const BODY_ATTRIBUTES_TO_ENCODE: &str = "bodyAttributesToEncode";
	/// Body attributes to leave untouched.
	pub const BODY_ATTRIBUTES_TO_IGNORE: &str = "bodyAttributesToIgnore";
	/// Headers to encode.
	pub const HEADER_ATTRIBUTES_TO_ENCODE: &str = "headerAttributesToEncode";
	/// Headers to leave untouched.
	pub const HEADER_ATTRIBUTES_TO_IGNORE: &str = "headerAttributesToIgnore";
}

/// Encoder used when a direction does not configure one.
pub const DEFAULT_ENCODER: &str = "javascript-source";

/// Target of a sanitizer filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SanitizerTarget {
	/// Request/response body attributes.
	Body,
	/// Header values.
	Header,
}
impl SanitizerTarget {
	const fn keys(self) -> TargetKeys {
		match self {
			SanitizerTarget::Body => TargetKeys {
				enabled: keys::BODY_ENABLED,
				legacy_enabled: keys::SANITIZE_BODY,
				encoder: keys::BODY_ENCODER,
				to_encode: keys::BODY_ATTRIBUTES_TO_ENCODE,
				to_ignore: keys::BODY_ATTRIBUTES_TO_IGNORE,
			},
			SanitizerTarget::Header => TargetKeys {
				enabled: keys::HEADER_ENABLED,
				legacy_enabled: keys::SANITIZE_HEADER,
				encoder: keys::HEADER_ENCODER,
				to_encode: keys::HEADER_ATTRIBUTES_TO_ENCODE,
				to_ignore: keys::HEADER_ATTRIBUTES_TO_IGNORE,
			},
		}
	}
}

struct TargetKeys {
	enabled: &'static str,
	legacy_enabled: &'static str,
	encoder: &'static str,
	to_encode: &'static str,
	to_ignore: &'static str,
}

/// Filter settings for one direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFilter {
	/// Whether this direction is processed.
	pub enabled: bool,
	/// Encoder identifier.
	pub encoder: String,
	/// Attributes to encode; `None` when not configured.
	pub attributes_to_encode: Option<Vec<String>>,
	/// Attributes to skip; `None` when not configured.
	pub attributes_to_ignore: Option<Vec<String>>,
}
impl AttributeFilter {
	/// Returns true when `name` is listed for encoding.
	pub fn encodes(&self, name: &str) -> bool {
		self.attributes_to_encode.as_ref().is_some_and(|list| list.iter().any(|n| n == name))
	}

	/// Returns true when `name` is listed as ignored.
	pub fn ignores(&self, name: &str) -> bool {
		self.attributes_to_ignore.as_ref().is_some_and(|list| list.iter().any(|n| n == name))
	}
}
impl Default for AttributeFilter {
	fn default() -> Self {
		Self {
			enabled: false,
			encoder: DEFAULT_ENCODER.to_owned(),
			attributes_to_encode: None,
			attributes_to_ignore: None,
		}
	}
}

/// Resolved sanitizer settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizerConfig {
	/// Global switch.
	pub enabled: bool,
	/// Body filter.
	pub body: AttributeFilter,
	/// Header filter.
	pub header: AttributeFilter,
}
impl SanitizerConfig {
	/// Loads the sanitizer section from `config`; an absent section yields the defaults.
	pub fn load<C>(config: &C) -> Result<Self>
	where
		C: ?Sized + ConfigSource,
	{
		match config.sanitizer_config() {
			Some(section) => Self::from_map(section),
			None => Ok(Self::default()),
		}
	}

	/// Builds the settings from a resolved sanitizer map.
	///
	/// Lists are resolved first, then scalars; the two passes are independent.
	pub fn from_map(map: &ConfigMap) -> Result<Self> {
		let _guard = BuildSpan::new(Flow::Sanitizer).entered();
		let mut config = Self::default();

		for target in [SanitizerTarget::Body, SanitizerTarget::Header] {
			let target_keys = target.keys();
			let filter = config.filter_mut(target);

			filter.attributes_to_encode = coerce_list(map, target_keys.to_encode)?;
			filter.attributes_to_ignore = coerce_list(map, target_keys.to_ignore)?;
		}

		config.enabled = coerce_bool(map, keys::ENABLED)?.unwrap_or(false);

		for target in [SanitizerTarget::Body, SanitizerTarget::Header] {
			let target_keys = target.keys();
			let filter = config.filter_mut(target);

			filter.enabled =
				coerce_bool_with_fallback(map, target_keys.enabled, target_keys.legacy_enabled)?
					.unwrap_or(false);
			filter.encoder = encoder(map, target_keys.encoder)?;
		}

		Ok(config)
	}

	/// Filter settings for `target`.
	pub fn filter(&self, target: SanitizerTarget) -> &AttributeFilter {
		match target {
			SanitizerTarget::Body => &self.body,
			SanitizerTarget::Header => &self.header,
		}
	}

	/// Mutable filter settings for `target`.
	pub fn filter_mut(&mut self, target: SanitizerTarget) -> &mut AttributeFilter {
		match target {
			SanitizerTarget::Body => &mut self.body,
			SanitizerTarget::Header => &mut self.header,
		}
	}

	/// Returns true when the sanitizer is on globally and for `target`.
	pub fn is_active(&self, target: SanitizerTarget) -> bool {
		self.enabled && self.filter(target).enabled
	}
}

fn encoder(map: &ConfigMap, key: &str) -> CoerceResult<String> {
	coerce_string(map, key)
		.map_err(|_| ConfigError::invalid_type(key, "an encoder name"))
		.map(|encoder| encoder.unwrap_or_else(|| DEFAULT_ENCODER.to_owned()))
}
