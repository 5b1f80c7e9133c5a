//! Configuration-access seam consumed by request and sanitizer construction.

// self
use crate::{
	_prelude::*,
	config::{ConfigMap, coerce_section, keys, map_from_json},
};

/// Provides the already-materialized configuration sections used during construction.
///
/// Implementors own loading and file-format parsing; construction only reads the returned
/// maps. `None` means the section is not configured at all.
pub trait ConfigSource {
	/// Name of the configuration source, reported in diagnostics (e.g. `client.yml`).
	fn source_name(&self) -> &str;

	/// Token endpoint section holding transport fields plus per-grant subsections.
	fn token_config(&self) -> Option<&ConfigMap>;

	/// Dereference endpoint section.
	fn deref_config(&self) -> Option<&ConfigMap>;

	/// Sanitizer section.
	fn sanitizer_config(&self) -> Option<&ConfigMap>;
}

/// In-memory [`ConfigSource`] built from explicit sections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticConfig {
	/// Source name reported in diagnostics.
	pub source_name: String,
	/// Token endpoint section.
	pub token: Option<ConfigMap>,
	/// Dereference endpoint section.
	pub deref: Option<ConfigMap>,
	/// Sanitizer section.
	pub sanitizer: Option<ConfigMap>,
}
impl StaticConfig {
	/// Source name used when none is supplied.
	pub const DEFAULT_SOURCE_NAME: &'static str = "client.yml";

	/// Creates an empty configuration reporting the provided source name.
	pub fn new(source_name: impl Into<String>) -> Self {
		Self { source_name: source_name.into(), token: None, deref: None, sanitizer: None }
	}

	/// Builds a configuration from a client map, locating `oauth.token` and `oauth.deref`.
	pub fn from_client_map(source_name: impl Into<String>, client: &ConfigMap) -> Result<Self> {
		let mut config = Self::new(source_name);

		if let Some(oauth) = coerce_section(client, keys::OAUTH)? {
			config.token = coerce_section(oauth, keys::TOKEN)?.cloned();
			config.deref = coerce_section(oauth, keys::DEREF)?.cloned();
		}

		Ok(config)
	}

	/// Same as [`StaticConfig::from_client_map`] for a JSON document.
	pub fn from_client_json(
		source_name: impl Into<String>,
		client: serde_json::Value,
	) -> Result<Self> {
		Self::from_client_map(source_name, &map_from_json(client))
	}

	/// Sets the token endpoint section.
	pub fn with_token(mut self, section: ConfigMap) -> Self {
		self.token = Some(section);

		self
	}

	/// Sets the dereference endpoint section.
	pub fn with_deref(mut self, section: ConfigMap) -> Self {
		self.deref = Some(section);

		self
	}

	/// Sets the sanitizer section.
	pub fn with_sanitizer(mut self, section: ConfigMap) -> Self {
		self.sanitizer = Some(section);

		self
	}
}
impl Default for StaticConfig {
	fn default() -> Self {
		Self::new(Self::DEFAULT_SOURCE_NAME)
	}
}
impl ConfigSource for StaticConfig {
	fn source_name(&self) -> &str {
		&self.source_name
	}

	fn token_config(&self) -> Option<&ConfigMap> {
		self.token.as_ref()
	}

	fn deref_config(&self) -> Option<&ConfigMap> {
		self.deref.as_ref()
	}

	fn sanitizer_config(&self) -> Option<&ConfigMap> {
		self.sanitizer.as_ref()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn client_map_locates_oauth_sections() {
		let config = StaticConfig::from_client_json(
			"client.yml",
			serde_json::json!({
				"oauth": {
					"token": { "server_url": "https://issuer" },
					"deref": { "uri": "/oauth2/deref" }
				}
			}),
		)
		.expect("Client map should resolve.");

		assert_eq!(config.source_name(), "client.yml");
		assert!(config.token_config().is_some_and(|s| s.contains_key("server_url")));
		assert!(config.deref_config().is_some_and(|s| s.contains_key("uri")));
		assert!(config.sanitizer_config().is_none());
	}

	#[test]
	fn missing_oauth_section_leaves_everything_absent() {
		let config = StaticConfig::from_client_json("client.yml", serde_json::json!({}))
			.expect("Empty client map should resolve.");

		assert!(config.token_config().is_none());
		assert!(config.deref_config().is_none());
	}

	#[test]
	fn non_map_oauth_section_is_rejected() {
		let err = StaticConfig::from_client_json("client.yml", serde_json::json!({ "oauth": "x" }))
			.expect_err("Scalar oauth section must be rejected.");

		assert_eq!(err.to_string(), "oauth must be a mapping.");
	}
}
