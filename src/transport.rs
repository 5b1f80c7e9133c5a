//! Transport fields shared by every outbound request variant.

// self
use crate::{
	_prelude::*,
	config::{
		ConfigMap, DEFAULT_PROXY_PORT, coerce::CoerceResult, coerce_bool, coerce_port,
		coerce_string, keys,
	},
	error::ConfigError,
};

/// Connection settings extracted identically for token and dereference requests.
///
/// `proxy_port` defaults to 443 even when no proxy host is configured, so callers must check
/// `proxy_host` before using it (or go through [`TransportSettings::proxy`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportSettings {
	/// Base URL of the remote server; required before the request can be sent.
	pub server_url: Option<String>,
	/// Optional proxy host.
	pub proxy_host: Option<String>,
	/// Proxy port.
	pub proxy_port: u16,
	/// Service identifier for discovery-based URL resolution.
	pub service_id: Option<String>,
	/// Whether the connection should negotiate HTTP/2.
	pub enable_http2: bool,
}
impl TransportSettings {
	/// Extracts transport fields from a token or dereference section.
	///
	/// No URL validation happens here.
	pub fn from_section(section: &ConfigMap) -> CoerceResult<Self> {
		Ok(Self {
			server_url: coerce_string(section, keys::SERVER_URL)?,
			proxy_host: coerce_string(section, keys::PROXY_HOST)?,
			proxy_port: coerce_port(section, keys::PROXY_PORT, DEFAULT_PROXY_PORT)?,
			service_id: coerce_string(section, keys::SERVICE_ID)?,
			enable_http2: coerce_bool(section, keys::ENABLE_HTTP2)?.unwrap_or(false),
		})
	}

	/// Returns the proxy host and port, only when a proxy host is configured.
	pub fn proxy(&self) -> Option<(&str, u16)> {
		self.proxy_host.as_deref().map(|host| (host, self.proxy_port))
	}

	/// Resolves `path` against the server URL; `None` when no server URL is configured.
	///
	/// An absolute `path` is returned unchanged. A relative one is joined to the server URL with
	/// exactly one `/` between them.
	pub fn endpoint(&self, path: &str) -> Option<Result<Url, ConfigError>> {
		let base = self.server_url.as_deref()?;

		if let Ok(url) = Url::parse(path) {
			return Some(Ok(url));
		}

		Some(
			Url::parse(&format!(
				"{}/{}",
				base.trim_end_matches('/'),
				path.trim_start_matches('/')
			))
			.map_err(|source| ConfigError::InvalidServerUrl { source }),
		)
	}
}
impl Default for TransportSettings {
	fn default() -> Self {
		Self {
			server_url: None,
			proxy_host: None,
			proxy_port: DEFAULT_PROXY_PORT,
			service_id: None,
			enable_http2: false,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::config::map_from_json;

	#[test]
	fn section_fields_pass_through() {
		let settings = TransportSettings::from_section(&map_from_json(serde_json::json!({
			"server_url": "https://issuer:6882",
			"proxyHost": "proxy.local",
			"proxyPort": 3128,
			"serviceId": "com.networknt.oauth2-token-1.0.0",
			"enableHttp2": "true"
		})))
		.expect("Transport section should coerce.");

		assert_eq!(settings.server_url.as_deref(), Some("https://issuer:6882"));
		assert_eq!(settings.proxy(), Some(("proxy.local", 3128)));
		assert_eq!(settings.service_id.as_deref(), Some("com.networknt.oauth2-token-1.0.0"));
		assert!(settings.enable_http2);
	}

	#[test]
	fn port_defaults_without_proxy_host() {
		let settings = TransportSettings::from_section(&ConfigMap::new())
			.expect("Empty section should coerce.");

		assert_eq!(settings, TransportSettings::default());
		assert_eq!(settings.proxy_port, 443);
		assert_eq!(settings.proxy(), None);
		assert!(!settings.enable_http2);
	}

	#[test]
	fn wrong_typed_fields_are_rejected() {
		for (key, value) in [
			("proxyPort", serde_json::json!("443")),
			("enableHttp2", serde_json::json!(1)),
			("server_url", serde_json::json!(true)),
		] {
			let mut section = ConfigMap::new();

			section.insert(key.to_owned(), value.into());

			let err = TransportSettings::from_section(&section)
				.expect_err("Wrong-typed transport field must be rejected.");

			assert_eq!(err.key(), Some(key));
		}
	}

	#[test]
	fn endpoint_joins_server_url_and_path() {
		let settings = TransportSettings {
			server_url: Some("https://issuer:6882/".into()),
			..TransportSettings::default()
		};
		let url = settings
			.endpoint("/oauth2/token")
			.expect("Server URL is configured.")
			.expect("Joined URL should parse.");

		assert_eq!(url.as_str(), "https://issuer:6882/oauth2/token");
		assert!(TransportSettings::default().endpoint("/oauth2/token").is_none());

		let broken = TransportSettings {
			server_url: Some("not a url".into()),
			..TransportSettings::default()
		};

		assert!(broken.endpoint("/x").is_some_and(|r| r.is_err()));
	}

	#[test]
	fn endpoint_inserts_a_single_separator() {
		let settings =
			TransportSettings { server_url: Some("https://issuer".into()), ..Default::default() };

		for path in ["oauth2/token", "/oauth2/token", "//oauth2/token"] {
			let url = settings
				.endpoint(path)
				.expect("Server URL is configured.")
				.expect("Joined URL should parse.");

			assert_eq!(url.as_str(), "https://issuer/oauth2/token", "{path}");
			assert_eq!(url.host_str(), Some("issuer"));
		}
	}

	#[test]
	fn endpoint_keeps_absolute_paths() {
		let settings = TransportSettings {
			server_url: Some("https://localhost:6882".into()),
			..Default::default()
		};
		let url = settings
			.endpoint("https://issuer/deref/abc123")
			.expect("Server URL is configured.")
			.expect("Absolute URL should parse.");

		assert_eq!(url.as_str(), "https://issuer/deref/abc123");
	}
}
