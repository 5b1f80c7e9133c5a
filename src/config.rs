//! Loosely-typed configuration values and the coercion rules that turn them into typed fields.
//!
//! `value` models the raw shapes a configuration loader can hand over, `coerce` applies the
//! boolean/list/string/port rules, and `source` exposes the sections consumed by request and
//! sanitizer construction.

pub mod coerce;
pub mod source;
pub mod value;

pub use coerce::*;
pub use source::*;
pub use value::*;

/// Configuration keys shared by token and dereference sections.
pub mod keys {
	/// Base URL of the authorization server.
	pub const SERVER_URL: &str = "server_url";
	/// Proxy host used to reach the authorization server.
	pub const PROXY_HOST: &str = "proxyHost";
	/// Proxy port used alongside [`PROXY_HOST`].
	pub const PROXY_PORT: &str = "proxyPort";
	/// Service identifier resolved through service discovery.
	pub const SERVICE_ID: &str = "serviceId";
	/// Enables HTTP/2 on the outbound connection.
	pub const ENABLE_HTTP2: &str = "enableHttp2";
	/// Endpoint path relative to the server URL.
	pub const URI: &str = "uri";
	/// OAuth 2.0 client identifier.
	pub const CLIENT_ID: &str = "client_id";
	/// OAuth 2.0 client secret.
	pub const CLIENT_SECRET: &str = "client_secret";
	/// Requested scopes.
	pub const SCOPE: &str = "scope";
	/// Redirect URI registered for the authorization code grant.
	pub const REDIRECT_URI: &str = "redirect_uri";
	/// Subsection holding authorization code grant settings.
	pub const AUTHORIZATION_CODE: &str = "authorization_code";
	/// Subsection holding refresh token grant settings.
	pub const REFRESH_TOKEN: &str = "refresh_token";
	/// Top-level client section holding the token and dereference sections.
	pub const OAUTH: &str = "oauth";
	/// Token endpoint section under [`OAUTH`].
	pub const TOKEN: &str = "token";
	/// Dereference endpoint section under [`OAUTH`].
	pub const DEREF: &str = "deref";
}
