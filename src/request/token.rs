//! Grant-specific token request models.

// self
use crate::{
	_prelude::*,
	config::{ConfigMap, ConfigSource, coerce_list, coerce_section, coerce_string, keys},
	diagnostic::{Built, Diagnostic},
	obs::{BuildSpan, Flow},
	request::{GrantType, Secret, read_client_secret},
	transport::TransportSettings,
};

/// Client and transport fields shared by every token request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRequestBase {
	/// Token endpoint path relative to the server URL.
	pub uri: Option<String>,
	/// OAuth 2.0 client identifier.
	pub client_id: Option<String>,
	/// Client secret; unset when the configuration omits it.
	pub client_secret: Option<Secret>,
	/// Requested scopes in configuration order; `None` when not configured.
	pub scope: Option<Vec<String>>,
	/// Connection settings read from the token section.
	pub transport: TransportSettings,
}
impl TokenRequestBase {
	/// Returns true when the client secret is unset or empty.
	pub fn missing_secret(&self) -> bool {
		self.client_secret.as_ref().is_none_or(Secret::is_empty)
	}

	/// Joins scopes with a space for the `scope` form parameter; `None` when there are none.
	pub fn scope_param(&self) -> Option<String> {
		self.scope.as_ref().filter(|scope| !scope.is_empty()).map(|scope| scope.join(" "))
	}
}

/// Authorization code exchange request.
///
/// `auth_code` never comes from configuration; inject it with
/// [`AuthorizationCodeRequest::with_auth_code`] before handing the request to a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationCodeRequest {
	/// Shared client and transport fields.
	pub base: TokenRequestBase,
	/// Redirect URI registered with the authorization server.
	pub redirect_uri: Option<String>,
	/// Authorization code returned to the redirect URI.
	pub auth_code: Option<Secret>,
}
impl AuthorizationCodeRequest {
	/// Grant carried by this request.
	pub const GRANT_TYPE: GrantType = GrantType::AuthorizationCode;

	/// Builds the request from the `authorization_code` subsection of the token section.
	pub fn from_config<C>(config: &C) -> Result<Built<Self>>
	where
		C: ?Sized + ConfigSource,
	{
		let _guard = BuildSpan::new(Flow::AuthorizationCode).entered();
		let mut diagnostics = Vec::new();
		let (base, section) = build_base(config, Self::GRANT_TYPE, &mut diagnostics)?;
		let redirect_uri = match section {
			Some(section) => coerce_string(section, keys::REDIRECT_URI)?,
			None => None,
		};

		Ok(Built { value: Self { base, redirect_uri, auth_code: None }, diagnostics })
	}

	/// Grant carried by this request.
	pub fn grant_type(&self) -> GrantType {
		Self::GRANT_TYPE
	}

	/// Injects the per-call authorization code.
	pub fn with_auth_code(mut self, code: impl Into<Secret>) -> Self {
		self.auth_code = Some(code.into());

		self
	}
}

/// Refresh token rotation request.
///
/// `refresh_token` never comes from configuration; inject it with
/// [`RefreshTokenRequest::with_refresh_token`] before handing the request to a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefreshTokenRequest {
	/// Shared client and transport fields.
	pub base: TokenRequestBase,
	/// Refresh token being exchanged.
	pub refresh_token: Option<Secret>,
}
impl RefreshTokenRequest {
	/// Grant carried by this request.
	pub const GRANT_TYPE: GrantType = GrantType::RefreshToken;

	/// Builds the request from the `refresh_token` subsection of the token section.
	pub fn from_config<C>(config: &C) -> Result<Built<Self>>
	where
		C: ?Sized + ConfigSource,
	{
		let _guard = BuildSpan::new(Flow::RefreshToken).entered();
		let mut diagnostics = Vec::new();
		let (base, _) = build_base(config, Self::GRANT_TYPE, &mut diagnostics)?;

		Ok(Built { value: Self { base, refresh_token: None }, diagnostics })
	}

	/// Grant carried by this request.
	pub fn grant_type(&self) -> GrantType {
		Self::GRANT_TYPE
	}

	/// Injects the per-call refresh token.
	pub fn with_refresh_token(mut self, token: impl Into<Secret>) -> Self {
		self.refresh_token = Some(token.into());

		self
	}
}

/// Reads transport fields from the token section and client fields from the grant subsection.
///
/// An absent token section yields defaults without diagnostics; an absent grant subsection
/// leaves the client fields unset, also without diagnostics.
fn build_base<'a, C>(
	config: &'a C,
	grant: GrantType,
	diagnostics: &mut Vec<Diagnostic>,
) -> Result<(TokenRequestBase, Option<&'a ConfigMap>)>
where
	C: ?Sized + ConfigSource,
{
	let Some(token) = config.token_config() else {
		return Ok((TokenRequestBase::default(), None));
	};
	let mut base =
		TokenRequestBase { transport: TransportSettings::from_section(token)?, ..Default::default() };
	let section = coerce_section(token, grant.as_str())?;

	if let (Some(section), Some(flow)) = (section, grant.flow()) {
		base.client_id = coerce_string(section, keys::CLIENT_ID)?;
		base.client_secret =
			read_client_secret(section, flow, config.source_name(), diagnostics)?;
		base.uri = coerce_string(section, keys::URI)?;
		base.scope = coerce_list(section, keys::SCOPE)?;
	}

	Ok((base, section))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::config::{StaticConfig, map_from_json};

	fn token_config(token: serde_json::Value) -> StaticConfig {
		StaticConfig::default().with_token(map_from_json(token))
	}

	#[test]
	fn authorization_code_reads_nested_section() {
		let config = token_config(serde_json::json!({
			"server_url": "https://localhost:6882",
			"proxyHost": "proxy",
			"enableHttp2": true,
			"authorization_code": {
				"uri": "/oauth2/token",
				"client_id": "f7d42348-c647-4efb-a52d-4c5787421e72",
				"client_secret": "f6h1FTI8Q3-7UScPZDzfXA",
				"redirect_uri": "http://localhost:8080/authorization",
				"scope": ["petstore.r", "petstore.w"]
			}
		}));
		let built =
			AuthorizationCodeRequest::from_config(&config).expect("Request should build.");

		assert!(built.is_clean());

		let request = built.value.with_auth_code("code-123");

		assert_eq!(request.grant_type(), GrantType::AuthorizationCode);
		assert_eq!(request.base.uri.as_deref(), Some("/oauth2/token"));
		assert_eq!(request.redirect_uri.as_deref(), Some("http://localhost:8080/authorization"));
		assert_eq!(request.base.scope_param().as_deref(), Some("petstore.r petstore.w"));
		assert_eq!(request.base.transport.proxy(), Some(("proxy", 443)));
		assert!(request.base.transport.enable_http2);
		assert_eq!(request.auth_code.as_ref().map(Secret::expose), Some("code-123"));
		assert!(!format!("{request:?}").contains("f6h1FTI8Q3"));
	}

	#[test]
	fn missing_grant_subsection_is_silent() {
		let config = token_config(serde_json::json!({ "server_url": "https://issuer" }));
		let built = RefreshTokenRequest::from_config(&config).expect("Request should build.");

		assert!(built.is_clean());
		assert_eq!(built.value.base.transport.server_url.as_deref(), Some("https://issuer"));
		assert_eq!(built.value.base.client_id, None);
		assert_eq!(built.value.base.scope, None);
	}

	#[test]
	fn scope_accepts_comma_strings() {
		let config = token_config(serde_json::json!({
			"refresh_token": { "client_secret": "s", "scope": "read, write" }
		}));
		let request = RefreshTokenRequest::from_config(&config)
			.expect("Request should build.")
			.into_value()
			.with_refresh_token("rt-1");

		assert_eq!(request.base.scope, Some(vec!["read".to_owned(), "write".to_owned()]));
		assert_eq!(request.refresh_token.as_ref().map(Secret::expose), Some("rt-1"));
	}

	#[test]
	fn empty_scope_list_has_no_param() {
		let base = TokenRequestBase { scope: Some(Vec::new()), ..Default::default() };

		assert_eq!(base.scope_param(), None);
		assert!(base.missing_secret());
	}

	#[test]
	fn wrong_typed_fields_abort_construction() {
		let scalar_section = token_config(serde_json::json!({ "authorization_code": "oops" }));
		let numeric_secret = token_config(serde_json::json!({
			"authorization_code": { "client_secret": 42 }
		}));

		let err = AuthorizationCodeRequest::from_config(&scalar_section)
			.expect_err("Scalar grant section must be rejected.");

		assert_eq!(err.to_string(), "authorization_code must be a mapping.");

		let err = AuthorizationCodeRequest::from_config(&numeric_secret)
			.expect_err("Numeric secret must be rejected.");

		assert_eq!(err.to_string(), "client_secret must be a string value.");
	}
}
