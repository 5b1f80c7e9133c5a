//! Outbound request models built from configuration.
//!
//! Token requests are a sum type over the grant-specific models, each carrying the shared
//! [`TokenRequestBase`]. [`DerefRequest`] stands alone because a dereference lookup is not a
//! token grant. Construction returns [`Built`] so a missing client secret surfaces as a
//! diagnostic instead of an error.

pub mod deref;
/// Grant type labels.
pub mod grant;
pub mod secret;
pub mod token;

pub use deref::*;
pub use grant::*;
pub use secret::*;
pub use token::*;

// self
use crate::{
	_prelude::*,
	config::{ConfigMap, ConfigSource, coerce::CoerceResult, coerce_string, keys},
	diagnostic::{Built, Diagnostic},
	error::ConfigError,
	obs::{self, Flow},
};

/// Token endpoint request for one of the supported grants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenRequest {
	/// Authorization code exchange.
	AuthorizationCode(AuthorizationCodeRequest),
	/// Refresh token rotation.
	RefreshToken(RefreshTokenRequest),
}
impl TokenRequest {
	/// Builds the request model for `grant` from the token configuration section.
	pub fn from_config<C>(grant: GrantType, config: &C) -> Result<Built<Self>>
	where
		C: ?Sized + ConfigSource,
	{
		match grant {
			GrantType::AuthorizationCode =>
				Ok(AuthorizationCodeRequest::from_config(config)?.map(Self::AuthorizationCode)),
			GrantType::RefreshToken =>
				Ok(RefreshTokenRequest::from_config(config)?.map(Self::RefreshToken)),
			GrantType::ClientCredentials =>
				Err(ConfigError::UnsupportedGrant { grant: grant.as_str() }.into()),
		}
	}

	/// Grant carried by the request; fixed by the variant.
	pub fn grant_type(&self) -> GrantType {
		match self {
			Self::AuthorizationCode(_) => AuthorizationCodeRequest::GRANT_TYPE,
			Self::RefreshToken(_) => RefreshTokenRequest::GRANT_TYPE,
		}
	}

	/// Shared client and transport fields.
	pub fn base(&self) -> &TokenRequestBase {
		match self {
			Self::AuthorizationCode(req) => &req.base,
			Self::RefreshToken(req) => &req.base,
		}
	}

	/// Mutable access to the shared client and transport fields.
	pub fn base_mut(&mut self) -> &mut TokenRequestBase {
		match self {
			Self::AuthorizationCode(req) => &mut req.base,
			Self::RefreshToken(req) => &mut req.base,
		}
	}

	/// Returns true when the client secret is unset or empty.
	pub fn missing_secret(&self) -> bool {
		self.base().missing_secret()
	}

	/// Returns true when the per-call grant value (code or refresh token) has not been injected.
	pub fn missing_grant_value(&self) -> bool {
		match self {
			Self::AuthorizationCode(req) => req.auth_code.is_none(),
			Self::RefreshToken(req) => req.refresh_token.is_none(),
		}
	}
}
impl From<AuthorizationCodeRequest> for TokenRequest {
	fn from(value: AuthorizationCodeRequest) -> Self {
		Self::AuthorizationCode(value)
	}
}
impl From<RefreshTokenRequest> for TokenRequest {
	fn from(value: RefreshTokenRequest) -> Self {
		Self::RefreshToken(value)
	}
}

/// Reads `client_secret`, recording a diagnostic (and leaving it unset) when absent.
pub(crate) fn read_client_secret(
	section: &ConfigMap,
	flow: Flow,
	source: &str,
	diagnostics: &mut Vec<Diagnostic>,
) -> CoerceResult<Option<Secret>> {
	let secret = coerce_string(section, keys::CLIENT_SECRET)?.map(Secret::from);

	if secret.is_none() {
		let diagnostic = Diagnostic::missing_property(keys::CLIENT_SECRET, flow, source);

		obs::emit_diagnostic(&diagnostic);
		diagnostics.push(diagnostic);
	}

	Ok(secret)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		config::{StaticConfig, map_from_json},
		error::Error,
	};

	fn config() -> StaticConfig {
		StaticConfig::default().with_token(map_from_json(serde_json::json!({
			"server_url": "https://issuer",
			"authorization_code": { "client_id": "ac", "client_secret": "ac-secret" },
			"refresh_token": { "client_id": "rt" }
		})))
	}

	#[test]
	fn dispatches_on_grant_type() {
		let config = config();
		let ac = TokenRequest::from_config(GrantType::AuthorizationCode, &config)
			.expect("Authorization code request should build.");
		let rt = TokenRequest::from_config(GrantType::RefreshToken, &config)
			.expect("Refresh token request should build.");

		assert!(ac.is_clean());
		assert_eq!(ac.value.grant_type(), GrantType::AuthorizationCode);
		assert_eq!(ac.value.base().client_id.as_deref(), Some("ac"));
		assert!(!ac.value.missing_secret());
		assert!(ac.value.missing_grant_value());
		assert_eq!(rt.diagnostics.len(), 1);
		assert_eq!(rt.value.grant_type(), GrantType::RefreshToken);
		assert!(rt.value.missing_secret());
	}

	#[test]
	fn client_credentials_has_no_model() {
		let err = TokenRequest::from_config(GrantType::ClientCredentials, &config())
			.expect_err("Client credentials must be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::UnsupportedGrant { grant: "client_credentials" })
		));
	}

	#[test]
	fn base_mut_allows_secret_injection() {
		let mut request = TokenRequest::from_config(GrantType::RefreshToken, &config())
			.expect("Refresh token request should build.")
			.into_value();

		request.base_mut().client_secret = Some(Secret::new("injected"));

		assert!(!request.missing_secret());
	}
}
