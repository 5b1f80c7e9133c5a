// self
use crate::{_prelude::*, config::keys, obs::Flow};

/// OAuth 2.0 grant types a token request can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Authorization Code grant.
	AuthorizationCode,
	/// Refresh Token grant.
	RefreshToken,
	/// Client Credentials grant.
	ClientCredentials,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => keys::AUTHORIZATION_CODE,
			GrantType::RefreshToken => keys::REFRESH_TOKEN,
			GrantType::ClientCredentials => "client_credentials",
		}
	}

	/// Returns the construction flow for grants that have a request model.
	pub const fn flow(self) -> Option<Flow> {
		match self {
			GrantType::AuthorizationCode => Some(Flow::AuthorizationCode),
			GrantType::RefreshToken => Some(Flow::RefreshToken),
			GrantType::ClientCredentials => None,
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_match_config_subsections() {
		assert_eq!(GrantType::AuthorizationCode.as_str(), "authorization_code");
		assert_eq!(GrantType::RefreshToken.to_string(), "refresh_token");
		assert_eq!(GrantType::ClientCredentials.flow(), None);
		assert_eq!(
			serde_json::to_string(&GrantType::RefreshToken).expect("Grant should serialize."),
			"\"refresh_token\""
		);
	}
}
