//! Crate-level error types raised while coercing configuration into typed requests.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Fatal configuration failures. Each variant aborts the enclosing construction.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A value has a type incompatible with the field it feeds.
	#[error("{key} must be {expected}.")]
	InvalidType {
		/// Configuration key holding the offending value.
		key: String,
		/// Human-readable description of the accepted shape.
		expected: &'static str,
	},
	/// A string that looks like a JSON array could not be parsed as a list of strings.
	#[error("could not parse the {key} json with a list of strings.")]
	InvalidJsonList {
		/// Configuration key holding the offending value.
		key: String,
		/// Path of the offending element inside the array (`.` for the array itself).
		path: String,
		/// Underlying JSON failure.
		#[source]
		source: serde_json::Error,
	},
	/// No request model exists for the requested grant.
	#[error("No token request model exists for the {grant} grant.")]
	UnsupportedGrant {
		/// Grant label.
		grant: &'static str,
	},
	/// Server URL (or the path joined onto it) cannot be parsed.
	#[error("Server URL is invalid.")]
	InvalidServerUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
impl ConfigError {
	/// Builds an [`ConfigError::InvalidType`] for the provided key.
	pub fn invalid_type(key: impl Into<String>, expected: &'static str) -> Self {
		Self::InvalidType { key: key.into(), expected }
	}

	/// Returns the configuration key involved in the failure, when there is one.
	pub fn key(&self) -> Option<&str> {
		match self {
			Self::InvalidType { key, .. } | Self::InvalidJsonList { key, .. } => Some(key),
			Self::UnsupportedGrant { .. } | Self::InvalidServerUrl { .. } => None,
		}
	}
}
