//! Token dereference request model.

// self
use crate::{
	_prelude::*,
	config::{ConfigSource, coerce_string, keys},
	diagnostic::Built,
	obs::{BuildSpan, Flow},
	request::{Secret, read_client_secret},
	transport::TransportSettings,
};

/// Request resolving an opaque token reference into its underlying token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerefRequest {
	/// Connection settings read from the dereference section.
	pub transport: TransportSettings,
	/// Configured base path joined with `/` and the token reference.
	pub uri: Option<String>,
	/// OAuth 2.0 client identifier.
	pub client_id: Option<String>,
	/// Client secret; unset when the configuration omits it.
	pub client_secret: Option<Secret>,
}
impl DerefRequest {
	/// Builds a lookup for `token` from the dereference section.
	///
	/// The token is appended verbatim; callers must make sure it is path-safe. A missing `uri`
	/// key is treated as an empty base, yielding `/<token>`.
	pub fn from_config<C>(config: &C, token: &str) -> Result<Built<Self>>
	where
		C: ?Sized + ConfigSource,
	{
		let _guard = BuildSpan::new(Flow::Deref).entered();
		let Some(section) = config.deref_config() else {
			return Ok(Built::clean(Self::default()));
		};
		let mut diagnostics = Vec::new();
		let transport = TransportSettings::from_section(section)?;
		let base = coerce_string(section, keys::URI)?;
		let uri = Some(format!("{}/{token}", base.as_deref().unwrap_or_default()));
		let client_id = coerce_string(section, keys::CLIENT_ID)?;
		let client_secret =
			read_client_secret(section, Flow::Deref, config.source_name(), &mut diagnostics)?;

		Ok(Built { value: Self { transport, uri, client_id, client_secret }, diagnostics })
	}

	/// Returns true when the client secret is unset or empty.
	pub fn missing_secret(&self) -> bool {
		self.client_secret.as_ref().is_none_or(Secret::is_empty)
	}
}
