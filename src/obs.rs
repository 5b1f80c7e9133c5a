//! Optional observability hooks for configuration-driven construction.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to run every construction inside an
//!   `oauth2_request_config.build` span carrying the `flow` field, log missing-secret
//!   diagnostics at `error` level, and log raw list strings at `trace` level.
//! - Enable `metrics` to increment the `oauth2_request_config_diagnostic_total` counter for
//!   every diagnostic, labeled by `flow` + `code`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, diagnostic::Diagnostic};

/// Construction flows observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
	/// Authorization code token request.
	AuthorizationCode,
	/// Refresh token request.
	RefreshToken,
	/// Token dereference request.
	Deref,
	/// Sanitizer attribute filter configuration.
	Sanitizer,
}
impl Flow {
	/// Returns a stable label suitable for span fields, metric labels, and diagnostics.
	pub const fn as_str(self) -> &'static str {
		match self {
			Flow::AuthorizationCode => "authorization_code",
			Flow::RefreshToken => "refresh_token",
			Flow::Deref => "deref",
			Flow::Sanitizer => "sanitizer",
		}
	}
}
impl Display for Flow {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Routes a diagnostic to the log (when enabled) and the metrics recorder (when enabled).
pub fn emit_diagnostic(diagnostic: &Diagnostic) {
	log_diagnostic(diagnostic);
	record_diagnostic(diagnostic);
}
