//! Non-fatal diagnostics collected while building requests from configuration.

// self
use crate::{_prelude::*, obs::Flow};

/// Enumerable diagnostic codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
	/// A required configuration property is missing.
	ConfigPropertyMissing,
}
impl DiagnosticCode {
	/// Returns the stable status code string.
	pub const fn as_str(self) -> &'static str {
		match self {
			DiagnosticCode::ConfigPropertyMissing => "ERR10057",
		}
	}
}
impl Display for DiagnosticCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Observational report of a recoverable configuration gap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
	/// Stable diagnostic code.
	pub code: DiagnosticCode,
	/// Missing property name.
	pub property: &'static str,
	/// Flow (grant type or lookup) the property belongs to.
	pub flow: Flow,
	/// Name of the configuration source that lacks the property.
	pub source: String,
}
impl Diagnostic {
	/// Reports a property missing from the named configuration source.
	pub fn missing_property(property: &'static str, flow: Flow, source: impl Into<String>) -> Self {
		Self { code: DiagnosticCode::ConfigPropertyMissing, property, flow, source: source.into() }
	}
}
impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self.code {
			DiagnosticCode::ConfigPropertyMissing => write!(
				f,
				"{}: property {} {} is missing in configuration {}.",
				self.code, self.flow, self.property, self.source
			),
		}
	}
}

/// A constructed value together with the non-fatal diagnostics raised while building it.
#[derive(Clone, Debug, PartialEq)]
pub struct Built<T> {
	/// The (possibly partially populated) value.
	pub value: T,
	/// Diagnostics in emission order.
	pub diagnostics: Vec<Diagnostic>,
}
impl<T> Built<T> {
	/// Wraps a value that produced no diagnostics.
	pub fn clean(value: T) -> Self {
		Self { value, diagnostics: Vec::new() }
	}

	/// Returns true when no diagnostics were raised.
	pub fn is_clean(&self) -> bool {
		self.diagnostics.is_empty()
	}

	/// Discards the diagnostics and returns the value.
	pub fn into_value(self) -> T {
		self.value
	}

	/// Splits into the value and its diagnostics.
	pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
		(self.value, self.diagnostics)
	}

	/// Maps the value, keeping the diagnostics.
	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Built<U> {
		Built { value: f(self.value), diagnostics: self.diagnostics }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn missing_property_renders_code_flow_and_source() {
		let diagnostic =
			Diagnostic::missing_property("client_secret", Flow::AuthorizationCode, "client.yml");

		assert_eq!(diagnostic.code.as_str(), "ERR10057");
		assert_eq!(
			diagnostic.to_string(),
			"ERR10057: property authorization_code client_secret is missing in configuration client.yml."
		);
	}

	#[test]
	fn built_keeps_diagnostics_through_map() {
		let built = Built {
			value: 1,
			diagnostics: vec![Diagnostic::missing_property("client_secret", Flow::Deref, "x")],
		};
		let mapped = built.map(|v| v + 1);

		assert!(!mapped.is_clean());
		assert_eq!(mapped.value, 2);

		let (value, diagnostics) = mapped.into_parts();

		assert_eq!(value, 2);
		assert_eq!(diagnostics.len(), 1);
		assert!(Built::clean(()).is_clean());
	}
}
