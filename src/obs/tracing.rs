// self
use crate::{_prelude::*, diagnostic::Diagnostic, obs::Flow};

/// A span wrapping one construction.
#[derive(Clone, Debug)]
pub struct BuildSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl BuildSpan {
	/// Creates a new span tagged with the provided flow.
	pub fn new(flow: Flow) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("oauth2_request_config.build", flow = flow.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = flow;

			Self {}
		}
	}

	/// Enters the span for the duration of the returned guard.
	pub fn entered(self) -> BuildSpanGuard {
		#[cfg(feature = "tracing")]
		{
			BuildSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			BuildSpanGuard {}
		}
	}
}

/// RAII guard returned by [`BuildSpan::entered`].
pub struct BuildSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for BuildSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("BuildSpanGuard(..)")
	}
}

/// Logs a diagnostic at `error` level. Secrets never reach this function.
pub fn log_diagnostic(diagnostic: &Diagnostic) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(
			code = diagnostic.code.as_str(),
			property = diagnostic.property,
			flow = diagnostic.flow.as_str(),
			source = %diagnostic.source,
			"{diagnostic}"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = diagnostic;
	}
}

/// Logs a raw string-encoded list before it is parsed.
pub fn trace_raw_list(key: &str, raw: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::trace!(key, raw, "parsing string-encoded list");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (key, raw);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::diagnostic::Diagnostic;

	#[test]
	fn build_span_enters_without_subscriber() {
		let _guard = BuildSpan::new(Flow::Deref).entered();

		log_diagnostic(&Diagnostic::missing_property("client_secret", Flow::Deref, "client.yml"));
		trace_raw_list("bodyAttributesToEncode", "a,b");
	}
}
