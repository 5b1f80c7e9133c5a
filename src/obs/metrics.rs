// self
use crate::diagnostic::Diagnostic;

/// Records a diagnostic via the global metrics recorder (when enabled).
pub fn record_diagnostic(diagnostic: &Diagnostic) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_request_config_diagnostic_total",
			"flow" => diagnostic.flow.as_str(),
			"code" => diagnostic.code.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = diagnostic;
	}
}
