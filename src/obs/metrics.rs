// self
use crate::obs::{CallKind, CallOutcome};

/// Bumps `uaa_gateway_call_total{op, outcome}` on the installed recorder.
///
/// Does nothing unless the `metrics` feature is on.
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"uaa_gateway_call_total",
			"op" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
