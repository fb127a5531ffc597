//! Optional observability helpers for gateway calls and token fetches.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `uaa_gateway.call` with the `op` (HTTP verb
//!   or token fetch) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `uaa_gateway_call_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// `op` label of a span or counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// GET request.
	Get,
	/// POST request.
	Post,
	/// PUT request.
	Put,
	/// Any other HTTP verb sent through the request builder.
	Other,
	/// Token acquisition against a UAA token endpoint.
	Token,
}
impl CallKind {
	/// Maps an HTTP verb onto its label.
	pub fn from_method(method: &Method) -> Self {
		if *method == Method::GET {
			CallKind::Get
		} else if *method == Method::POST {
			CallKind::Post
		} else if *method == Method::PUT {
			CallKind::Put
		} else {
			CallKind::Other
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Get => "get",
			CallKind::Post => "post",
			CallKind::Put => "put",
			CallKind::Other => "other",
			CallKind::Token => "token",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// `outcome` label of the call counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Recorded before the request is built.
	Attempt,
	/// A response came back (send) or a token was decoded (fetch).
	Success,
	/// An error was returned.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn methods_map_to_stable_labels() {
		assert_eq!(CallKind::from_method(&Method::GET).as_str(), "get");
		assert_eq!(CallKind::from_method(&Method::PUT).to_string(), "put");
		assert_eq!(CallKind::from_method(&Method::DELETE), CallKind::Other);
		assert_eq!(CallOutcome::Failure.to_string(), "failure");
	}
}
