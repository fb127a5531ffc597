//! Gateway-level error types shared by the transport, request builder, and token fetcher.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Nothing is retried, logged, or swallowed internally; every variant reaches the immediate
/// caller.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Request could not be constructed from its descriptor.
	#[error(transparent)]
	Request(#[from] RequestError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Token endpoint answered with a success status but the body is not a token response.
	#[error("Token endpoint returned malformed JSON.")]
	TokenParse {
		/// Structured parsing failure, including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Token endpoint answered with a non-success status.
	///
	/// The message is the raw response body, surfaced verbatim.
	#[error("{message}")]
	TokenRequest {
		/// Raw response body returned by the server.
		message: String,
		/// HTTP status code of the response.
		status: u16,
	},
}

/// Configuration failures raised while preparing a transport.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Malformed request failures; raised locally before anything touches the network.
#[derive(Debug, ThisError)]
pub enum RequestError {
	/// Target URL cannot be parsed.
	///
	/// The URL itself is not kept; it may embed credentials.
	#[error("Request URL is invalid: {source}.")]
	InvalidUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A header value contains characters HTTP does not allow.
	#[error("The {name} header value is invalid.")]
	InvalidHeader {
		/// Header name.
		name: &'static str,
		/// Underlying validation failure.
		#[source]
		source: oauth2::http::header::InvalidHeaderValue,
	},
	/// HTTP request assembly failed.
	#[error(transparent)]
	Http(#[from] oauth2::http::Error),
	/// The transport rejected the request while building it.
	#[error("Transport rejected the request.")]
	Rejected {
		/// Transport-specific builder failure.
		#[source]
		source: BoxError,
	},
}
impl RequestError {
	/// Wraps a transport-specific request builder failure.
	pub fn rejected(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Rejected { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {target}.")]
	Network {
		/// Request target, without credentials.
		target: String,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred during transport.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(
		target: impl Into<String>,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Network { target: target.into(), source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_request_error_displays_raw_body() {
		let err = Error::TokenRequest { message: "{error:somefailure}".into(), status: 401 };

		assert_eq!(err.to_string(), "{error:somefailure}");
	}

	#[test]
	fn network_error_names_target() {
		let err = TransportError::network(
			"https://uaa.example.com/oauth/token",
			std::io::Error::other("connection refused"),
		);

		assert_eq!(
			err.to_string(),
			"Network error occurred while calling https://uaa.example.com/oauth/token."
		);
		assert!(err.source().is_some());
	}
}
