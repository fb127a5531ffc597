//! Transport construction and the TLS verification policy.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::redirect::Policy;
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::{ConfigError, RequestError, TransportError};

/// Executes one fully built request and returns the buffered response.
pub trait Transport {
	/// Sends `request` and reads the whole response body.
	fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Produces the [`Transport`] used for a single request.
///
/// Factories are injected by constructor so tests can swap the network out without touching
/// call sites. A new transport is requested for every call; implementations must not rely on
/// the caller pooling or reusing them.
pub trait TransportFactory
where
	Self: 'static + Send + Sync,
{
	/// Concrete transport handed to the request builder.
	type Transport: Transport;

	/// Builds a transport configured according to the factory's policy.
	fn transport(&self) -> Result<Self::Transport>;
}

/// Transport settings, explicit per factory instead of process-wide.
///
/// Additional fields may be added in future releases, so construct values through
/// [`TransportConfig::default`] or [`TransportConfig::insecure`] plus the `with_*` helpers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
	/// Verify the server certificate chain and hostname.
	///
	/// Turning this off exposes every request to man-in-the-middle interception; it exists for
	/// closed environments where the identity endpoint uses self-signed or internally issued
	/// certificates.
	pub verify_tls: bool,
	/// Deadline for the whole round trip.
	pub timeout: Option<Duration>,
	/// Deadline for establishing the connection.
	pub connect_timeout: Option<Duration>,
}
impl TransportConfig {
	/// Configuration that skips certificate-chain and hostname verification.
	pub fn insecure() -> Self {
		Self { verify_tls: false, ..Self::default() }
	}

	/// Overrides the TLS verification flag.
	pub fn with_verify_tls(mut self, verify: bool) -> Self {
		self.verify_tls = verify;

		self
	}

	/// Bounds the whole round trip.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Bounds connection establishment.
	pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
		self.connect_timeout = Some(timeout);

		self
	}
}
impl Default for TransportConfig {
	fn default() -> Self {
		Self { verify_tls: true, timeout: None, connect_timeout: None }
	}
}

/// Factory that builds a blocking reqwest client per call.
///
/// Redirects are never followed: one call is exactly one round trip, and token endpoints answer
/// directly instead of delegating to another URI.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportFactory {
	/// Settings applied to every client this factory builds.
	pub config: TransportConfig,
}
#[cfg(feature = "reqwest")]
impl ReqwestTransportFactory {
	/// Creates a factory for the provided settings.
	pub fn new(config: TransportConfig) -> Self {
		Self { config }
	}

	/// Factory that skips TLS verification; see [`TransportConfig::insecure`].
	pub fn insecure() -> Self {
		Self::new(TransportConfig::insecure())
	}

	fn build_client(&self) -> Result<ReqwestClient> {
		let mut builder = ReqwestClient::builder()
			.redirect(Policy::none())
			.timeout(self.config.timeout)
			.danger_accept_invalid_certs(!self.config.verify_tls)
			.danger_accept_invalid_hostnames(!self.config.verify_tls);

		if let Some(timeout) = self.config.connect_timeout {
			builder = builder.connect_timeout(timeout);
		}

		builder.build().map_err(|e| ConfigError::http_client_build(e).into())
	}
}
#[cfg(feature = "reqwest")]
impl TransportFactory for ReqwestTransportFactory {
	type Transport = ReqwestTransport;

	fn transport(&self) -> Result<Self::Transport> {
		self.build_client().map(ReqwestTransport)
	}
}

/// Thin wrapper around a blocking [`ReqwestClient`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
	fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse> {
		let (parts, body) = request.into_parts();
		let target = redacted_target(&parts.uri);
		let mut builder = self.0.request(parts.method, parts.uri.to_string()).headers(parts.headers);

		if !body.is_empty() {
			builder = builder.body(body);
		}

		let request = builder.build().map_err(RequestError::rejected)?;
		let response = self.0.execute(request).map_err(|e| map_reqwest_error(&target, e))?;
		let status = response.status();
		let headers = response.headers().to_owned();
		let mut response_new =
			HttpResponse::new(response.bytes().map_err(|e| map_reqwest_error(&target, e))?.to_vec());

		*response_new.status_mut() = status;
		*response_new.headers_mut() = headers;

		Ok(response_new)
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(target: &str, err: ReqwestError) -> Error {
	if err.is_builder() {
		return RequestError::rejected(err).into();
	}

	TransportError::network(target, err).into()
}

#[cfg(feature = "reqwest")]
fn redacted_target(uri: &oauth2::http::Uri) -> String {
	match (uri.scheme_str(), uri.host()) {
		(Some(scheme), Some(host)) => match uri.port_u16() {
			Some(port) => format!("{scheme}://{host}:{port}{}", uri.path()),
			None => format!("{scheme}://{host}{}", uri.path()),
		},
		_ => uri.path().to_owned(),
	}
}
