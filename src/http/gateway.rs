//! Deferred request adaptors and the gateway facade that produces them.

// self
use crate::{
	_prelude::*,
	http::{RequestDescriptor, TransportFactory, send},
};
#[cfg(feature = "reqwest")] use crate::http::{ReqwestTransportFactory, TransportConfig};

type AdaptorFn = dyn Fn() -> Result<HttpResponse> + Send + Sync;

#[cfg(feature = "reqwest")]
/// Gateway specialized for the crate's default reqwest transport stack.
pub type ReqwestGateway = DefaultHttpGateway<ReqwestTransportFactory>;

/// A not-yet-executed HTTP call.
///
/// Nothing touches the network until [`invoke`](RequestAdaptor::invoke) runs, and every
/// invocation performs a new, independent call; results are never memoized.
pub struct RequestAdaptor(Box<AdaptorFn>);
impl RequestAdaptor {
	/// Wraps a closure as an adaptor. Test doubles use this to return canned responses.
	pub fn new<F>(call: F) -> Self
	where
		F: 'static + Fn() -> Result<HttpResponse> + Send + Sync,
	{
		Self(Box::new(call))
	}

	/// Performs the call.
	pub fn invoke(&self) -> Result<HttpResponse> {
		(self.0)()
	}
}
impl Debug for RequestAdaptor {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("RequestAdaptor(..)")
	}
}

/// Facade exposing GET/POST/PUT as deferred [`RequestAdaptor`] values.
///
/// Callers depend on the trait so alternative gateways (recorders, canned responders) can be
/// injected without touching call sites.
pub trait HttpGateway
where
	Self: 'static + Send + Sync,
{
	/// Prepares a GET request.
	fn get(&self, descriptor: RequestDescriptor) -> RequestAdaptor;

	/// Prepares a POST request carrying `body`.
	fn post(&self, descriptor: RequestDescriptor, body: Vec<u8>) -> RequestAdaptor;

	/// Prepares a PUT request carrying `body`.
	fn put(&self, descriptor: RequestDescriptor, body: Vec<u8>) -> RequestAdaptor;
}

/// Gateway that delegates every adaptor to [`send`] over an injected [`TransportFactory`].
pub struct DefaultHttpGateway<F>
where
	F: ?Sized + TransportFactory,
{
	/// Factory consulted once per invocation.
	pub factory: Arc<F>,
}
impl<F> DefaultHttpGateway<F>
where
	F: ?Sized + TransportFactory,
{
	/// Creates a gateway over `factory`.
	pub fn new(factory: impl Into<Arc<F>>) -> Self {
		Self { factory: factory.into() }
	}

	fn adaptor(
		&self,
		descriptor: RequestDescriptor,
		method: Method,
		body: Option<Vec<u8>>,
	) -> RequestAdaptor {
		let factory = Arc::clone(&self.factory);

		RequestAdaptor::new(move || {
			send(factory.as_ref(), &descriptor, method.clone(), body.clone())
		})
	}
}
#[cfg(feature = "reqwest")]
impl DefaultHttpGateway<ReqwestTransportFactory> {
	/// Gateway over a reqwest transport with the provided settings.
	pub fn with_config(config: TransportConfig) -> Self {
		Self::new(ReqwestTransportFactory::new(config))
	}

	/// Gateway that skips TLS certificate and hostname verification.
	pub fn insecure() -> Self {
		Self::with_config(TransportConfig::insecure())
	}
}
#[cfg(feature = "reqwest")]
impl Default for DefaultHttpGateway<ReqwestTransportFactory> {
	fn default() -> Self {
		Self::with_config(TransportConfig::default())
	}
}
impl<F> Clone for DefaultHttpGateway<F>
where
	F: ?Sized + TransportFactory,
{
	fn clone(&self) -> Self {
		Self { factory: Arc::clone(&self.factory) }
	}
}
impl<F> Debug for DefaultHttpGateway<F>
where
	F: ?Sized + TransportFactory,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("DefaultHttpGateway(..)")
	}
}
impl<F> HttpGateway for DefaultHttpGateway<F>
where
	F: ?Sized + TransportFactory,
{
	fn get(&self, descriptor: RequestDescriptor) -> RequestAdaptor {
		self.adaptor(descriptor, Method::GET, None)
	}

	fn post(&self, descriptor: RequestDescriptor, body: Vec<u8>) -> RequestAdaptor {
		self.adaptor(descriptor, Method::POST, Some(body))
	}

	fn put(&self, descriptor: RequestDescriptor, body: Vec<u8>) -> RequestAdaptor {
		self.adaptor(descriptor, Method::PUT, Some(body))
	}
}
