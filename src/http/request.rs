//! Request descriptors and the request builder.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use oauth2::http::{
	HeaderValue, Request,
	header::{AUTHORIZATION, CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	error::RequestError,
	http::{Transport, TransportFactory},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Content type sentinel meaning "do not send a `Content-Type` header".
pub const NO_CONTENT_TYPE: &str = "";

/// Everything needed to address and authenticate one request.
///
/// Empty strings are sentinels: an empty `content_type` omits the header, and an empty
/// `authorization` selects HTTP Basic authentication from `username`/`password`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
	/// Target URL.
	pub url: String,
	/// Basic-Auth username.
	pub username: String,
	/// Basic-Auth password.
	pub password: String,
	/// `Content-Type` header value, or [`NO_CONTENT_TYPE`].
	pub content_type: String,
	/// Verbatim `Authorization` header value overriding Basic-Auth.
	pub authorization: String,
}
impl RequestDescriptor {
	/// Creates a descriptor for `url` with empty credentials and no content type.
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into(), ..Default::default() }
	}

	/// Sets the Basic-Auth credentials.
	pub fn with_credentials(
		mut self,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		self.username = username.into();
		self.password = password.into();

		self
	}

	/// Sets the `Content-Type` header value.
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = content_type.into();

		self
	}

	/// Sets a verbatim `Authorization` header value, replacing Basic-Auth.
	pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
		self.authorization = authorization.into();

		self
	}

	/// Returns the single `Authorization` value the request will carry.
	///
	/// Basic-Auth is applied whenever no override is set, even for empty credentials.
	pub fn authorization_value(&self) -> String {
		if self.authorization.is_empty() {
			basic_auth(&self.username, &self.password)
		} else {
			self.authorization.clone()
		}
	}
}
impl Debug for RequestDescriptor {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestDescriptor")
			.field("url", &self.url)
			.field("username", &self.username)
			.field("password_set", &!self.password.is_empty())
			.field("content_type", &self.content_type)
			.field("authorization_set", &!self.authorization.is_empty())
			.finish()
	}
}

/// Encodes `username:password` as an HTTP Basic `Authorization` value.
pub fn basic_auth(username: &str, password: &str) -> String {
	format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// Builds the request for `method` without sending it.
///
/// GET requests never carry a body; for other methods an absent body is sent as empty.
pub fn build_request(
	descriptor: &RequestDescriptor,
	method: Method,
	body: Option<Vec<u8>>,
) -> Result<HttpRequest> {
	let url =
		Url::parse(&descriptor.url).map_err(|source| RequestError::InvalidUrl { source })?;
	let authorization = header_value("Authorization", descriptor.authorization_value())?;
	let body = if method == Method::GET { Vec::new() } else { body.unwrap_or_default() };
	let mut builder =
		Request::builder().method(method).uri(url.as_str()).header(AUTHORIZATION, authorization);

	if descriptor.content_type != NO_CONTENT_TYPE {
		builder =
			builder.header(CONTENT_TYPE, header_value("Content-Type", &descriptor.content_type)?);
	}

	builder.body(body).map_err(|e| RequestError::from(e).into())
}

/// Builds and executes one request over a fresh transport from `factory`.
///
/// Transport failures are returned unmodified; nothing is retried.
pub fn send<F>(
	factory: &F,
	descriptor: &RequestDescriptor,
	method: Method,
	body: Option<Vec<u8>>,
) -> Result<HttpResponse>
where
	F: ?Sized + TransportFactory,
{
	let kind = CallKind::from_method(&method);
	let _span = CallSpan::new(kind, "send").entered();

	obs::record_call_outcome(kind, CallOutcome::Attempt);

	let result = factory
		.transport()
		.and_then(|transport| transport.round_trip(build_request(descriptor, method, body)?));

	match &result {
		Ok(_) => obs::record_call_outcome(kind, CallOutcome::Success),
		Err(_) => obs::record_call_outcome(kind, CallOutcome::Failure),
	}

	result
}

fn header_value(name: &'static str, value: impl AsRef<str>) -> Result<HeaderValue> {
	HeaderValue::from_str(value.as_ref())
		.map_err(|source| RequestError::InvalidHeader { name, source }.into())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn header<'a>(request: &'a HttpRequest, name: &str) -> Vec<&'a str> {
		request
			.headers()
			.get_all(name)
			.iter()
			.map(|value| value.to_str().expect("Header should be valid UTF-8."))
			.collect()
	}

	#[test]
	fn basic_auth_applied_without_override() {
		let descriptor = RequestDescriptor::new("https://uaa.example.com/users")
			.with_credentials("admin", "s3cret");
		let request = build_request(&descriptor, Method::GET, None)
			.expect("Request should build for a valid URL.");

		assert_eq!(header(&request, "authorization"), vec![basic_auth("admin", "s3cret")]);
		assert_eq!(basic_auth("admin", "s3cret"), "Basic YWRtaW46czNjcmV0");
	}

	#[test]
	fn basic_auth_applied_for_empty_credentials() {
		let request = build_request(
			&RequestDescriptor::new("https://uaa.example.com/oauth/token"),
			Method::POST,
			None,
		)
		.expect("Request should build for a valid URL.");

		assert_eq!(header(&request, "authorization"), vec!["Basic Og=="]);
	}

	#[test]
	fn override_replaces_basic_auth() {
		let descriptor = RequestDescriptor::new("https://uaa.example.com/users")
			.with_credentials("admin", "s3cret")
			.with_authorization("Bearer abc.def");
		let request = build_request(&descriptor, Method::PUT, Some(b"{}".to_vec()))
			.expect("Request should build for a valid URL.");

		assert_eq!(header(&request, "authorization"), vec!["Bearer abc.def"]);
		assert_eq!(descriptor.authorization_value(), "Bearer abc.def");
	}

	#[test]
	fn content_type_omitted_when_empty() {
		let descriptor = RequestDescriptor::new("https://uaa.example.com/users");
		let request = build_request(&descriptor, Method::POST, Some(b"x".to_vec()))
			.expect("Request should build for a valid URL.");

		assert!(header(&request, "content-type").is_empty());

		let descriptor = descriptor.with_content_type("application/json");
		let request = build_request(&descriptor, Method::POST, Some(b"x".to_vec()))
			.expect("Request should build for a valid URL.");

		assert_eq!(header(&request, "content-type"), vec!["application/json"]);
	}

	#[test]
	fn get_drops_body() {
		let request = build_request(
			&RequestDescriptor::new("https://uaa.example.com/users"),
			Method::GET,
			Some(b"ignored".to_vec()),
		)
		.expect("Request should build for a valid URL.");

		assert!(request.body().is_empty());
		assert_eq!(*request.method(), Method::GET);
	}

	#[test]
	fn malformed_url_is_rejected() {
		let err = build_request(&RequestDescriptor::new("not a url"), Method::GET, None)
			.expect_err("Relative garbage should not parse.");

		assert!(matches!(err, Error::Request(RequestError::InvalidUrl { .. })));
	}

	#[test]
	fn invalid_url_error_hides_userinfo() {
		let descriptor = RequestDescriptor::new("https://admin:s3cret@[bad/users");
		let err = build_request(&descriptor, Method::GET, None)
			.expect_err("An unterminated IPv6 host should not parse.");

		assert!(matches!(err, Error::Request(RequestError::InvalidUrl { .. })));
		assert!(!err.to_string().contains("s3cret"));
		assert!(!format!("{err:?}").contains("s3cret"));
	}

	#[test]
	fn invalid_header_is_rejected() {
		let descriptor = RequestDescriptor::new("https://uaa.example.com/users")
			.with_authorization("Bearer line\nbreak");
		let err = build_request(&descriptor, Method::GET, None)
			.expect_err("Control characters are not valid header values.");

		assert!(matches!(
			err,
			Error::Request(RequestError::InvalidHeader { name: "Authorization", .. })
		));
	}

	#[test]
	fn debug_redacts_secrets() {
		let descriptor = RequestDescriptor::new("https://uaa.example.com/users")
			.with_credentials("admin", "s3cret")
			.with_authorization("Bearer abc");
		let rendered = format!("{descriptor:?}");

		assert!(!rendered.contains("s3cret"));
		assert!(!rendered.contains("abc"));
	}
}
