//! UAA token acquisition.
//!
//! [`TokenFetcher`] posts a form-encoded [`GrantRequest`] to `<base>/oauth/token` through any
//! [`HttpGateway`] and interprets the answer. Each call is exactly one round trip: no retries,
//! no polling, no caching.
//!
//! Client credentials travel in the form body only. The token request still carries the
//! default Basic-Auth header derived from empty descriptor credentials.

mod grant;
mod token;

pub use grant::*;
pub use token::*;

// self
use crate::{
	_prelude::*,
	http::{HttpGateway, RequestDescriptor},
	obs::{self, CallKind, CallOutcome, CallSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestGateway;

/// Path appended to the endpoint base to reach the token endpoint.
pub const TOKEN_PATH: &str = "/oauth/token";
/// Content type of every token request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Resolves the token endpoint for an endpoint base such as `https://host/uaa`.
pub fn token_endpoint(endpoint_base: &str) -> String {
	format!("{}{TOKEN_PATH}", endpoint_base.trim_end_matches('/'))
}

/// Fetches tokens through an injected [`HttpGateway`].
pub struct TokenFetcher<G>
where
	G: ?Sized + HttpGateway,
{
	/// Gateway whose POST adaptor carries every token request.
	pub gateway: Arc<G>,
}
impl<G> TokenFetcher<G>
where
	G: ?Sized + HttpGateway,
{
	/// Creates a fetcher over `gateway`.
	pub fn new(gateway: impl Into<Arc<G>>) -> Self {
		Self { gateway: gateway.into() }
	}

	/// Requests a token and returns the full decoded response.
	pub fn fetch(&self, endpoint_base: &str, grant: &GrantRequest) -> Result<TokenResponse> {
		const KIND: CallKind = CallKind::Token;

		let span = CallSpan::new(KIND, "fetch");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.in_scope(|| {
			let descriptor = RequestDescriptor::new(token_endpoint(endpoint_base))
				.with_content_type(FORM_CONTENT_TYPE);
			let response = self.gateway.post(descriptor, grant.to_form().into_bytes()).invoke()?;

			decode_token_response(response)
		});

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Requests a token and returns only the access token.
	pub fn get_token(&self, endpoint_base: &str, grant: &GrantRequest) -> Result<String> {
		self.fetch(endpoint_base, grant).map(|response| response.access_token.into_inner())
	}
}
impl<G> Clone for TokenFetcher<G>
where
	G: ?Sized + HttpGateway,
{
	fn clone(&self) -> Self {
		Self { gateway: Arc::clone(&self.gateway) }
	}
}
impl<G> Debug for TokenFetcher<G>
where
	G: ?Sized + HttpGateway,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("TokenFetcher(..)")
	}
}
#[cfg(feature = "reqwest")]
impl Default for TokenFetcher<ReqwestGateway> {
	fn default() -> Self {
		Self::new(ReqwestGateway::default())
	}
}

/// Fetches an access token from `<endpoint_base>/oauth/token`.
///
/// All six form fields are always sent; pass empty strings for the ones `grant_type` does not
/// use. The transport skips TLS certificate and hostname verification; build a [`TokenFetcher`]
/// over [`ReqwestGateway::default`] to verify certificates.
#[cfg(feature = "reqwest")]
pub fn get_token(
	endpoint_base: &str,
	username: &str,
	password: &str,
	client_id: &str,
	client_secret: &str,
	grant_type: &str,
) -> Result<String> {
	let grant = GrantRequest::new(grant_type)
		.with_user_credentials(username, password)
		.with_client_credentials(client_id, client_secret);

	TokenFetcher::<ReqwestGateway>::new(ReqwestGateway::insecure()).get_token(endpoint_base, &grant)
}
