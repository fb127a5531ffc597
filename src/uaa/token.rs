//! Token endpoint responses and the redacting secret wrapper.

// self
use crate::_prelude::*;

/// Token string issued by UAA.
///
/// `Debug` and `Display` print `<redacted>`; serde reads and writes the bare string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps `value`.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Borrows the raw token, e.g. to build a `Bearer` header.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Unwraps the raw token.
	pub fn into_inner(self) -> String {
		self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Successful token endpoint payload.
///
/// Only `access_token` is required; UAA also returns refresh, type, and JWT-ID fields that are
/// kept when present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Issued access token.
	pub access_token: TokenSecret,
	/// Refresh token, when the grant issues one.
	#[serde(default)]
	pub refresh_token: Option<TokenSecret>,
	/// Token type, typically `bearer`.
	#[serde(default)]
	pub token_type: Option<String>,
	/// JWT identifier of the access token.
	#[serde(default)]
	pub jti: Option<String>,
	/// Lifetime in seconds.
	#[serde(default)]
	pub expires_in: Option<u64>,
	/// Space-delimited granted scopes.
	#[serde(default)]
	pub scope: Option<String>,
}

/// Interprets a token endpoint response.
///
/// Non-success statuses surface the raw body verbatim as [`Error::TokenRequest`], even when it
/// looks like JSON. Success bodies must parse as a [`TokenResponse`].
pub fn decode_token_response(response: HttpResponse) -> Result<TokenResponse> {
	let status = response.status();
	let body = response.into_body();

	if !status.is_success() {
		return Err(Error::TokenRequest {
			message: String::from_utf8_lossy(&body).into_owned(),
			status: status.as_u16(),
		});
	}

	let mut deserializer = serde_json::Deserializer::from_slice(&body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::TokenParse { source, status: status.as_u16() })
}
