//! Grant parameters posted to the token endpoint.

// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::_prelude::*;

/// `response_type` value sent with every grant.
pub const RESPONSE_TYPE: &str = "token";

/// OAuth 2.0 grant types used against UAA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Resource owner password grant; `username`/`password` are meaningful.
	Password,
	/// Client Credentials grant; `client_id`/`client_secret` are meaningful.
	ClientCredentials,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::Password => "password",
			GrantType::ClientCredentials => "client_credentials",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<GrantType> for String {
	fn from(grant: GrantType) -> Self {
		grant.as_str().to_owned()
	}
}

/// Form parameters for one token request.
///
/// The wire format always carries all six keys in a fixed order; fields that do not apply to
/// the grant type travel as empty strings. Callers pick the meaningful subset.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GrantRequest {
	/// `grant_type` value, e.g. `password` or `client_credentials`.
	pub grant_type: String,
	/// Resource owner username.
	pub username: String,
	/// Resource owner password.
	pub password: String,
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: String,
}
impl GrantRequest {
	/// Creates a request for `grant_type` with every credential empty.
	pub fn new(grant_type: impl Into<String>) -> Self {
		Self { grant_type: grant_type.into(), ..Default::default() }
	}

	/// Password grant on behalf of `username`, issued to `client_id` without a secret.
	pub fn password(
		username: impl Into<String>,
		password: impl Into<String>,
		client_id: impl Into<String>,
	) -> Self {
		Self::new(GrantType::Password)
			.with_user_credentials(username, password)
			.with_client_credentials(client_id, "")
	}

	/// Client Credentials grant for `client_id`.
	pub fn client_credentials(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		Self::new(GrantType::ClientCredentials).with_client_credentials(client_id, client_secret)
	}

	/// Sets the resource owner credentials.
	pub fn with_user_credentials(
		mut self,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		self.username = username.into();
		self.password = password.into();

		self
	}

	/// Sets the client credentials.
	pub fn with_client_credentials(
		mut self,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		self.client_id = client_id.into();
		self.client_secret = client_secret.into();

		self
	}

	/// Key/value pairs in wire order.
	pub fn pairs(&self) -> [(&'static str, &str); 6] {
		[
			("grant_type", self.grant_type.as_str()),
			("response_type", RESPONSE_TYPE),
			("username", self.username.as_str()),
			("password", self.password.as_str()),
			("client_id", self.client_id.as_str()),
			("client_secret", self.client_secret.as_str()),
		]
	}

	/// Encodes the request as an `application/x-www-form-urlencoded` body.
	pub fn to_form(&self) -> String {
		Serializer::new(String::new()).extend_pairs(self.pairs()).finish()
	}
}
impl Debug for GrantRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GrantRequest")
			.field("grant_type", &self.grant_type)
			.field("username", &self.username)
			.field("password_set", &!self.password.is_empty())
			.field("client_id", &self.client_id)
			.field("client_secret_set", &!self.client_secret.is_empty())
			.finish()
	}
}
