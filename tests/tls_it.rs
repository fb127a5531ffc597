// crates.io
use httpmock::prelude::*;
// self
use uaa_gateway::{
	_preludet::*,
	error::TransportError,
	http::{DefaultHttpGateway, HttpGateway, ReqwestGateway, RequestDescriptor, TransportConfig},
	uaa::{self, GrantRequest, TokenFetcher},
};

/// httpmock serves TLS on the same port with a self-signed certificate.
fn https_url(server: &MockServer, path: &str) -> String {
	server.url(path).replacen("http://", "https://", 1)
}

fn token_mock<'a>(server: &'a MockServer, token: &str) -> httpmock::Mock<'a> {
	let body = format!("{{\"access_token\":\"{token}\",\"token_type\":\"bearer\"}}");

	server.mock(|when, then| {
		when.method(POST).path("/uaa/oauth/token");
		then.status(200).header("content-type", "application/json").body(&body);
	})
}

#[test]
fn get_token_accepts_self_signed_certificate() {
	let server = MockServer::start();
	let mock = token_mock(&server, "tls-ok");
	let token = uaa::get_token(
		&https_url(&server, "/uaa"),
		"fakeuser",
		"fakepass",
		"opsman",
		"",
		"password",
	)
	.expect("Insecure transport should accept the mock server's self-signed certificate.");

	assert_eq!(token, "tls-ok");

	mock.assert();
}

#[test]
fn insecure_gateway_reaches_tls_endpoint() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path("/v2/info");
		then.status(200).body("info");
	});
	let response = test_gateway()
		.get(RequestDescriptor::new(https_url(&server, "/v2/info")))
		.invoke()
		.expect("Insecure gateway should complete the TLS handshake.");

	assert_eq!(response.body().as_slice(), b"info");

	mock.assert();
}

#[test]
fn verifying_gateway_rejects_self_signed_certificate() {
	let server = MockServer::start();
	let mock = token_mock(&server, "never-issued");
	let gateway: ReqwestGateway = DefaultHttpGateway::with_config(
		TransportConfig::default().with_timeout(Duration::from_secs(5)),
	);
	let fetcher: TokenFetcher<ReqwestGateway> = TokenFetcher::new(gateway);
	let err = fetcher
		.get_token(
			&https_url(&server, "/uaa"),
			&GrantRequest::client_credentials("client456", "clientsecret"),
		)
		.expect_err("Verifying transport must reject an unknown issuer.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));

	mock.assert_calls(0);
}
