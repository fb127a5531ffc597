//! Minimal blocking HTTP gateway and UAA token fetcher. GET/POST/PUT calls are prepared as
//! deferred adaptors over a transport with an explicit TLS policy, and tokens are obtained with
//! the OAuth 2.0 password or client-credentials grant.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod http;
pub mod obs;
pub mod uaa;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		http::{DefaultHttpGateway, ReqwestGateway, ReqwestTransportFactory, TransportConfig},
		uaa::TokenFetcher,
	};

	/// Builds a reqwest transport factory that accepts the self-signed certificates produced by
	/// `httpmock` during tests and never waits longer than a few seconds.
	pub fn test_transport_factory() -> ReqwestTransportFactory {
		ReqwestTransportFactory::new(
			TransportConfig::insecure().with_timeout(std::time::Duration::from_secs(5)),
		)
	}

	/// Builds the default gateway over [`test_transport_factory`].
	pub fn test_gateway() -> ReqwestGateway {
		DefaultHttpGateway::new(test_transport_factory())
	}

	/// Constructs a [`TokenFetcher`] backed by [`test_gateway`].
	pub fn build_test_fetcher() -> TokenFetcher<ReqwestGateway> {
		TokenFetcher::new(test_gateway())
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
		time::Duration,
	};

	pub use oauth2::{HttpRequest, HttpResponse, http::Method};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Error as ReqwestError, blocking::Client as ReqwestClient};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2::{self, http as http_types};
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
