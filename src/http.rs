//! HTTP primitives shared by every outbound call.
//!
//! The module is layered leaves first:
//!
//! - [`TransportFactory`] hands out a fresh [`Transport`] per call and owns the TLS policy.
//! - [`send`] turns a [`RequestDescriptor`] plus a [`Method`] and optional body into one request,
//!   picks exactly one Authorization scheme, and executes it.
//! - [`HttpGateway`] wraps [`send`] in deferred [`RequestAdaptor`] values so request construction
//!   is decoupled from execution.

mod gateway;
mod request;
mod transport;

pub use gateway::*;
pub use request::*;
pub use transport::*;

pub use oauth2::http::Method;
