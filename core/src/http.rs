//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and interprets `HttpResponse` values
//! without ever touching the network — the host is responsible for executing
//! the actual I/O behind the [`Transport`] trait. This separation keeps the
//! core deterministic and easy to test: the view-model tests script a fake
//! transport, the app plugs in a real one.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to
//! any host without lifetime concerns.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoApi::build_*` methods. The host executes this request
/// against the network and returns the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed
/// to `TodoApi::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Transport-level success indicator: any 2xx status.
    ///
    /// Mutation outcomes are judged by this alone; their response bodies
    /// are not inspected.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes `HttpRequest` values against the network.
///
/// The one seam between the deterministic core and the outside world.
/// `Err` means the request never produced a response (connection refused,
/// DNS failure, timeout); a non-2xx response is returned as `Ok` data and
/// left to the caller to interpret.
pub trait Transport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// A network-level failure, carrying the host's description of what went
/// wrong. The description ends up in user-facing error text verbatim.
#[derive(Debug, Clone)]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}
