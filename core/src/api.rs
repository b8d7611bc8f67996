//! Stateless request builder and response parser for the todo API.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! the host executes the round-trip in between.
//!
//! Wire contract: everything goes through a single `/api/todos` route. The
//! list is plain GET returning a JSON array. Mutations send
//! `application/x-www-form-urlencoded` bodies (`title=<text>` for create,
//! `id=<decimal>` for toggle and delete) and only their status codes are
//! interpreted — response bodies of mutations are discarded.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Todo;

/// Escape set for form values. Matches the JS `encodeURIComponent` set the
/// server's form parser was written against: everything but alphanumerics
/// and `- _ . ! ~ * ' ( )` is percent-encoded.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Stateless builder/parser for the todo collection resource.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, title: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: form_headers(),
            body: Some(format!("title={}", utf8_percent_encode(title, FORM_VALUE))),
        }
    }

    pub fn build_toggle(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            path: self.collection_url(),
            headers: form_headers(),
            body: Some(format!("id={id}")),
        }
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.collection_url(),
            headers: form_headers(),
            body: Some(format!("id={id}")),
        }
    }

    /// Interpret a list response: requires 2xx, then deserializes the
    /// ordered JSON array. Ordering is the server's and is preserved.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Json(e.to_string()))
    }

    /// A create either succeeded (2xx) or it did not; the created item is
    /// picked up by the follow-up list fetch, not from this body.
    pub fn parse_create(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    pub fn parse_toggle(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

fn form_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())]
}

fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
