//! Client core for the todo web app.
//!
//! # Overview
//! Implements the client side of a remote todo collection: a view model
//! that mirrors server state, submits mutations (create, toggle, delete)
//! and re-fetches the full list after each successful one. The core never
//! touches the network itself (host-does-IO pattern): it builds
//! `HttpRequest` values and interprets `HttpResponse` values, with the
//! actual round-trip delegated to a [`Transport`] implementation supplied
//! by the host.
//!
//! # Design
//! - `TodoApi` is stateless — it holds only `base_url` and does the
//!   build/parse work for each operation.
//! - `TodoModel` owns all mutable state: the display state machine
//!   (loading, loaded, failed) and the draft text for a new item.
//! - Mutations are followed by exactly one resync fetch; the local list is
//!   only ever replaced wholesale with what the server returned.
//! - Types use owned `String` / `Vec` fields so hosts can move values
//!   around freely.

pub mod api;
pub mod error;
pub mod http;
pub mod model;
pub mod types;

pub use api::TodoApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use model::{TodoModel, ViewState};
pub use types::Todo;
