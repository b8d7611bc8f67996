//! Domain types for the todo API.
//!
//! # Design
//! `Todo` mirrors the server's schema: a serial integer id, a title, the
//! completion flag, and a server-assigned creation timestamp serialized as
//! RFC 3339. The type is defined independently from the mock-server crate;
//! integration tests catch schema drift. The local collection is a plain
//! `Vec<Todo>` that is only ever replaced wholesale with whatever the
//! server last returned — the client never patches it in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item as returned by the API.
///
/// Every field except `completed` is immutable once assigned by the server,
/// and even `completed` only changes here by re-fetching the list after a
/// toggle request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
