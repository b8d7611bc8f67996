//! View model for the todo list.
//!
//! # Design
//! `TodoModel` owns the local snapshot of the collection, the draft text
//! for a new item, and the transport it performs calls through. Local state
//! is only ever a verbatim copy of the server's last-returned list: every
//! successful mutation is followed by exactly one full re-fetch, and no
//! optimistic patching happens in between. Divergence from server truth is
//! therefore impossible at the cost of one extra round trip per action —
//! fine for a single-user interactive tool.
//!
//! Failure policy follows the original product behavior: only the very
//! first load surfaces an error to the user. Mutation failures (and failed
//! re-fetches after a mutation) are logged and swallowed; the last good
//! snapshot stays on screen and the draft is kept so nothing typed is lost.

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::Todo;

/// Observable display state of the view.
///
/// `Loading` until the first fetch resolves, then either `Loaded` (possibly
/// with an empty list) or `Failed` with the failure's description. `Failed`
/// is terminal for the session — nothing triggers another fetch once the
/// initial one has failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded(Vec<Todo>),
    Failed(String),
}

/// Mediates between user intent and the remote todo collection.
pub struct TodoModel<T: Transport> {
    api: TodoApi,
    transport: T,
    state: ViewState,
    draft: String,
}

impl<T: Transport> TodoModel<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            api: TodoApi::new(base_url),
            transport,
            state: ViewState::Loading,
            draft: String::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The current snapshot, empty unless the view is `Loaded`.
    pub fn todos(&self) -> &[Todo] {
        match &self.state {
            ViewState::Loaded(todos) => todos,
            _ => &[],
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Run once when the view comes up: performs the initial load.
    pub fn initialize(&mut self) {
        self.fetch_all();
    }

    /// Re-fetch the full collection and adopt it wholesale.
    ///
    /// A failure here is only surfaced while still `Loading`; once a list
    /// has been shown, a failed refresh keeps the stale snapshot.
    pub fn fetch_all(&mut self) {
        let request = self.api.build_list();
        let result = self
            .execute(&request)
            .and_then(|response| self.api.parse_list(response));
        match result {
            Ok(todos) => self.state = ViewState::Loaded(todos),
            Err(err) if matches!(self.state, ViewState::Loading) => {
                self.state = ViewState::Failed(err.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "list refresh failed, keeping stale snapshot");
            }
        }
    }

    /// Submit the draft as a new todo.
    ///
    /// A draft that is empty after trimming is a no-op: no request goes
    /// out. On success the draft is cleared and the list re-fetched; on
    /// failure the draft stays put for another attempt.
    pub fn create_todo(&mut self) {
        let title = self.draft.trim().to_string();
        if title.is_empty() {
            return;
        }
        let request = self.api.build_create(&title);
        let result = self
            .execute(&request)
            .and_then(|response| self.api.parse_create(response));
        match result {
            Ok(()) => {
                self.draft.clear();
                self.fetch_all();
            }
            Err(err) => tracing::warn!(error = %err, title = %title, "failed to add todo"),
        }
    }

    /// Ask the server to flip an item's completion flag, then re-fetch.
    ///
    /// The displayed flag afterwards is whatever the server returned from
    /// the re-fetch, never a locally flipped boolean.
    pub fn toggle_todo(&mut self, id: i64) {
        let request = self.api.build_toggle(id);
        let result = self
            .execute(&request)
            .and_then(|response| self.api.parse_toggle(response));
        match result {
            Ok(()) => self.fetch_all(),
            Err(err) => tracing::warn!(error = %err, id, "failed to toggle todo"),
        }
    }

    /// Delete an item, then re-fetch. On failure the item stays listed.
    pub fn delete_todo(&mut self, id: i64) {
        let request = self.api.build_delete(id);
        let result = self
            .execute(&request)
            .and_then(|response| self.api.parse_delete(response));
        match result {
            Ok(()) => self.fetch_all(),
            Err(err) => tracing::warn!(error = %err, id, "failed to delete todo"),
        }
    }

    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request).map_err(ApiError::from)
    }
}
