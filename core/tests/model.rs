//! View-model behavior against a scripted transport.
//!
//! # Design
//! `ScriptedTransport` replays a fixed sequence of canned outcomes and
//! records every request it is handed, so each test pins down both the
//! resulting view state and the exact wire traffic (method order, bodies,
//! resync counts) an action produced.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use todo_client::{
    HttpMethod, HttpRequest, HttpResponse, TodoModel, Transport, TransportError, ViewState,
};

/// Shared view of the requests a `ScriptedTransport` has executed, kept by
/// the test while the model owns the transport.
#[derive(Clone, Default)]
struct RequestLog(Rc<RefCell<Vec<HttpRequest>>>);

impl RequestLog {
    fn methods(&self) -> Vec<HttpMethod> {
        self.0.borrow().iter().map(|r| r.method.clone()).collect()
    }

    fn body(&self, index: usize) -> Option<String> {
        self.0.borrow().get(index).and_then(|r| r.body.clone())
    }

    fn count(&self, method: HttpMethod) -> usize {
        self.0.borrow().iter().filter(|r| r.method == method).count()
    }
}

struct ScriptedTransport {
    script: VecDeque<Result<HttpResponse, TransportError>>,
    log: RequestLog,
}

impl ScriptedTransport {
    fn new(log: &RequestLog, script: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            script: script.into(),
            log: log.clone(),
        }
    }
}

impl Transport for ScriptedTransport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.log.0.borrow_mut().push(request.clone());
        self.script
            .pop_front()
            .expect("model issued a request beyond the scripted ones")
    }
}

fn ok(body: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status: 200,
        headers: Vec::new(),
        body: body.to_string(),
    })
}

fn server_error(body: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status: 500,
        headers: Vec::new(),
        body: body.to_string(),
    })
}

fn network_failure(description: &str) -> Result<HttpResponse, TransportError> {
    Err(TransportError::new(description))
}

fn model(
    log: &RequestLog,
    script: Vec<Result<HttpResponse, TransportError>>,
) -> TodoModel<ScriptedTransport> {
    TodoModel::new("http://server", ScriptedTransport::new(log, script))
}

const TWO_ITEMS: &str = r#"[
    {"id":1,"title":"Test Todo 1","completed":false,"created_at":"2026-08-06T12:00:00Z"},
    {"id":2,"title":"Test Todo 2","completed":true,"created_at":"2026-08-06T12:01:00Z"}
]"#;

const ONE_PENDING: &str =
    r#"[{"id":1,"title":"Test Todo","completed":false,"created_at":"2026-08-06T12:00:00Z"}]"#;

const ONE_DONE: &str =
    r#"[{"id":1,"title":"Test Todo","completed":true,"created_at":"2026-08-06T12:00:00Z"}]"#;

#[test]
fn initial_load_shows_the_returned_items_in_order() {
    let log = RequestLog::default();
    let mut model = model(&log, vec![ok(TWO_ITEMS)]);
    model.initialize();

    let titles: Vec<&str> = model.todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Test Todo 1", "Test Todo 2"]);
    assert!(!model.todos()[0].completed);
    assert!(model.todos()[1].completed);
    assert_eq!(log.methods(), [HttpMethod::Get]);
}

#[test]
fn initial_load_failure_is_surfaced() {
    let log = RequestLog::default();
    let mut model = model(&log, vec![network_failure("Network error")]);
    model.initialize();

    match model.state() {
        ViewState::Failed(description) => assert!(description.contains("Network error")),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(model.todos().is_empty());
}

#[test]
fn initial_load_failure_carries_the_http_status() {
    let log = RequestLog::default();
    let mut model = model(&log, vec![server_error("internal error")]);
    model.initialize();

    match model.state() {
        ViewState::Failed(description) => {
            assert!(description.contains("HTTP 500"), "got: {description}");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn submitting_a_draft_creates_and_resyncs() {
    let log = RequestLog::default();
    let created =
        r#"[{"id":1,"title":"New Todo","completed":false,"created_at":"2026-08-06T12:00:00Z"}]"#;
    let mut model = model(
        &log,
        vec![ok("[]"), ok(r#"{"id":1,"completed":false}"#), ok(created)],
    );
    model.initialize();
    assert!(model.todos().is_empty());

    model.set_draft("New Todo");
    model.create_todo();

    assert_eq!(model.draft(), "");
    let titles: Vec<&str> = model.todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["New Todo"]);
    assert_eq!(
        log.methods(),
        [HttpMethod::Get, HttpMethod::Post, HttpMethod::Get]
    );
    assert_eq!(log.body(1).as_deref(), Some("title=New%20Todo"));
}

#[test]
fn blank_draft_is_a_no_op() {
    let log = RequestLog::default();
    let mut model = model(&log, vec![ok(ONE_PENDING)]);
    model.initialize();

    model.set_draft("   ");
    model.create_todo();

    // No create request went out and the list is untouched.
    assert_eq!(log.methods(), [HttpMethod::Get]);
    assert_eq!(model.todos().len(), 1);
    assert_eq!(model.draft(), "   ");
}

#[test]
fn draft_is_trimmed_before_submission() {
    let log = RequestLog::default();
    let mut model = model(&log, vec![ok("[]"), ok("{}"), ok("[]")]);
    model.initialize();

    model.set_draft("  Buy milk  ");
    model.create_todo();

    assert_eq!(log.body(1).as_deref(), Some("title=Buy%20milk"));
    assert_eq!(model.draft(), "");
}

#[test]
fn create_failure_keeps_the_draft() {
    let log = RequestLog::default();
    let mut model = model(&log, vec![ok("[]"), server_error("boom")]);
    model.initialize();

    model.set_draft("New Todo");
    model.create_todo();

    // Draft retained for retry, no resync issued, list unchanged.
    assert_eq!(model.draft(), "New Todo");
    assert_eq!(log.methods(), [HttpMethod::Get, HttpMethod::Post]);
    assert!(model.todos().is_empty());
    assert!(matches!(model.state(), ViewState::Loaded(_)));
}

#[test]
fn toggle_displays_server_confirmed_state() {
    let log = RequestLog::default();
    let mut model = model(
        &log,
        vec![ok(ONE_PENDING), ok(r#"{"completed":true}"#), ok(ONE_DONE)],
    );
    model.initialize();
    assert!(!model.todos()[0].completed);

    model.toggle_todo(1);

    assert!(model.todos()[0].completed);
    assert_eq!(
        log.methods(),
        [HttpMethod::Get, HttpMethod::Put, HttpMethod::Get]
    );
    assert_eq!(log.body(1).as_deref(), Some("id=1"));
}

#[test]
fn toggle_failure_leaves_the_item_unchanged() {
    let log = RequestLog::default();
    let mut model = model(&log, vec![ok(ONE_PENDING), server_error("boom")]);
    model.initialize();

    model.toggle_todo(1);

    assert!(!model.todos()[0].completed);
    assert_eq!(log.methods(), [HttpMethod::Get, HttpMethod::Put]);
}

#[test]
fn delete_removes_the_row_after_resync() {
    let log = RequestLog::default();
    let mut model = model(&log, vec![ok(ONE_PENDING), ok("{}"), ok("[]")]);
    model.initialize();
    assert_eq!(model.todos().len(), 1);

    model.delete_todo(1);

    assert!(model.todos().is_empty());
    assert_eq!(
        log.methods(),
        [HttpMethod::Get, HttpMethod::Delete, HttpMethod::Get]
    );
    assert_eq!(log.body(1).as_deref(), Some("id=1"));
}

#[test]
fn delete_failure_keeps_the_item() {
    let log = RequestLog::default();
    let mut model = model(&log, vec![ok(ONE_PENDING), network_failure("connection reset")]);
    model.initialize();

    model.delete_todo(1);

    assert_eq!(model.todos().len(), 1);
    assert_eq!(log.methods(), [HttpMethod::Get, HttpMethod::Delete]);
}

#[test]
fn every_successful_mutation_resyncs_exactly_once() {
    let log = RequestLog::default();
    let mut model = model(
        &log,
        vec![
            ok("[]"),
            ok("{}"),          // create
            ok(ONE_PENDING),   // resync
            ok(r#"{"completed":true}"#), // toggle
            ok(ONE_DONE),      // resync
            ok("{}"),          // delete
            ok("[]"),          // resync
        ],
    );
    model.initialize();
    model.set_draft("Test Todo");
    model.create_todo();
    model.toggle_todo(1);
    model.delete_todo(1);

    // One initial load plus one resync per successful mutation.
    assert_eq!(log.count(HttpMethod::Get), 4);
    assert_eq!(
        log.methods(),
        [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Get,
            HttpMethod::Put,
            HttpMethod::Get,
            HttpMethod::Delete,
            HttpMethod::Get,
        ]
    );
}

#[test]
fn failed_resync_after_mutation_keeps_the_stale_snapshot() {
    let log = RequestLog::default();
    let mut model = model(
        &log,
        vec![
            ok(ONE_PENDING),
            ok(r#"{"completed":true}"#),
            network_failure("timed out"),
        ],
    );
    model.initialize();

    model.toggle_todo(1);

    // The toggle succeeded but the resync did not: the view stays Loaded
    // with the previous snapshot rather than flipping to Failed.
    assert!(matches!(model.state(), ViewState::Loaded(_)));
    assert_eq!(model.todos().len(), 1);
    assert!(!model.todos()[0].completed);
}

#[test]
fn resync_adopts_the_server_list_wholesale() {
    let log = RequestLog::default();
    let reordered = r#"[
        {"id":2,"title":"Test Todo 2","completed":true,"created_at":"2026-08-06T12:01:00Z"},
        {"id":3,"title":"Added elsewhere","completed":false,"created_at":"2026-08-06T12:02:00Z"}
    ]"#;
    let mut model = model(&log, vec![ok(TWO_ITEMS), ok("{}"), ok(reordered)]);
    model.initialize();

    model.delete_todo(1);

    // Whatever the server returned is the new truth, including rows this
    // client never created.
    let ids: Vec<i64> = model.todos().iter().map(|t| t.id).collect();
    assert_eq!(ids, [2, 3]);
}
