//! Text rendering of the view state.
//!
//! Pure functions from `(ViewState, draft)` to terminal lines; no I/O here
//! so the full surface is unit-testable.

use chrono::Local;
use colored::Colorize;
use todo_client::{Todo, ViewState};

pub const DRAFT_PLACEHOLDER: &str = "enter new TODO";

pub fn render(state: &ViewState, draft: &str) -> String {
    match state {
        ViewState::Loading => "Loading...".to_string(),
        ViewState::Failed(description) => format!("Error: {description}"),
        ViewState::Loaded(todos) => render_list(todos, draft),
    }
}

fn render_list(todos: &[Todo], draft: &str) -> String {
    let mut lines = Vec::with_capacity(todos.len() + 1);
    if draft.is_empty() {
        lines.push(format!("> {}", DRAFT_PLACEHOLDER.dimmed()));
    } else {
        lines.push(format!("> {draft}"));
    }
    if todos.is_empty() {
        lines.push("(no todos)".to_string());
    }
    for todo in todos {
        lines.push(render_row(todo));
    }
    lines.join("\n")
}

fn render_row(todo: &Todo) -> String {
    let checkbox = if todo.completed { "[x]" } else { "[ ]" };
    let title = if todo.completed {
        todo.title.as_str().strikethrough().to_string()
    } else {
        todo.title.clone()
    };
    // The control label names the state the server last confirmed, so a
    // pending item offers "complete" and a done item offers "incomplete".
    let action = if todo.completed { "incomplete" } else { "complete" };
    let stamp = todo
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");
    format!("{:>4} {checkbox} {title}  {stamp}  [{action}] [delete]", todo.id)
}
