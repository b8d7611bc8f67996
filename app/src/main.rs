//! Terminal host for the todo client.
//!
//! Wires the sans-io core to real I/O: a ureq transport for the network
//! and a line-oriented command loop for the user. Free text edits the
//! draft (the "input field"); `add` submits it.

mod render;
mod transport;

use std::io::{self, BufRead};

use todo_client::TodoModel;
use tracing_subscriber::EnvFilter;

use crate::render::render;
use crate::transport::UreqTransport;

const HELP: &str = "\
commands:
  <text>        type into the draft for a new todo
  add           submit the draft
  toggle <id>   flip an item's completion state
  delete <id>   remove an item
  list          redraw the list
  quit          exit";

/// One line of user input, parsed.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    Redraw,
    Submit,
    Toggle(i64),
    Delete(i64),
    Draft(&'a str),
    Malformed(&'static str),
}

fn parse_command(input: &str) -> Command<'_> {
    match input {
        "quit" | "exit" => Command::Quit,
        "help" => Command::Help,
        "list" => Command::Redraw,
        "add" => Command::Submit,
        _ => {
            if let Some(rest) = input.strip_prefix("toggle ") {
                match rest.trim().parse() {
                    Ok(id) => Command::Toggle(id),
                    Err(_) => Command::Malformed("usage: toggle <id>"),
                }
            } else if let Some(rest) = input.strip_prefix("delete ") {
                match rest.trim().parse() {
                    Ok(id) => Command::Delete(id),
                    Err(_) => Command::Malformed("usage: delete <id>"),
                }
            } else {
                Command::Draft(input)
            }
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let mut model = TodoModel::new(&base_url, UreqTransport::new());

    println!("{}", render(model.state(), model.draft()));
    model.initialize();
    println!("{}", render(model.state(), model.draft()));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match parse_command(input) {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Malformed(usage) => {
                println!("{usage}");
                continue;
            }
            Command::Redraw => {}
            Command::Submit => model.create_todo(),
            Command::Toggle(id) => model.toggle_todo(id),
            Command::Delete(id) => model.delete_todo(id),
            Command::Draft(text) => model.set_draft(text),
        }
        println!("{}", render(model.state(), model.draft()));
    }
    Ok(())
}
