//! Line-oriented interactive session.
//!
//! Each input line is one user action. The screen is re-rendered after every
//! action that changes state.

use std::io::Write;

use anyhow::Context;
use localeats_core::{GroundedAnswerSource, DEFAULT_FILTER, FILTER_CHIPS};
use localeats_locator::LocationProvider;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::controller::Controller;
use crate::render::render;

pub const HELP: &str = "\
Commands:
  locate           refresh your location
  filter <chip>    pick a filter chip by name or number (does not search)
  query <text>     set the search text (does not search)
  find             search with the current query
  <text>           set the search text and search
  help             show this help
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Locate,
    Filter(String),
    Query(String),
    Find,
    Search(String),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Parses one input line.
#[must_use]
pub fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    if line.is_empty() {
        return SessionCommand::Empty;
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head.to_ascii_lowercase().as_str() {
        "locate" if rest.is_empty() => SessionCommand::Locate,
        "find" if rest.is_empty() => SessionCommand::Find,
        "help" | "?" if rest.is_empty() => SessionCommand::Help,
        "quit" | "exit" if rest.is_empty() => SessionCommand::Quit,
        "filter" => match resolve_filter(rest) {
            Some(label) => SessionCommand::Filter(label.to_owned()),
            None => SessionCommand::Invalid(format!(
                "unknown filter '{rest}'; choose one of: {}",
                FILTER_CHIPS.join(", ")
            )),
        },
        "query" => SessionCommand::Query(rest.to_owned()),
        _ => SessionCommand::Search(line.to_owned()),
    }
}

/// Matches a chip by case-insensitive name or 1-based position.
#[must_use]
pub fn resolve_filter(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(DEFAULT_FILTER) {
        return Some(DEFAULT_FILTER);
    }
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| FILTER_CHIPS.get(i)).copied();
    }
    FILTER_CHIPS
        .iter()
        .find(|chip| chip.eq_ignore_ascii_case(input))
        .copied()
}

/// Drives `controller` from `input` until EOF or `quit`, writing frames to
/// `output`. Locates once on start.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run_session<L, S, R, W>(
    controller: &mut Controller<L, S>,
    input: R,
    output: &mut W,
) -> anyhow::Result<()>
where
    L: LocationProvider,
    S: GroundedAnswerSource + Sync,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    controller.locate().await;
    writeln!(output, "{}\n{HELP}\n", render(controller.state()))?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };

        match parse_command(&line) {
            SessionCommand::Empty => continue,
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            SessionCommand::Invalid(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
            SessionCommand::Locate => controller.locate().await,
            SessionCommand::Filter(label) => controller.select_filter(label),
            SessionCommand::Query(text) => controller.set_query(text),
            SessionCommand::Find => controller.submit().await,
            SessionCommand::Search(text) => {
                controller.set_query(text);
                controller.submit().await;
            }
        }

        writeln!(output, "{}", render(controller.state()))?;
    }

    Ok(())
}
