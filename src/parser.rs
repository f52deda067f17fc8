//! Text-format parser: turns the raw input file into a validated [`Graph`].
//!
//! Out of scope per the engine's own contract — the engine consumes an
//! already-validated in-memory graph — but implemented here since this
//! crate has no separate upstream caller to own it. `lemin-cli` is the only
//! caller; the engine library (`graph`, `pathfind`, `select`, `distribute`,
//! `simulate`) never parses text itself.

use crate::error::{EngineError, Result};
use crate::graph::{Graph, GraphBuilder};

enum Directive {
    Start,
    End,
}

/// Parses the lem-in text format described in the input-format contract:
/// an ant count, `##start`/`##end` directives each immediately followed by
/// a room declaration, plain room declarations (`name x y`), link lines
/// (`name1-name2`), and `#`-prefixed comments.
pub fn parse(text: &str) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    let mut ants: Option<usize> = None;
    let mut pending: Option<Directive> = None;
    let mut start_seen = false;
    let mut end_seen = false;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(directive) = pending.take() {
            let (name, x, y) = parse_room_line(line)?;
            builder.add_room(&name, x, y)?;
            match directive {
                Directive::Start => builder.set_start(&name)?,
                Directive::End => builder.set_end(&name)?,
            }
            continue;
        }

        if line == "##start" {
            if start_seen {
                return Err(EngineError::InvalidInput(
                    "duplicate ##start directive".into(),
                ));
            }
            start_seen = true;
            pending = Some(Directive::Start);
            continue;
        }
        if line == "##end" {
            if end_seen {
                return Err(EngineError::InvalidInput(
                    "duplicate ##end directive".into(),
                ));
            }
            end_seen = true;
            pending = Some(Directive::End);
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if ants.is_none() {
            let n: usize = line
                .parse()
                .map_err(|_| EngineError::InvalidInput(format!("expected ant count, got: {line}")))?;
            if n == 0 {
                return Err(EngineError::InvalidInput(
                    "number of ants must be positive".into(),
                ));
            }
            ants = Some(n);
            continue;
        }

        // Room declarations are whitespace-separated (`name x y`); link
        // lines are a single hyphenated token with no whitespace at all.
        if line.split_whitespace().count() > 1 {
            let (name, x, y) = parse_room_line(line)?;
            builder.add_room(&name, x, y)?;
        } else if let Some((a, b)) = line.split_once('-') {
            builder.add_link(a, b)?;
        } else {
            return Err(EngineError::InvalidInput(format!(
                "unrecognized line: {line}"
            )));
        }
    }

    if pending.is_some() {
        return Err(EngineError::InvalidInput(
            "directive not immediately followed by a room declaration".into(),
        ));
    }
    let ants = ants.ok_or_else(|| EngineError::InvalidInput("missing number of ants".into()))?;
    builder.set_ants(ants);
    builder.build()
}

fn parse_room_line(line: &str) -> Result<(String, i32, i32)> {
    let mut parts = line.split_whitespace();
    let malformed = || EngineError::InvalidInput(format!("malformed room declaration: {line}"));

    let name = parts.next().ok_or_else(malformed)?;
    let x: i32 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(malformed)?;
    let y: i32 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok((name.to_string(), x, y))
}

#[cfg(test)]
#[path = "unit_tests/parser.rs"]
mod tests;
