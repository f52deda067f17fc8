use anyhow::Context;
use lemin::EngineError;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::Path;

/// Whether colored output should be used (TTY + not NO_COLOR).
pub fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Maps an [`EngineError`] to the exact canonical message the CLI contract
/// (spec §7) requires, discarding any variant payload — the inner detail
/// string on `InvalidInput` and the turn count on `InternalBound` are for
/// `tracing`/`Display` consumers, never for this stderr line.
pub fn canonical_message(err: &EngineError) -> &'static str {
    match err {
        EngineError::InvalidInput(_) => "invalid data format",
        EngineError::Unreachable => "no valid paths found",
        EngineError::InternalBound(_) => "internal",
    }
}

/// Formats an `ERROR: ...` line (red when color is enabled), the exact
/// prefix the engine's CLI contract requires on stderr.
pub fn fmt_error(message: &str) -> String {
    let line = format!("ERROR: {message}");
    if use_color() {
        format!("{}", line.red())
    } else {
        line
    }
}

/// The optional machine-readable report written with `-o`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub turns: Vec<String>,
    pub ants: usize,
    pub paths: Vec<PathReport>,
}

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub rooms: Vec<String>,
    pub length: usize,
    pub ants: usize,
}

pub fn write_report(path: &Path, report: &Report) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
