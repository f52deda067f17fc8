mod cli;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use lemin::engine::{self, RunResult};
use lemin::parser;
use output::{PathReport, Report};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let shell = shell
            .or_else(clap_complete::Shell::from_env)
            .unwrap_or(clap_complete::Shell::Bash);
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "lemin", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let input_path = cli.input.expect("clap enforces input unless a subcommand is given");
    match run(&input_path, cli.output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", output::fmt_error(&message));
            ExitCode::FAILURE
        }
    }
}

fn run(input_path: &std::path::Path, report_path: Option<&std::path::Path>) -> Result<(), String> {
    let text = std::fs::read_to_string(input_path)
        .map_err(|e| format!("cannot read {}: {e}", input_path.display()))?;

    let graph = parser::parse(&text).map_err(|e| output::canonical_message(&e).to_string())?;
    let RunResult {
        turns,
        paths,
        counts,
    } = engine::run_detailed(&graph).map_err(|e| output::canonical_message(&e).to_string())?;

    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    println!();
    for turn in &turns {
        println!("{turn}");
    }

    if let Some(path) = report_path {
        let path_reports = paths
            .iter()
            .zip(counts.iter())
            .map(|(rooms, &ants)| PathReport {
                rooms: rooms.iter().map(|&r| graph.room(r).name.clone()).collect(),
                length: rooms.len() - 1,
                ants,
            })
            .collect();
        let report = Report {
            turns: turns.clone(),
            ants: graph.ants(),
            paths: path_reports,
        };
        output::write_report(path, &report).map_err(|e| e.to_string())?;
    }

    Ok(())
}
