use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lemin",
    about = "Route ants through an ant farm in minimal turns",
    version,
    after_help = "\
Typical workflow:
  lemin farm.txt                  # echo the farm, then the turn schedule
  lemin farm.txt -o report.json   # also save a machine-readable report
  lemin farm.txt -v               # log each pipeline stage to stderr

Enable tab completion:
  eval \"$(lemin completions)\"     # add to ~/.bashrc or ~/.zshrc"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file describing the ant farm
    #[arg(required_unless_present = "command")]
    pub input: Option<PathBuf>,

    /// Also write a JSON report of the turns, paths, and distribution
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Log each pipeline stage to stderr (or set RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print shell completions to stdout (auto-detects shell)
    #[command(after_help = "\
Setup: add one line to your shell rc file:

  # bash (~/.bashrc)
  eval \"$(lemin completions bash)\"

  # zsh (~/.zshrc)
  eval \"$(lemin completions zsh)\"

  # fish (~/.config/fish/config.fish)
  lemin completions fish | source")]
    Completions {
        /// Shell type (bash, zsh, fish, etc.). Auto-detected if omitted.
        shell: Option<clap_complete::Shell>,
    },
}
