//! # coacoa
//!
//! **coacoa** scaffolds CoaCoA configuration into an existing git
//! repository.
//!
//! Features:
//! - `coacoa init` installs the bundled template tree at `<root>/.coacoa`
//! - ensures `.coacoa/` is listed in the root `.gitignore`
//! - `--claude-code` generates/extends `CLAUDE.md` at the repo root
//! - `--cline` generates/extends `.clinerules` at the repo root
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use anyhow::Result;
use clap::{Parser, Subcommand};
use coacoa::{InitOptions, cmd_init};

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "coacoa",
    version,
    about = "CoaCoA CLI - scaffold CoaCoA into a git repository",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Cmd {
    /// Scaffold CoaCoA into the current git repository
    Init {
        /// Generate CLAUDE.md at repo root
        #[arg(long)]
        claude_code: bool,
        /// Generate .clinerules at repo root
        #[arg(long)]
        cline: bool,
    },
}

/// CLI entry point.
///
/// Parses arguments with `clap` and executes the selected subcommand.
/// A returned error prints as `Error: <msg>` and exits with status 1,
/// which is how the fatal not-inside-a-repository case surfaces.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap();

    match cmd {
        Cmd::Init { claude_code, cline } => cmd_init(InitOptions { claude_code, cline }),
    }
}
