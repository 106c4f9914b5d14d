//! Crate entry point for **coacoa**.
//!
//! This library provides the internal implementation for the `coacoa` CLI.
//! Each submodule encapsulates one responsibility (git root discovery,
//! scaffold installation, ignore-file maintenance, helper-file writes).
//! The `pub use` re-exports make selected commands accessible directly
//! from the crate root.
//!
//! This file is primarily intended for developers hacking on `coacoa`.

mod git;
mod helpers;
mod ignore;
mod init;
mod prompt;
mod scaffold;

/// Re-export commonly used types and commands so they can be accessed from `coacoa::*`.
pub use git::{repo_root, repo_root_in};
pub use init::{InitOptions, cmd_init, run_init};
pub use prompt::{Prompter, TerminalPrompter};
pub use scaffold::{SCAFFOLD, SCAFFOLD_DIR, helper_template, install};
