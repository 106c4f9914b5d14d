use anyhow::{Result, bail};
use colored::Colorize;
use std::path::Path;

use crate::git::repo_root;
use crate::prompt::{Prompter, TerminalPrompter};
use crate::{helpers, ignore, scaffold};

/// Which optional IDE helper files `init` should produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Generate `CLAUDE.md` at the repository root.
    pub claude_code: bool,
    /// Generate `.clinerules` at the repository root.
    pub cline: bool,
}

/// Scaffold CoaCoA into the current git repository.
///
/// High-level flow:
/// 1. Locate the repository root via `git rev-parse --show-toplevel`;
///    not being inside a repository is fatal (exit 1, nothing written).
/// 2. Replace-copy the bundled scaffold tree to `<root>/.coacoa`.
/// 3. Ensure `.coacoa/` is listed in `<root>/.gitignore`.
/// 4. Write the helper files requested by `opts`.
///
/// Declined confirmations along the way are not errors; the remaining
/// steps still run and the command exits 0.
pub fn cmd_init(opts: InitOptions) -> Result<()> {
    let Some(root) = repo_root() else {
        bail!("run inside a git repository");
    };
    run_init(&root, opts, &TerminalPrompter)
}

/// The body of `init` against an explicit root and prompter.
///
/// Split out from [`cmd_init`] so tests can drive the full sequence
/// inside a tempdir with scripted answers, without a live checkout or a
/// terminal.
pub fn run_init(root: &Path, opts: InitOptions, prompter: &dyn Prompter) -> Result<()> {
    println!("Project root: {}", root.display());

    scaffold::install(root)?;
    println!("{} Copied .coacoa scaffold", "✓".green());

    ignore::ensure_entry(root, prompter)?;

    if opts.claude_code {
        helpers::write_helper(root, "CLAUDE.md", "claude.md", prompter)?;
    }
    if opts.cline {
        helpers::write_helper(root, ".clinerules", "clinerules", prompter)?;
    }

    println!("{}", "Init complete ✔".green());
    Ok(())
}
