use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::prompt::Prompter;
use crate::scaffold::SCAFFOLD_DIR;

/// The line kept out of version control: the scaffold directory pattern.
pub const IGNORE_ENTRY: &str = ".coacoa/";

/// Ensure `<root>/.gitignore` contains the scaffold ignore entry.
///
/// - Missing file: created containing exactly the entry plus a trailing
///   newline, and the creation is reported.
/// - Entry already present: silent no-op, no prompt.
/// - Entry absent: the user is asked (default yes) before the line is
///   appended; a declined prompt leaves the file byte-identical and
///   prints nothing.
///
/// Presence is an exact line match, not pattern-aware. An entry spelled
/// differently (`.coacoa`, `/.coacoa/`) is not recognized, so the prompt
/// would fire again; the append still leaves at most one `.coacoa/` line
/// written by this tool.
///
/// # Errors
/// Read or write failures propagate with the `.gitignore` path attached.
pub fn ensure_entry(root: &Path, prompter: &dyn Prompter) -> Result<()> {
    let path = root.join(".gitignore");
    if !path.exists() {
        fs::write(&path, format!("{IGNORE_ENTRY}\n"))
            .with_context(|| format!("failed to create {}", path.display()))?;
        println!("{} Created .gitignore", "✓".green());
        return Ok(());
    }

    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if text.lines().any(|line| line == IGNORE_ENTRY) {
        return Ok(());
    }

    let question = format!("Append {SCAFFOLD_DIR}/ to .gitignore?");
    if !prompter.confirm(&question, true)? {
        return Ok(());
    }

    let mut updated = text;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(IGNORE_ENTRY);
    updated.push('\n');
    fs::write(&path, updated)
        .with_context(|| format!("failed to update {}", path.display()))?;
    println!("{} Updated .gitignore", "✓".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::{AlwaysPrompter, NoPromptExpected};
    use tempfile::tempdir;

    #[test]
    fn creates_file_with_single_entry_line() {
        let td = tempdir().unwrap();
        ensure_entry(td.path(), &NoPromptExpected).unwrap();
        let text = fs::read_to_string(td.path().join(".gitignore")).unwrap();
        assert_eq!(text, ".coacoa/\n");
    }

    #[test]
    fn present_entry_means_no_prompt_and_no_change() {
        let td = tempdir().unwrap();
        let path = td.path().join(".gitignore");
        fs::write(&path, "target/\n.coacoa/\n*.log\n").unwrap();
        // NoPromptExpected panics if a confirmation is requested
        ensure_entry(td.path(), &NoPromptExpected).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "target/\n.coacoa/\n*.log\n");
    }

    #[test]
    fn appends_entry_when_confirmed() {
        let td = tempdir().unwrap();
        let path = td.path().join(".gitignore");
        fs::write(&path, "target/\n").unwrap();
        ensure_entry(td.path(), &AlwaysPrompter(true)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "target/\n.coacoa/\n");
    }

    #[test]
    fn declined_prompt_leaves_file_byte_identical() {
        let td = tempdir().unwrap();
        let path = td.path().join(".gitignore");
        fs::write(&path, "target/").unwrap();
        ensure_entry(td.path(), &AlwaysPrompter(false)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "target/");
    }

    #[test]
    fn missing_trailing_newline_gains_separator() {
        let td = tempdir().unwrap();
        let path = td.path().join(".gitignore");
        fs::write(&path, "target/").unwrap();
        ensure_entry(td.path(), &AlwaysPrompter(true)).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "target/\n.coacoa/\n");
        assert_eq!(text.lines().filter(|l| *l == ".coacoa/").count(), 1);
    }

    #[test]
    fn rerun_after_append_is_silent() {
        let td = tempdir().unwrap();
        let path = td.path().join(".gitignore");
        fs::write(&path, "target/\n").unwrap();
        ensure_entry(td.path(), &AlwaysPrompter(true)).unwrap();
        let once = fs::read_to_string(&path).unwrap();
        ensure_entry(td.path(), &NoPromptExpected).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), once);
    }
}
