use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::prompt::Prompter;
use crate::scaffold::helper_template;

/// Create or append an IDE helper file at the repository root from a
/// bundled template.
///
/// `filename` is the destination name at the root (e.g. `CLAUDE.md`);
/// `template_name` is the bundle key under `ide_helpers/` (e.g.
/// `claude.md`).
///
/// - Destination absent: the template is written verbatim and the
///   creation reported.
/// - Destination present: the user is asked (default yes) before a
///   newline separator plus the full template is appended to the end.
///   A declined prompt reports `Skipped <file>` and leaves the file
///   byte-identical.
///
/// Appends are not deduplicated: confirming on every rerun grows the
/// file by one template copy each time. Declining on reruns is the
/// intended way to keep the file stable.
///
/// # Errors
/// - The template name not existing in the bundle is a fatal error; it
///   means the binary's asset table and its callers disagree.
/// - Filesystem failures propagate with the destination path attached.
pub fn write_helper(
    root: &Path,
    filename: &str,
    template_name: &str,
    prompter: &dyn Prompter,
) -> Result<()> {
    let template = helper_template(template_name)
        .with_context(|| format!("no bundled helper template named {template_name}"))?;
    let dst = root.join(filename);

    if !dst.exists() {
        fs::write(&dst, template)
            .with_context(|| format!("failed to create {}", dst.display()))?;
        println!("{} Created {filename}", "✓".green());
        return Ok(());
    }

    let question = format!("{filename} exists. Append CoaCoA commands?");
    if !prompter.confirm(&question, true)? {
        println!("Skipped {filename}");
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(&dst)
        .with_context(|| format!("failed to open {}", dst.display()))?;
    file.write_all(b"\n")
        .and_then(|()| file.write_all(template.as_bytes()))
        .with_context(|| format!("failed to append to {}", dst.display()))?;
    println!("{} Appended {filename}", "✓".green());
    Ok(())
}
