use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Return the top-level directory of the repository enclosing the current
/// working directory, or `None` when not inside one.
///
/// Equivalent to `repo_root_in(".")`; see [`repo_root_in`] for the failure
/// semantics.
pub fn repo_root() -> Option<PathBuf> {
    repo_root_in(Path::new("."))
}

/// Return the top-level directory of the repository enclosing `dir`.
///
/// Runs `git rev-parse --show-toplevel` with `dir` as the working
/// directory and stderr discarded. Every failure mode collapses to
/// `None`: a missing `git` executable, a non-zero exit (not a
/// repository), undecodable output, or an empty answer. Callers cannot
/// and should not distinguish them.
///
/// # Notes
/// - The returned path is whatever git prints, which is absolute.
/// - No side effects beyond the subprocess invocation.
pub fn repo_root_in(dir: &Path) -> Option<PathBuf> {
    let out = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let top = text.trim();
    if top.is_empty() {
        None
    } else {
        Some(PathBuf::from(top))
    }
}
