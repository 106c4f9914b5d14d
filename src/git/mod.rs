//! Git integration layer.
//!
//! This module wraps the actual backend implementation (`cli_backend`)
//! and re-exports only the stable public API (`repo_root`, `repo_root_in`).
//!
//! The backend shells out to the `git` executable; hiding it behind this
//! facade means a future libgit2-based backend could be swapped in without
//! affecting the rest of the codebase.

mod cli_backend;

/// Locate the top-level directory of the enclosing git repository.
///
/// These are the only public APIs exported from the `git` module.
/// Other modules should use them instead of depending directly on
/// `cli_backend`.
pub use cli_backend::{repo_root, repo_root_in};
