use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory the scaffold is installed into, relative to the
/// repository root.
pub const SCAFFOLD_DIR: &str = ".coacoa";

/// One file of the bundled scaffold tree.
///
/// `path` is relative to the scaffold root and always uses `/` separators;
/// it is joined onto the destination with [`Path::join`], so it renders
/// correctly on every platform.
pub struct TemplateFile {
    pub path: &'static str,
    pub contents: &'static str,
}

/// The scaffold tree shipped inside the binary.
///
/// Files under `assets/scaffold/` are embedded at compile time with
/// [`include_str!`]; this table is the single source of truth for the
/// shape of the installed tree. The installer never inspects the contents.
pub const SCAFFOLD: &[TemplateFile] = &[
    TemplateFile {
        path: "coacoa.yaml",
        contents: include_str!("../assets/scaffold/coacoa.yaml"),
    },
    TemplateFile {
        path: "instructions/analyst.md",
        contents: include_str!("../assets/scaffold/instructions/analyst.md"),
    },
    TemplateFile {
        path: "instructions/architect.md",
        contents: include_str!("../assets/scaffold/instructions/architect.md"),
    },
    TemplateFile {
        path: "instructions/dev.md",
        contents: include_str!("../assets/scaffold/instructions/dev.md"),
    },
    TemplateFile {
        path: "instructions/qa.md",
        contents: include_str!("../assets/scaffold/instructions/qa.md"),
    },
    TemplateFile {
        path: "workflows/greenfield.md",
        contents: include_str!("../assets/scaffold/workflows/greenfield.md"),
    },
    TemplateFile {
        path: "workflows/brownfield.md",
        contents: include_str!("../assets/scaffold/workflows/brownfield.md"),
    },
    TemplateFile {
        path: "ide_helpers/claude.md",
        contents: include_str!("../assets/scaffold/ide_helpers/claude.md"),
    },
    TemplateFile {
        path: "ide_helpers/clinerules",
        contents: include_str!("../assets/scaffold/ide_helpers/clinerules"),
    },
];

/// Look up a bundled IDE helper template by logical name.
///
/// Helper templates live in the `ide_helpers/` subtree of the bundle and
/// are addressed by bare name, e.g. `"claude.md"` or `"clinerules"`.
/// Returns `None` for unknown names.
pub fn helper_template(name: &str) -> Option<&'static str> {
    let key = format!("ide_helpers/{name}");
    SCAFFOLD.iter().find(|f| f.path == key).map(|f| f.contents)
}

/// Install the bundled scaffold tree at `<root>/.coacoa`, replacing any
/// prior copy wholesale.
///
/// The scaffold directory is tool-owned: whatever exists at the
/// destination (directory, plain file, or symlink) is removed first, then
/// every bundle entry is written out. After success the destination's
/// relative file set and bytes match the bundle exactly.
///
/// # Errors
/// Filesystem errors (permissions, disk full) propagate with the failing
/// path attached. No partial-copy recovery is attempted; an interrupted
/// install can leave a partial tree behind, which the next run replaces.
pub fn install(root: &Path) -> Result<PathBuf> {
    let dst = root.join(SCAFFOLD_DIR);
    remove_existing(&dst)?;
    for file in SCAFFOLD {
        let target = dst.join(file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&target, file.contents)
            .with_context(|| format!("failed to write {}", target.display()))?;
    }
    Ok(dst)
}

/// Remove whatever currently occupies the scaffold path.
///
/// Uses `symlink_metadata` so a symlink at the destination is unlinked
/// rather than followed.
fn remove_existing(dst: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(dst) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to stat {}", dst.display()));
        }
    };
    if meta.is_dir() {
        fs::remove_dir_all(dst)
            .with_context(|| format!("failed to remove {}", dst.display()))?;
    } else {
        fs::remove_file(dst)
            .with_context(|| format!("failed to remove {}", dst.display()))?;
    }
    Ok(())
}
