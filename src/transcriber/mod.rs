//! Depth-first traversal producing the transcription document.
//!
//! The traversal is synchronous and single-threaded: directories are listed
//! fully, sorted, and visited in lexicographic order so the document is
//! byte-for-byte deterministic for a fixed tree and fixed ignore rules.
//! Per-file and per-subdirectory failures are absorbed into the document as
//! inline markers; only an unusable root is reported as an error.

mod file_block;

use crate::constants::GIT_DIR_NAME;
use crate::errors::{root_unavailable, Result};
use crate::filtering::{IgnoreMatcher, MatchNothing, RuleCache};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only state shared across the recursive descent.
///
/// The ignore rules are resolved once, before the first directory is
/// visited, and passed by reference to every nested call. Nothing in the
/// descent mutates shared state.
struct WalkContext<'a> {
    /// Root of the transcription; relative paths for ignore matching are
    /// computed against this.
    root: &'a Path,
    /// Compiled exclusion rules (or a matcher that excludes nothing when
    /// filtering is disabled).
    rules: &'a dyn IgnoreMatcher,
    /// Whether `.git` directories are skipped and ignore rules applied.
    ignore_git_metadata: bool,
}

/// Transcribes the directory tree rooted at `root` into a single document.
///
/// Every directory becomes a `## <display>/` heading and every file a
/// labeled block holding its content in a fence, or a `[non-readable]` /
/// `[error reading]` marker. Entries at each level appear in lexicographic
/// order regardless of type. When `ignore_git_metadata` is true, the `.git`
/// directory is skipped and the root `.gitignore` (if any) filters entries.
///
/// # Errors
/// Returns [`Error::RootUnavailable`](crate::Error::RootUnavailable) only
/// when `root` does not exist, is not a directory, or its top-level listing
/// is denied. Any other filesystem problem is downgraded to an inline marker
/// inside the document.
///
/// # Examples
/// ```
/// use repo_scribe::transcribe;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("hello.txt"), "hi")?;
///
/// let document = transcribe(temp.path(), true)?;
/// assert_eq!(document, "\n/hello.txt: \n```\nhi\n```\n\n");
/// # Ok(())
/// # }
/// ```
pub fn transcribe(root: impl AsRef<Path>, ignore_git_metadata: bool) -> Result<String> {
    let root = root.as_ref();

    // The top-level listing is the one fatal check; it must succeed before
    // any output is produced.
    let top_children = list_children(root).map_err(|e| root_unavailable(e, root))?;
    debug!(
        "Transcribing '{}' ({} top-level entries, ignore_git_metadata={})",
        root.display(),
        top_children.len(),
        ignore_git_metadata
    );

    let mut cache = RuleCache::new();
    let match_nothing = MatchNothing;
    let rules: &dyn IgnoreMatcher = if ignore_git_metadata {
        cache.rules_for(root)
    } else {
        &match_nothing
    };

    let ctx = WalkContext {
        root,
        rules,
        ignore_git_metadata,
    };

    let mut document = String::new();
    walk_children(&ctx, top_children, "", &mut document);
    Ok(document)
}

/// Lists `dir` fully and returns its entries sorted by file name.
///
/// Individual entries that cannot be read are skipped with a warning; only a
/// failure to open the directory itself is returned to the caller.
fn list_children(dir: &Path) -> std::io::Result<Vec<fs::DirEntry>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => children.push(entry),
            Err(e) => warn!("Skipping unreadable entry under '{}': {}", dir.display(), e),
        }
    }
    children.sort_by_key(|entry| entry.file_name());
    Ok(children)
}

/// Visits one directory level in sorted order, appending to the document.
fn walk_children(
    ctx: &WalkContext<'_>,
    children: Vec<fs::DirEntry>,
    display_prefix: &str,
    document: &mut String,
) {
    for entry in children {
        let name = entry.file_name();
        if ctx.ignore_git_metadata && name == GIT_DIR_NAME {
            debug!("Skipping git metadata directory under '{}'", display_prefix);
            continue;
        }

        let path = entry.path();
        // Follows symlinks, so a symlinked directory is descended into.
        let is_dir = path.is_dir();

        let relative_path = path.strip_prefix(ctx.root).map(Path::to_path_buf).unwrap_or_else(|e| {
            // Entries are enumerated under the root, so stripping should not
            // fail; match on the bare name if it somehow does.
            warn!(
                "Failed to strip prefix '{}' from '{}': {}. Matching against the entry name.",
                ctx.root.display(),
                path.display(),
                e
            );
            PathBuf::from(&name)
        });
        if ctx.rules.matches(&relative_path, is_dir) {
            debug!("Excluded '{}' by ignore rules", relative_path.display());
            continue;
        }

        let display_path = format!("{}/{}", display_prefix, name.to_string_lossy());
        if is_dir {
            document.push_str(&format!("\n## {}/\n\n", display_path));
            walk_dir(ctx, &path, &display_path, document);
        } else {
            file_block::append_file_block(document, &path, &display_path);
        }
    }
}

/// Recurses into a nested directory.
///
/// A listing failure here is not fatal: it is recorded as a single inline
/// line and the traversal continues with the siblings already enumerated at
/// the parent level.
fn walk_dir(ctx: &WalkContext<'_>, dir: &Path, display_prefix: &str, document: &mut String) {
    match list_children(dir) {
        Ok(children) => walk_children(ctx, children, display_prefix, document),
        Err(e) => {
            warn!("Cannot list '{}': {}", dir.display(), e);
            document.push_str(&format!("Error listing {}\n", dir.display()));
        }
    }
}
