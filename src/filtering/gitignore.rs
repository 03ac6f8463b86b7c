//! Gitignore-compatible exclusion rules scoped to a transcription root.
//!
//! Rules are parsed once from the `.gitignore` file at the root (nested
//! ignore files are deliberately not consulted) and compiled with the
//! `ignore` crate, which provides full gitignore semantics: `*` and `**`
//! globs, trailing-slash directory-only patterns, `!` negation, anchored vs.
//! unanchored patterns, and later-pattern precedence.
//!
//! Loading never fails. A missing, unreadable, or malformed ignore file
//! degrades to an empty rule set so a transcription run is never aborted by
//! its ignore configuration.

use crate::constants::GITIGNORE_FILE_NAME;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Decides whether a root-relative path is excluded from the transcription.
///
/// The single-method seam keeps the glob compilation swappable and testable
/// independent of the traversal that consults it.
pub trait IgnoreMatcher {
    /// Returns `true` if the entry at `relative_path` should be excluded.
    ///
    /// `relative_path` is relative to the transcription root; `is_dir`
    /// selects directory matching (a trailing-slash pattern like `target/`
    /// only matches when `is_dir` is true).
    fn matches(&self, relative_path: &Path, is_dir: bool) -> bool;
}

/// An [`IgnoreMatcher`] that excludes nothing, used when ignore filtering is
/// disabled for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchNothing;

impl IgnoreMatcher for MatchNothing {
    fn matches(&self, _relative_path: &Path, _is_dir: bool) -> bool {
        false
    }
}

/// An ordered collection of gitignore patterns compiled for one root.
pub struct GitignoreRules {
    compiled: Gitignore,
}

impl GitignoreRules {
    /// Creates a rule set that matches nothing.
    pub fn empty() -> Self {
        Self {
            compiled: Gitignore::empty(),
        }
    }

    /// Loads and compiles the `.gitignore` at `root`, if present.
    ///
    /// Non-blank, non-comment lines are compiled in order. Individually
    /// unparseable lines are skipped with a warning; an unreadable file or a
    /// failed compilation degrades to an empty rule set. This function never
    /// returns an error.
    pub fn load(root: &Path) -> Self {
        let gitignore_path = root.join(GITIGNORE_FILE_NAME);
        let contents = match fs::read_to_string(&gitignore_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No .gitignore at '{}'", root.display());
                return Self::empty();
            }
            Err(e) => {
                warn!(
                    "Could not read '{}', ignoring it: {}",
                    gitignore_path.display(),
                    e
                );
                return Self::empty();
            }
        };

        let mut builder = GitignoreBuilder::new(root);
        for line in contents.lines() {
            let pattern = line.trim();
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }
            if let Err(e) = builder.add_line(None, pattern) {
                warn!("Skipping invalid .gitignore pattern '{}': {}", pattern, e);
            }
        }

        match builder.build() {
            Ok(compiled) => {
                info!(
                    "Loaded .gitignore from '{}' ({} patterns)",
                    gitignore_path.display(),
                    compiled.len()
                );
                Self { compiled }
            }
            Err(e) => {
                warn!(
                    "Could not compile '{}', ignoring it: {}",
                    gitignore_path.display(),
                    e
                );
                Self::empty()
            }
        }
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.compiled.len() as usize
    }

    /// Returns `true` if no patterns were compiled.
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

impl IgnoreMatcher for GitignoreRules {
    fn matches(&self, relative_path: &Path, is_dir: bool) -> bool {
        // Whitelist matches (negation patterns) report as not ignored here,
        // which is exactly the re-inclusion behavior gitignore specifies.
        self.compiled.matched(relative_path, is_dir).is_ignore()
    }
}

/// Lazily populated mapping from root path to compiled rules.
///
/// Owned by a single transcription run; each distinct root is loaded at most
/// once, so repeated lookups during the recursive descent cost nothing after
/// the first.
#[derive(Default)]
pub struct RuleCache {
    rules: HashMap<PathBuf, GitignoreRules>,
}

impl RuleCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rules for `root`, loading and compiling them on first use.
    pub fn rules_for(&mut self, root: &Path) -> &GitignoreRules {
        self.rules
            .entry(root.to_path_buf())
            .or_insert_with(|| GitignoreRules::load(root))
    }
}
