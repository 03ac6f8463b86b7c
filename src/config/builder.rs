//! Provides the `ConfigBuilder` for constructing `Config` instances.

use super::{Config, OutputDestination};
use crate::cli::Cli;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// A builder for creating [`Config`] instances programmatically.
///
/// Mirrors the CLI flags one-to-one; `build` validates the settings and
/// produces the immutable `Config` used by the run.
///
/// # Examples
/// ```
/// use repo_scribe::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .input_path(".")
///     .no_header(true)
///     .build()
///     .unwrap();
/// assert!(config.ignore_git_metadata);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    input_path: Option<String>,
    no_gitignore: bool,
    output_file: Option<String>,
    no_header: bool,
    repo_name: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: Some(cli.input_path),
            no_gitignore: cli.no_gitignore,
            output_file: cli.output_file,
            no_header: cli.no_header,
            repo_name: cli.repo_name,
        }
    }

    /// Sets the root directory to transcribe. Defaults to `.`.
    pub fn input_path(mut self, path: &str) -> Self {
        self.input_path = Some(path.to_string());
        self
    }

    /// Disables ignore filtering: the `.git` directory and entries matched
    /// by the root `.gitignore` are transcribed like everything else.
    pub fn no_gitignore(mut self, no_gitignore: bool) -> Self {
        self.no_gitignore = no_gitignore;
        self
    }

    /// Writes the document to `path` instead of stdout.
    pub fn output_file(mut self, path: &str) -> Self {
        self.output_file = Some(path.to_string());
        self
    }

    /// Suppresses the document header.
    pub fn no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }

    /// Overrides the repository name shown in the document header.
    pub fn repo_name(mut self, name: &str) -> Self {
        self.repo_name = Some(name.to_string());
        self
    }

    /// Validates the settings and builds the final [`Config`].
    ///
    /// # Errors
    /// Returns [`Error::Config`] for an empty input or output path. A root
    /// that does not exist is not rejected here; that is the transcriber's
    /// one fatal condition.
    pub fn build(self) -> Result<Config> {
        let input = self.input_path.unwrap_or_else(|| ".".to_string());
        if input.is_empty() {
            return Err(Error::Config("input path must not be empty".to_string()));
        }

        let output_destination = match self.output_file {
            Some(path) if path.is_empty() => {
                return Err(Error::Config("output path must not be empty".to_string()));
            }
            Some(path) => OutputDestination::File(PathBuf::from(path)),
            None => OutputDestination::Stdout,
        };

        let root = PathBuf::from(&input);
        let repo_name = self
            .repo_name
            .unwrap_or_else(|| derive_repo_name(&root));

        Ok(Config {
            root,
            ignore_git_metadata: !self.no_gitignore,
            header: !self.no_header,
            repo_name,
            source: input,
            output_destination,
        })
    }
}

/// Derives the header repository name from the root path's basename.
///
/// The path is canonicalized first so inputs like `.` resolve to a real
/// directory name. Resolution failures are not errors at this stage; the
/// path is used as-is and the missing root surfaces later as
/// `RootUnavailable`.
fn derive_repo_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert!(config.ignore_git_metadata);
        assert!(config.header);
        assert_eq!(config.output_destination, OutputDestination::Stdout);
    }

    #[test]
    fn test_empty_input_path_rejected() {
        let result = ConfigBuilder::new().input_path("").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_output_file_destination() {
        let config = ConfigBuilder::new()
            .input_path("some/dir")
            .output_file("out.md")
            .build()
            .unwrap();
        assert_eq!(
            config.output_destination,
            OutputDestination::File(PathBuf::from("out.md"))
        );
    }

    #[test]
    fn test_repo_name_defaults_to_basename() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("my-project");
        std::fs::create_dir(&root).unwrap();

        let config = ConfigBuilder::new()
            .input_path(root.to_str().unwrap())
            .build()
            .unwrap();
        assert_eq!(config.repo_name, "my-project");
    }

    #[test]
    fn test_repo_name_override() {
        let config = ConfigBuilder::new().repo_name("renamed").build().unwrap();
        assert_eq!(config.repo_name, "renamed");
    }

    #[test]
    fn test_no_gitignore_flag() {
        let config = ConfigBuilder::new().no_gitignore(true).build().unwrap();
        assert!(!config.ignore_git_metadata);
    }
}
