//! Defines the core `Config` struct and related types for application
//! configuration.
//!
//! This module consolidates the settings parsed and validated from the CLI,
//! making them available to the rest of the application in a structured and
//! type-safe manner.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// Specifies where the final document should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file.
    File(PathBuf),
}

/// Validated settings for one transcription run.
///
/// Construct via [`ConfigBuilder`]; the fields are immutable for the
/// duration of the run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory to transcribe.
    pub root: PathBuf,
    /// Whether to skip the `.git` directory and apply the root `.gitignore`.
    pub ignore_git_metadata: bool,
    /// Whether to prepend the document header (repository name, source,
    /// transcription date).
    pub header: bool,
    /// Repository name shown in the header. Defaults to the root's basename.
    pub repo_name: String,
    /// Source label shown in the header, normally the input path as given.
    pub source: String,
    /// Where the finished document is written.
    pub output_destination: OutputDestination,
}
