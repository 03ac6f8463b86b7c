//! `repo-scribe` is a library and command-line tool that transcribes a
//! directory tree (typically a freshly cloned source repository) into a
//! single, structured Markdown document.
//!
//! The core is a pure, synchronous function of "directory tree + ignore
//! rules" to "text document": every directory becomes a `## <path>/`
//! heading, every file a labeled fenced block with its contents, with
//! exclusion rules equivalent to the root `.gitignore` applied during the
//! descent. Files that do not decode as UTF-8 text are recorded with a
//! `[non-readable]` marker; per-file and per-subdirectory failures are
//! absorbed into the document so a run over a partially inaccessible tree
//! still yields a complete best-effort transcription.
//!
//! # Example: Library Usage
//!
//! ```
//! use repo_scribe::transcribe;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Set up a directory with a file and an ignore rule.
//! let temp = tempdir()?;
//! fs::write(temp.path().join(".gitignore"), "*.log")?;
//! fs::write(temp.path().join("notes.txt"), "remember the milk")?;
//! fs::write(temp.path().join("debug.log"), "noise")?;
//!
//! // 2. Transcribe it. The second argument enables ignore filtering.
//! let document = transcribe(temp.path(), true)?;
//!
//! // 3. The .log file is excluded; the text file is embedded verbatim.
//! assert!(document.contains("/notes.txt: \n```\nremember the milk\n```"));
//! assert!(!document.contains("debug.log"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod transcriber;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, OutputDestination};
pub use errors::{Error, Result};
pub use transcriber::transcribe;

use chrono::Utc;

/// Executes a complete run: transcribe, then write the document (with its
/// optional header) to the configured destination.
///
/// This is the entry point the binary uses; it mirrors command-line
/// execution. To capture the document as a string in memory, call
/// [`transcribe`] directly, as shown in the crate-level example.
///
/// # Errors
/// Returns [`Error::RootUnavailable`] if the configured root cannot be
/// listed at all, and [`Error::Output`] if the destination cannot be
/// written. Everything else is recorded inside the document itself.
pub fn run(config: &Config) -> Result<()> {
    let document = transcribe(&config.root, config.ignore_git_metadata)?;

    let mut writer = output::writer::setup_output_writer(config)?;
    let write_result = (|| {
        if config.header {
            output::header::write_document_header(
                &mut *writer,
                &config.repo_name,
                &config.source,
                Utc::now(),
            )?;
        }
        writer.write_all(document.as_bytes())?;
        writer.flush()
    })();

    write_result.map_err(|e| Error::Output {
        path: output::writer::destination_label(config),
        source: e,
    })
}
