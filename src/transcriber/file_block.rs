// src/transcriber/file_block.rs

use crate::constants::{CONTENT_FENCE, ERROR_READING_MARKER, NON_READABLE_MARKER};
use crate::filtering::is_readable;
use log::warn;
use std::fs;
use std::path::Path;

/// Appends one file's labeled block to the document.
///
/// The file is first classified by its sampled head. Readable files are
/// embedded verbatim inside a fenced block, decoded with lossy UTF-8
/// substitution so invalid bytes beyond the sampled head never abort the
/// run. Non-readable files get the `[non-readable]` marker; a full read that
/// fails after a successful classification gets `[error reading]`.
pub(super) fn append_file_block(document: &mut String, path: &Path, display_path: &str) {
    document.push('\n');
    document.push_str(display_path);
    document.push_str(": ");

    if is_readable(path) {
        match fs::read(path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                document.push('\n');
                document.push_str(CONTENT_FENCE);
                document.push('\n');
                document.push_str(&content);
                document.push('\n');
                document.push_str(CONTENT_FENCE);
                document.push('\n');
            }
            Err(e) => {
                warn!("Failed to read '{}': {}", path.display(), e);
                document.push_str(ERROR_READING_MARKER);
                document.push('\n');
            }
        }
    } else {
        document.push_str(NON_READABLE_MARKER);
        document.push('\n');
    }

    document.push('\n');
}
