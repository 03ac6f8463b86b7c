// src/constants.rs

/// Marker emitted in place of content for files whose sampled head is not
/// valid UTF-8 text.
pub const NON_READABLE_MARKER: &str = "[non-readable]";

/// Marker emitted when a file classified as readable fails the full read.
pub const ERROR_READING_MARKER: &str = "[error reading]";

/// Fence delimiter wrapping readable file content.
pub const CONTENT_FENCE: &str = "```";

/// Number of bytes sampled from the head of a file to classify it as text.
pub const READ_SAMPLE_SIZE: usize = 1024;

/// Name of the ignore file consulted at the transcription root.
pub const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Directory name that is always excluded when git metadata is ignored.
pub const GIT_DIR_NAME: &str = ".git";

/// Timestamp format used in the document header.
pub const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
