//! Decides which entries enter the document and how file content is treated.
//!
//! Two concerns live here: gitignore-compatible exclusion rules scoped to the
//! transcription root, and the readability classification that chooses
//! between embedding a file's text and emitting a placeholder marker.

mod gitignore;
mod text_detection;

pub use gitignore::{GitignoreRules, IgnoreMatcher, MatchNothing, RuleCache};
pub use text_detection::{is_readable, is_readable_from_buffer};
