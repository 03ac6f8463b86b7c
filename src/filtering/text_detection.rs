// src/filtering/text_detection.rs

use crate::constants::READ_SAMPLE_SIZE;
use std::{fs::File, io::Read, path::Path, str};

/// Checks whether a byte buffer sampled from the head of a file decodes as
/// UTF-8 text.
///
/// A decode error at the very end of the buffer (an incomplete multi-byte
/// sequence cut off by the sampling boundary) still counts as text: the full
/// read performed later decodes the whole file and is not affected by the
/// truncation.
///
/// # Examples
/// ```
/// use repo_scribe::filtering::is_readable_from_buffer;
///
/// assert!(is_readable_from_buffer(b"This is valid UTF-8 text."));
///
/// // NUL bytes are unusual but still valid UTF-8.
/// assert!(is_readable_from_buffer(b"text with a \0 byte"));
///
/// let invalid_utf8 = &[0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f]; // "Hell\x80o"
/// assert!(!is_readable_from_buffer(invalid_utf8));
/// ```
pub fn is_readable_from_buffer(buffer_slice: &[u8]) -> bool {
    match str::from_utf8(buffer_slice) {
        Ok(_) => true,
        // error_len() == None means the trailing bytes form the start of a
        // valid sequence that was truncated by the sample boundary.
        Err(e) => e.error_len().is_none(),
    }
}

/// Checks whether a file should be embedded as text by sampling its head.
///
/// Reads the first 1024 bytes and classifies via
/// [`is_readable_from_buffer`]. This is a heuristic, not a guarantee: bytes
/// beyond the sample may still fail to decode, which the transcriber handles
/// with lossy substitution during the full read.
///
/// Never fails: any I/O problem (missing file, permission denied, broken
/// symlink) classifies the file as non-readable.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use repo_scribe::filtering::is_readable;
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// let temp = tempdir()?;
/// let text_file = temp.path().join("text.txt");
/// let binary_file = temp.path().join("binary.bin");
///
/// fs::write(&text_file, "Hello, world!")?;
/// assert!(is_readable(&text_file));
///
/// fs::write(&binary_file, [0xFF, 0xFE, 0x00, 0x01])?;
/// assert!(!is_readable(&binary_file));
/// # Ok(())
/// # }
/// ```
pub fn is_readable(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("Classifying '{}' as non-readable: {}", path.display(), e);
            return false;
        }
    };
    let mut buffer = [0; READ_SAMPLE_SIZE];
    let bytes_read = match file.read(&mut buffer) {
        Ok(n) => n,
        Err(e) => {
            log::debug!("Classifying '{}' as non-readable: {}", path.display(), e);
            return false;
        }
    };

    is_readable_from_buffer(&buffer[..bytes_read])
}
