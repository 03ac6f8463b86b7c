// src/output/header.rs

use crate::constants::HEADER_TIMESTAMP_FORMAT;
use chrono::{DateTime, Utc};
use std::io::Write;

/// Writes the document header: repository name, source label, and the
/// transcription date, followed by a blank line separating it from the
/// first heading or file block.
///
/// The timestamp is passed in rather than sampled here so callers (and
/// tests) control it; the CLI passes `Utc::now()`.
pub fn write_document_header(
    writer: &mut dyn Write,
    repo_name: &str,
    source: &str,
    timestamp: DateTime<Utc>,
) -> std::io::Result<()> {
    writeln!(writer, "# Repository: {}", repo_name)?;
    writeln!(writer, "Source: {}", source)?;
    writeln!(
        writer,
        "Transcription Date: {}",
        timestamp.format(HEADER_TIMESTAMP_FORMAT)
    )?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Cursor;

    #[test]
    fn test_header_format() -> std::io::Result<()> {
        let mut writer = Cursor::new(Vec::new());
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 17, 10, 30, 0).unwrap();
        write_document_header(&mut writer, "my-repo", "/tmp/my-repo", timestamp)?;

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "# Repository: my-repo\n\
             Source: /tmp/my-repo\n\
             Transcription Date: 2024-05-17 10:30:00 UTC\n\n"
        );
        Ok(())
    }
}
