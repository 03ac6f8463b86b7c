//! Sets up the output writer based on the configured destination.

use crate::config::{Config, OutputDestination};
use crate::errors::{Error, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Creates the writer for the configured destination (stdout or a file).
///
/// File output is buffered; creation failures are reported as
/// [`Error::Output`] with the destination path attached.
pub fn setup_output_writer(config: &Config) -> Result<Box<dyn Write>> {
    match &config.output_destination {
        OutputDestination::Stdout => {
            debug!("Writing output to stdout");
            Ok(Box::new(io::stdout()))
        }
        OutputDestination::File(path) => {
            debug!("Writing output to file: {}", path.display());
            let file = File::create(path).map_err(|e| Error::Output {
                path: path.display().to_string(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Human-readable label for the configured destination, used in error
/// reports.
pub fn destination_label(config: &Config) -> String {
    match &config.output_destination {
        OutputDestination::Stdout => "stdout".to_string(),
        OutputDestination::File(path) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigBuilder;
    use tempfile::tempdir;

    #[test]
    fn test_file_writer_creates_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let out_path = temp.path().join("out.md");
        let config = ConfigBuilder::new()
            .input_path(".")
            .output_file(out_path.to_str().unwrap())
            .build()?;

        let mut writer = setup_output_writer(&config)?;
        writer.write_all(b"content")?;
        writer.flush()?;
        drop(writer);

        assert_eq!(std::fs::read_to_string(&out_path)?, "content");
        assert_eq!(destination_label(&config), out_path.display().to_string());
        Ok(())
    }

    #[test]
    fn test_unwritable_file_destination_errors() {
        let config = ConfigBuilder::new()
            .output_file("missing/parent/dir/out.md")
            .build()
            .unwrap();
        let result = setup_output_writer(&config);
        assert!(matches!(result, Err(Error::Output { .. })));
    }

    #[test]
    fn test_stdout_label() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(destination_label(&config), "stdout");
    }
}
