// src/cli.rs

use clap::Parser;

/// Transcribes a directory tree into a single structured Markdown document.
///
/// repo-scribe recursively walks a directory (typically a freshly cloned
/// source repository), emits a `## <path>/` heading for every directory and
/// a fenced content block for every file, and honors the root `.gitignore`.
/// Files that do not decode as UTF-8 text are recorded with a placeholder
/// marker instead of their bytes, so the run always produces a complete,
/// best-effort document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the directory to transcribe.
    #[arg(default_value = ".")]
    pub input_path: String,

    /// Do not respect the root .gitignore and include the .git directory.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub no_gitignore: bool,

    /// Write output to the specified file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<String>,

    /// Suppress the document header (repository name, source, date).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_header: bool,

    /// Repository name to show in the document header (defaults to the
    /// basename of the input path).
    #[arg(long, value_name = "NAME")]
    pub repo_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["repo-scribe"]);
        assert_eq!(cli.input_path, ".");
        assert!(!cli.no_gitignore);
        assert!(!cli.no_header);
        assert!(cli.output_file.is_none());
        assert!(cli.repo_name.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "repo-scribe",
            "some/dir",
            "-t",
            "-o",
            "out.md",
            "--no-header",
            "--repo-name",
            "proj",
        ]);
        assert_eq!(cli.input_path, "some/dir");
        assert!(cli.no_gitignore);
        assert_eq!(cli.output_file.as_deref(), Some("out.md"));
        assert!(cli.no_header);
        assert_eq!(cli.repo_name.as_deref(), Some("proj"));
    }
}
