use clap::Parser;
use sayings::config::OutputFormat;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("SAYINGS_GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("SAYINGS_GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("SAYINGS_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "sayings", bin_name = "sayings", version = get_version())]
#[command(
    about = "Run a file of ADD / REM / PRINT commands against a store of aphorisms and proverbs",
    long_about = None
)]
pub struct Cli {
    /// Command file to execute (defaults to the configured input file)
    pub file: Option<PathBuf>,

    /// How PRINT renders records
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_configured_defaults() {
        let cli = Cli::try_parse_from(["sayings"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_file_and_flags() {
        let cli =
            Cli::try_parse_from(["sayings", "quotes.txt", "--output", "json", "--no-color", "-v"])
                .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("quotes.txt")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_output_format() {
        assert!(Cli::try_parse_from(["sayings", "-o", "yaml"]).is_err());
    }
}
