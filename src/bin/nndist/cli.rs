use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(
    name = "nndist",
    about = "Shortest N–N distance per molecule across a folder of XYZ files",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// Folder containing XYZ files (prompted for on a terminal if omitted)
    #[arg(value_name = "DIR", env = "NNDIST_INPUT_DIR")]
    pub input: Option<PathBuf>,

    /// CSV report to write (prompted for on a terminal if omitted)
    #[arg(short, long, value_name = "FILE", env = "NNDIST_OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanOptions,

    /// Never prompt; a missing DIR or --output cancels the run
    #[arg(long)]
    pub no_prompt: bool,

    /// Suppress progress output and tables (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args)]
#[command(next_help_heading = "Scan Options")]
pub struct ScanOptions {
    /// Element whose closest pair is measured (case-insensitive)
    #[arg(long, value_name = "SYMBOL", default_value = "N")]
    pub element: String,

    /// Also accept .XYZ, .Xyz, ... (suffix match is case-sensitive by default)
    #[arg(long)]
    pub ignore_ext_case: bool,

    /// Skip files that fail to parse instead of aborting the run
    #[arg(long)]
    pub skip_invalid: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "nndist",
            "molecules",
            "-o",
            "out.csv",
            "--element",
            "o",
            "--skip-invalid",
            "-vv",
        ])
        .expect("parse args");

        assert_eq!(cli.input, Some(PathBuf::from("molecules")));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.scan.element, "o");
        assert!(cli.scan.skip_invalid);
        assert!(!cli.scan.ignore_ext_case);
        assert_eq!(cli.verbose, 2);
    }
}
