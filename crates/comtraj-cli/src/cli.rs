use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "comtraj developers",
    version,
    about = "comtraj - Reduce a molecular-dynamics trajectory to one mass-weighted center-of-mass point per residue per frame.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input trajectory file (format inferred from the extension, e.g. .pdb or .xyz).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the output reduced trajectory file (format inferred from the extension).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_positional_arguments() {
        let cli = Cli::try_parse_from(["comtraj", "in.pdb", "out.pdb"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.pdb"));
        assert_eq!(cli.output, PathBuf::from("out.pdb"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn missing_output_argument_is_a_usage_error() {
        assert!(Cli::try_parse_from(["comtraj", "in.pdb"]).is_err());
    }

    #[test]
    fn no_arguments_is_a_usage_error() {
        assert!(Cli::try_parse_from(["comtraj"]).is_err());
    }

    #[test]
    fn extra_positional_argument_is_a_usage_error() {
        assert!(Cli::try_parse_from(["comtraj", "a.pdb", "b.pdb", "c.pdb"]).is_err());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["comtraj", "-v", "-q", "a.pdb", "b.pdb"]).is_err());
    }

    #[test]
    fn verbosity_flag_is_counted() {
        let cli = Cli::try_parse_from(["comtraj", "-vv", "in.xyz", "out.xyz"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
