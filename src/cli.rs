//! Command-line interface for reindent.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

use crate::config::Syntax;

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Files or directories to reindent
    pub inputs: Vec<PathBuf>,

    /// Number of spaces per indent level
    pub indent: Option<usize>,

    /// Indent with tabs instead of spaces
    pub tabs: bool,

    /// Force a syntax instead of detecting it from the file extension
    pub syntax: Option<Syntax>,

    /// Output to stdout instead of in-place
    pub stdout: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Recursive directory processing
    pub recursive: bool,

    /// Silent mode (no output)
    pub silent: bool,

    /// Number of parallel jobs (0 = auto, 1 = sequential)
    pub jobs: Option<usize>,

    /// Exclude patterns for files/directories (glob patterns)
    pub exclude: Vec<String>,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("reindent")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Fred Jones")
        .about("Corrects leading indentation in script and markup sources")
        .arg(
            Arg::new("inputs")
                .help("Files or directories to reindent")
                .value_name("FILE")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .help("Number of spaces per indent level [default: 4]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("tabs")
                .short('t')
                .long("tabs")
                .help("Indent with one tab per level instead of spaces")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("syntax")
                .long("syntax")
                .help("Force syntax instead of detecting from extension: script or markup")
                .value_name("SYNTAX")
                .value_parser(clap::value_parser!(Syntax)),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Output to stdout instead of modifying files in-place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("recursive")
                .short('r')
                .long("recursive")
                .help("Recursively reindent directories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Exclude files/directories matching pattern (glob syntax, can be repeated)")
                .value_name("PATTERN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config, file selection)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no output, for editor integration)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of parallel jobs (0=auto, 1=sequential)")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        inputs: matches
            .get_many::<PathBuf>("inputs")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        indent: matches.get_one::<usize>("indent").copied(),
        tabs: matches.get_flag("tabs"),
        syntax: matches.get_one::<Syntax>("syntax").copied(),
        stdout: matches.get_flag("stdout"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        recursive: matches.get_flag("recursive"),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        debug: matches.get_flag("debug"),
        silent: matches.get_flag("silent"),
        jobs: matches.get_one::<usize>("jobs").copied(),
    }
}
