// src/cli/args.rs
use clap::{ArgAction, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "word_cloud",
    version = crate::VERSION,
    about = "Count the words of a text or file, skipping stop words",
    after_long_help = include_str!("../../usage.txt")
)]
pub struct Args {
    /// Text to analyse, or a path to a file to load (the last one wins; ignored when --input is set)
    #[arg(value_name = "INPUT", value_hint = ValueHint::AnyPath)]
    pub inputs: Vec<String>,

    /// Text or path to a file to generate the word cloud for
    #[arg(short, long, value_name = "TEXT|FILE", value_hint = ValueHint::AnyPath, help_heading = "Input")]
    pub input: Option<String>,

    /// Only count words starting with this prefix (compared as given, not lowercased)
    #[arg(
        short = 's',
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "",
        value_name = "PREFIX",
        help_heading = "Filters"
    )]
    pub startswith: Option<String>,

    /// Hide words seen fewer than N times (0 = no minimum)
    #[arg(
        short = 'm',
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "0",
        value_name = "N",
        help_heading = "Filters"
    )]
    pub mincounts: Option<usize>,

    /// Hide words seen more than N times (0 = no maximum)
    #[arg(
        short = 'n',
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "0",
        value_name = "N",
        help_heading = "Filters"
    )]
    pub maxcounts: Option<usize>,

    /// Diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Diagnostics")]
    pub verbose: u8,
}
