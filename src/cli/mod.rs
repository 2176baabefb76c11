mod args;

pub use args::Args;
use clap::Parser;
use log::debug;
use word_cloud_domain::config::{Config, CountRange, Prefix};
use word_cloud_shared_kernel::{PresentationError, Result};

/// Parse process arguments. Exits through clap on `--help`, `--version`
/// or a malformed option.
pub fn parse_args() -> Args {
    Args::parse()
}

/// Convert parsed CLI arguments into a validated domain configuration.
///
/// The count range is checked before the input is looked at, so an inverted
/// range is reported even when no input was given.
pub fn build_config(args: Args) -> Result<Config> {
    let counts =
        CountRange::from_thresholds(args.mincounts.unwrap_or_default(), args.maxcounts.unwrap_or_default())
            .validate()?;
    let prefix = Prefix::from(args.startswith.unwrap_or_default());
    let input = select_input(args.input, args.inputs)?;

    debug!("config: prefix={prefix:?} counts={counts:?} input={input:?}");
    Ok(Config::new(input, prefix, counts)?)
}

/// `--input` wins unless empty; otherwise the last positional argument.
fn select_input(explicit: Option<String>, mut positional: Vec<String>) -> Result<String> {
    explicit
        .filter(|input| !input.is_empty())
        .or_else(|| positional.pop())
        .ok_or_else(|| PresentationError::MissingInput.into())
}
