use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use word_cloud_infra::FileSystemTextSource;
use word_cloud_usecase::BuildWordCloud;

use crate::{cli, presentation};

pub fn run(args: cli::Args) -> Result<()> {
    let config = cli::build_config(args).context("invalid configuration")?;

    let source = FileSystemTextSource;
    let report = BuildWordCloud::new(&source).run(&config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    presentation::write_report(&mut out, &report).context("failed to write report")?;
    Ok(())
}
