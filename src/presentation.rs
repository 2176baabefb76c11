// src/presentation.rs
use std::io::Write;

use word_cloud_shared_kernel::InfraResult;
use word_cloud_usecase::WordCloudReport;

/// Print a blank line, then `word count` per entry in report order.
pub fn write_report<W: Write>(out: &mut W, report: &WordCloudReport) -> InfraResult<()> {
    writeln!(out)?;
    for entry in &report.entries {
        writeln!(out, "{} {}", entry.word, entry.count)?;
    }
    out.flush()?;
    Ok(())
}
