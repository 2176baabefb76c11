// crates/infra/src/filesystem.rs
use std::{io::ErrorKind, path::Path};

use log::{debug, trace};
use word_cloud_ports::input::{ResolvedText, TextSource};
use word_cloud_shared_kernel::InfrastructureError;

use crate::persistence::FileReader;

/// [`TextSource`] that reads the input as a file path when it can.
///
/// "Exists and readable" is the only gate: a missing file, a permission
/// problem, a directory or any other read failure makes the input string
/// itself the text to analyse.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemTextSource;

impl TextSource for FileSystemTextSource {
    fn resolve(&self, input: &str) -> ResolvedText {
        if input.is_empty() {
            return ResolvedText::Literal(String::new());
        }

        let path = Path::new(input);
        match FileReader::read_to_string_lossy(path) {
            Ok(contents) => {
                debug!("read {} bytes from {}", contents.len(), path.display());
                ResolvedText::File { path: path.to_path_buf(), contents }
            }
            Err(err) => {
                log_fallback(&err);
                ResolvedText::Literal(input.to_owned())
            }
        }
    }
}

fn log_fallback(err: &InfrastructureError) {
    match err {
        InfrastructureError::FileRead { source, .. } if source.kind() == ErrorKind::NotFound => {
            trace!("input is not a file, using it as literal text");
        }
        InfrastructureError::FileRead { path, source } => {
            debug!("cannot read {}, using input as literal text: {source}", path.display());
        }
        other => debug!("using input as literal text: {other}"),
    }
}
