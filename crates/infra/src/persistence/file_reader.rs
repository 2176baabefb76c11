use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use word_cloud_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        let mut reader = Self::open_buffered(path).map_err(|source| file_read(path, source))?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(|source| file_read(path, source))?;
        Ok(buf)
    }

    /// Read the entire file as text, replacing invalid UTF-8 sequences.
    pub fn read_to_string_lossy(path: &Path) -> InfraResult<String> {
        let bytes = Self::read_to_end(path)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }
}

fn file_read(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileRead { path: path.to_path_buf(), source }
}
