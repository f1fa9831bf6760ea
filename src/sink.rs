use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{env_value, DEFAULT_OUTPUT, STEP_SUMMARY_VAR};
use crate::error::{Error, Result};

/// `GITHUB_STEP_SUMMARY`, or stdout when it is not set.
pub fn output_path() -> PathBuf {
    env_value(STEP_SUMMARY_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

/// Appends `content` to `path`, creating the file if needed.
pub fn append_to_file(path: &Path, content: &str) -> Result<()> {
    let io_error = |source: std::io::Error| Error::SinkIo {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)
}
