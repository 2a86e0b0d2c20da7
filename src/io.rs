//! File-to-file conversion.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{Options, convert_source};

/// Errors raised while converting a file.
///
/// The converter itself is total; every variant comes from the filesystem.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input path does not exist or is not a regular file.
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),
    /// Input could not be read, or is not valid UTF-8.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Output could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convert the Markdown file at `input` and write the HTML to `output`.
///
/// `input` is checked before anything is read or written; a missing or
/// non-regular input leaves `output` untouched.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<(), ConvertError> {
    if !input.is_file() {
        return Err(ConvertError::MissingInput(input.to_path_buf()));
    }

    let source = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", source.len(), input.display());

    let fragments = convert_source(&source, options);
    let html = fragments.join("\n");

    fs::write(output, &html).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(
        "wrote {} fragments ({} bytes) to {}",
        fragments.len(),
        html.len(),
        output.display()
    );
    Ok(())
}
