use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// Values joined by `,` with no whitespace, e.g. `4,0,917,0`.
pub fn to_csv_line(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Writes `values` to `path` as one comma separated line, replacing the file.
pub fn save_numbers(path: &Path, values: &[i64]) -> Result<(), ExportError> {
    if values.is_empty() {
        return Err(ExportError::Empty);
    }
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(to_csv_line(values).as_bytes())
        .map_err(io_err)?;
    file.flush().map_err(io_err)
}

/// Appends `.txt` when the picked path has no extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("txt")
    }
}
