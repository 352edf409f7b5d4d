//! CSV loader
//!
//! Reads the whole file, resolves the author column from the header and
//! hands back the raw data lines in file order. Rows are not checked against
//! the header's column count.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::error::{TallyError, TallyResult};
use crate::core::header::resolve_offset;
use crate::core::model::Metadata;
use crate::core::split::split_line;

/// Raw data lines of a posts file plus what the header told us.
#[derive(Debug, Clone, Default)]
pub struct LoadedCsv {
    /// Data lines in file order, line endings still attached
    pub lines: Vec<String>,
    pub metadata: Metadata,
    /// Whether invalid UTF-8 had to be replaced
    pub lossy: bool,
}

/// Load `path` and resolve `column` in its header.
pub fn load_csv(path: &Path, column: &str) -> TallyResult<LoadedCsv> {
    let bytes = read_file_bytes(path).map_err(|source| TallyError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read csv file");

    let (content, lossy) = match String::from_utf8(bytes) {
        Ok(content) => (content, false),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                "lossy UTF-8 conversion applied (some characters replaced)"
            );
            (String::from_utf8_lossy(err.as_bytes()).into_owned(), true)
        }
    };

    let mut loaded = parse_content(&content, column, path)?;
    loaded.lossy = lossy;
    Ok(loaded)
}

/// Split already-decoded content into header metadata and data lines.
///
/// `path` is only used for error reporting.
pub fn parse_content(content: &str, column: &str, path: &Path) -> TallyResult<LoadedCsv> {
    let empty = || TallyError::EmptyFile {
        path: PathBuf::from(path),
    };

    let mut lines = content.split_inclusive('\n');
    let header = split_line(lines.next().ok_or_else(empty)?);
    let name_offset = resolve_offset(&header, column)?;
    tracing::debug!(columns = header.len(), column, name_offset, "parsed header");

    let data: Vec<String> = lines.map(str::to_string).collect();
    if data.is_empty() {
        return Err(empty());
    }

    Ok(LoadedCsv {
        metadata: Metadata {
            total_rows: data.len(),
            num_cols: header.len(),
            name_offset,
        },
        lines: data,
        lossy: false,
    })
}

fn read_file_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let size = file
        .metadata()
        .map(|m| usize::try_from(m.len()).unwrap_or(0))
        .unwrap_or(0);
    let mut buffer = Vec::with_capacity(size);
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}
