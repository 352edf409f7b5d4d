//! Header resolution: column name to field offset

use crate::core::error::{TallyError, TallyResult};
use crate::core::model::Row;

/// Column the CLI ranks by unless told otherwise
pub const DEFAULT_COLUMN: &str = "name";

/// Return the offset of the first header field equal to `column`.
///
/// Matching is exact; `"name"` does not match `"namespace"`.
pub fn resolve_offset(header: &Row, column: &str) -> TallyResult<usize> {
    header
        .fields()
        .iter()
        .position(|field| field == column)
        .ok_or_else(|| TallyError::ColumnNotFound {
            column: column.to_string(),
            header: header.fields().to_vec(),
        })
}
