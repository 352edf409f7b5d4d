//! Line splitter
//!
//! Splits one CSV line on `,`. There is no quoting grammar: a comma inside a
//! value always starts a new field, so `"a,b"` yields two fields.

use crate::core::model::Row;

/// Field delimiter
pub const DELIMITER: char = ',';

/// Split a line into its fields.
///
/// The result always holds `commas + 1` fields; empty input gives a single
/// empty field. One trailing `\n` (or `\r\n`) is removed from the last field.
pub fn split_line(line: &str) -> Row {
    let mut fields = Vec::with_capacity(line.matches(DELIMITER).count() + 1);
    let mut current = String::new();

    for c in line.chars() {
        if c == DELIMITER {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    trim_line_ending(&mut current);
    fields.push(current);

    Row::new(fields)
}

fn trim_line_ending(field: &mut String) {
    if field.ends_with('\n') {
        field.pop();
        if field.ends_with('\r') {
            field.pop();
        }
    }
}
