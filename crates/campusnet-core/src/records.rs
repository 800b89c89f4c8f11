//! Utilities for records output format
//!
//! Every records document starts with one `H` header line carrying
//! `key=value` pairs, followed by one line per record whose first token names
//! the record kind (`V` vertex, `E` edge, `D` distance).

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Build the header line for a records document
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H campusnet=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Quoted label field, or `-` when the vertex has no label
pub fn label_field(label: Option<&str>) -> String {
    match label {
        Some(text) => format!("\"{}\"", escape_quotes(text)),
        None => "-".to_string(),
    }
}
