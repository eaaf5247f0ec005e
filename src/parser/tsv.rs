//! Tab-separated row parser.
//!
//! Format: `<group>\t<request>\t<elapsed ns>[\t<extra>...]`
//!
//! Lines starting with `#` are comments. Any other line must carry at
//! least three tab-separated base-10 integers; anything else aborts the
//! scan with [`ScanError::MalformedLine`].

use super::schema::ParsedRow;
use crate::reader::RawLine;
use crate::utils::config::{COMMENT_PREFIX, FIELD_SEPARATOR, MIN_FIELDS};
use crate::utils::error::ScanError;
use log::debug;

/// Parse one raw line
///
/// **Public** - main entry point for parsing
///
/// # Returns
/// `None` for comment lines, the parsed row otherwise
///
/// # Errors
/// * `ScanError::MalformedLine` - fewer than 3 fields or a non-integer field
pub fn parse_line(line: RawLine) -> Result<Option<ParsedRow>, ScanError> {
    if is_comment(&line.text) {
        debug!("Skipping comment at line {}", line.number);
        return Ok(None);
    }

    let (group, request, elapsed_nanos) = parse_fields(&line.text, line.number)?;

    Ok(Some(ParsedRow {
        group,
        request,
        elapsed_nanos,
        raw_text: line.text,
        line_number: line.number,
    }))
}

/// Whether the line is a comment
pub fn is_comment(text: &str) -> bool {
    text.starts_with(COMMENT_PREFIX)
}

/// Parse the group, request and time columns of a data line
///
/// Columns past the third are not inspected.
pub fn parse_fields(text: &str, line: usize) -> Result<(i64, i64, i64), ScanError> {
    let mut fields = text.split(FIELD_SEPARATOR);

    let (Some(group), Some(request), Some(time)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(ScanError::malformed(
            line,
            text,
            format!("expected at least {} tab-separated fields", MIN_FIELDS),
        ));
    };

    Ok((
        parse_field(group, "group", text, line)?,
        parse_field(request, "request ID", text, line)?,
        parse_field(time, "time", text, line)?,
    ))
}

/// Parse a single signed base-10 column
///
/// **Private** - internal helper for parse_fields
fn parse_field(value: &str, name: &str, text: &str, line: usize) -> Result<i64, ScanError> {
    value
        .parse::<i64>()
        .map_err(|e| ScanError::malformed(line, text, format!("invalid {} {:?} ({})", name, value, e)))
}
