use super::{DELIMITER, HEADER, QUOTE};
use crate::io::error::Error;
use crate::model::report::Report;
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

const LINE_END: &str = "\r\n";

pub fn write<W: Write>(mut writer: W, report: &Report) -> Result<(), Error> {
    write!(writer, "{}{DELIMITER}{}{LINE_END}", HEADER[0], HEADER[1])?;
    for row in &report.rows {
        write!(
            writer,
            "{}{DELIMITER}{}{LINE_END}",
            escape_field(&row.file),
            format_distance(row.distance)
        )?;
    }
    Ok(())
}

/// Writes the report to `path`, replacing any existing file.
///
/// The whole report is rendered before the destination is touched.
pub fn write_file(path: &Path, report: &Report) -> Result<(), Error> {
    let mut buf = Vec::new();
    write(&mut buf, report)?;
    fs::write(path, buf).map_err(|source| Error::Io {
        path: Some(path.to_path_buf()),
        source,
    })
}

/// Shortest decimal text that parses back to the same `f64`, always with a
/// fractional part.
pub fn format_distance(distance: f64) -> String {
    let mut text = distance.to_string();
    if distance.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn escape_field(field: &str) -> Cow<'_, str> {
    let needs_quotes = field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\r' || c == '\n');
    if !needs_quotes {
        return Cow::Borrowed(field);
    }

    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);
    Cow::Owned(quoted)
}
