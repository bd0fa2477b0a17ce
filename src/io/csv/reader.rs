use super::{DELIMITER, HEADER, QUOTE};
use crate::io::{Format, error::Error};
use std::fs;
use std::path::Path;

/// Parses a report produced by [`super::writer::write`] back into
/// `(file, distance)` pairs.
pub fn read(text: &str) -> Result<Vec<(String, f64)>, Error> {
    let records = split_records(text)?;
    let mut records = records.into_iter();

    match records.next() {
        Some((_, header)) if header == HEADER => {}
        Some((line, _)) => {
            return Err(Error::parse(
                Format::Csv,
                line,
                format!("expected header '{}'", HEADER.join(",")),
            ));
        }
        None => return Err(Error::parse(Format::Csv, 1, "missing header row")),
    }

    records
        .map(|(line, fields)| {
            let [file, distance] = <[String; 2]>::try_from(fields).map_err(|fields| {
                Error::parse(
                    Format::Csv,
                    line,
                    format!("expected 2 fields, found {}", fields.len()),
                )
            })?;
            let distance = distance.parse::<f64>().map_err(|_| {
                Error::parse(Format::Csv, line, format!("invalid distance '{distance}'"))
            })?;
            Ok((file, distance))
        })
        .collect()
}

pub fn read_file(path: &Path) -> Result<Vec<(String, f64)>, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::open(path, e))?;
    read(&text).map_err(|e| e.with_path(path))
}

/// Splits `text` into records of fields, honouring quoted fields that may
/// contain delimiters, doubled quotes and line breaks. Each record is tagged
/// with the line it starts on. Blank lines are skipped.
fn split_records(text: &str) -> Result<Vec<(usize, Vec<String>)>, Error> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    field.push(QUOTE);
                }
                QUOTE => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            QUOTE if field.is_empty() => in_quotes = true,
            DELIMITER => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                finish_record(&mut records, &mut fields, &mut field, record_line);
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(Error::parse(
            Format::Csv,
            record_line,
            "unterminated quoted field",
        ));
    }
    finish_record(&mut records, &mut fields, &mut field, record_line);

    Ok(records)
}

fn finish_record(
    records: &mut Vec<(usize, Vec<String>)>,
    fields: &mut Vec<String>,
    field: &mut String,
    line: usize,
) {
    if fields.is_empty() && field.is_empty() {
        return;
    }
    fields.push(std::mem::take(field));
    records.push((line, std::mem::take(fields)));
}
