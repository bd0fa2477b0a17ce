use crate::io::{Format, error::Error};
use crate::model::{atom::Atom, structure::Structure};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Atom count and comment lines; skipped without inspection.
const HEADER_LINES: usize = 2;

pub fn read<R: BufRead>(reader: R) -> Result<Structure, Error> {
    let mut atoms = Vec::new();
    let mut pending_blank: Option<usize> = None;

    for (i, line) in reader.split(b'\n').enumerate() {
        let bytes = line?;
        let line_no = i + 1;
        if line_no <= HEADER_LINES {
            continue;
        }

        let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
        let content = std::str::from_utf8(bytes).map_err(|_| {
            Error::parse(Format::Xyz, line_no, "atom record is not valid UTF-8")
        })?;

        if content.trim().is_empty() {
            pending_blank.get_or_insert(line_no);
            continue;
        }
        if let Some(blank_no) = pending_blank {
            return Err(Error::parse(
                Format::Xyz,
                blank_no,
                "blank line between atom records",
            ));
        }

        atoms.push(parse_atom(content, line_no)?);
    }

    Ok(Structure { atoms })
}

pub fn read_file(path: &Path) -> Result<Structure, Error> {
    let file = File::open(path).map_err(|e| Error::open(path, e))?;
    read(BufReader::new(file)).map_err(|e| e.with_path(path))
}

fn parse_atom(line: &str, line_no: usize) -> Result<Atom, Error> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(Error::parse(
            Format::Xyz,
            line_no,
            format!(
                "atom record needs a symbol and three coordinates, found {} field(s)",
                fields.len()
            ),
        ));
    }

    let x = parse_coordinate(fields[1], 'x', line_no)?;
    let y = parse_coordinate(fields[2], 'y', line_no)?;
    let z = parse_coordinate(fields[3], 'z', line_no)?;

    Ok(Atom::new(fields[0], [x, y, z]))
}

fn parse_coordinate(field: &str, axis: char, line_no: usize) -> Result<f64, Error> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::parse(
            Format::Xyz,
            line_no,
            format!("invalid {axis} coordinate '{field}'"),
        )),
    }
}
