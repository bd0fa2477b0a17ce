//! Reading XYZ geometries and writing/reading the CSV distance report.
//!
//! Both directions come in two flavours: generic functions over
//! [`std::io::BufRead`] / [`std::io::Write`] in the format submodules, and
//! path-based helpers re-exported here that attach the path to any error.

use std::fmt;

pub mod csv;
pub mod error;
pub mod xyz;

pub use csv::reader::read_file as read_report;
pub use csv::writer::write_file as write_report;
pub use error::Error;
pub use xyz::reader::read_file as read_xyz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xyz,
    Csv,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Xyz => write!(f, "XYZ"),
            Format::Csv => write!(f, "CSV"),
        }
    }
}
