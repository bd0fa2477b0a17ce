//! Data types that flow through the `nndist` pipeline:
//!
//! - [`atom`] – An element symbol with Cartesian coordinates.
//! - [`structure`] – The ordered atoms of one geometry file.
//! - [`report`] – Per-file minimum distances collected from a directory scan.
//!
//! Structures are short-lived; a scan keeps only the [`ResultRow`] derived from each.
//!
//! [`ResultRow`]: report::ResultRow

pub mod atom;
pub mod report;
pub mod structure;
