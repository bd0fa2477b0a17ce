//! Survey of the shortest nitrogen–nitrogen distance in each molecule of a
//! directory of XYZ geometry files, written out as a two-column CSV report.
//!
//! # Pipeline
//!
//! - **Read** — [`io::read_xyz`] parses one file into a [`Structure`]
//! - **Select** — [`select_indices`] picks the atoms of the target element
//!   (case-insensitive, nitrogen by default)
//! - **Measure** — [`closest_pair`] checks every unordered pair and keeps the
//!   shortest Euclidean distance
//! - **Scan** — [`Scanner`] applies the above to every `.xyz` file in a
//!   directory, emitting a [`ResultRow`] for each file with at least two
//!   target atoms
//! - **Report** — [`io::write_report`] writes the `XYZ_File,Lowest_N-N_Distance` CSV
//!
//! # Quick Start
//!
//! ```
//! use nndist::{Atom, Structure, Scanner, min_pairwise_distance};
//!
//! let structure: Structure = vec![
//!     Atom::new("N", [0.0, 0.0, 0.0]),
//!     Atom::new("C", [1.2, 0.4, 0.0]),
//!     Atom::new("n", [0.0, 0.0, 3.0]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let pair = Scanner::default().measure(&structure).expect("two nitrogens");
//! assert_eq!(pair.distance, 3.0);
//! assert_eq!((pair.i, pair.j), (0, 2));
//!
//! // A single point has no pairwise distance.
//! assert_eq!(min_pairwise_distance(&[[0.0, 0.0, 0.0]]), None);
//! ```
//!
//! Scanning a directory and writing the report:
//!
//! ```no_run
//! use std::path::Path;
//! use nndist::{ScanConfig, io, scan_directory};
//!
//! let report = scan_directory(Path::new("geometries"), &ScanConfig::default())?;
//! if !report.is_empty() {
//!     io::write_report(Path::new("distances.csv"), &report)?;
//! }
//! # Ok::<(), nndist::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — XYZ reader, CSV report writer and reader, error type
//! - [`geometry`] — Element filter and pairwise distance engine
//! - [`scan`] — Directory scanner and its configuration

mod model;

pub mod geometry;
pub mod io;
pub mod scan;

pub use model::atom::Atom;
pub use model::report::{Report, ResultRow, SkippedFile};
pub use model::structure::Structure;

pub use geometry::{NITROGEN, PairDistance, closest_pair, distance, min_pairwise_distance, select_indices};
pub use scan::{ErrorPolicy, ExtensionCase, ScanConfig, Scanner, scan_directory};
