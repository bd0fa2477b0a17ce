//! Directory scanning: selects candidate geometry files and reduces each one
//! to a [`ResultRow`].

mod config;

pub use config::{ErrorPolicy, ExtensionCase, ScanConfig};

use crate::geometry::{PairDistance, closest_pair, select_indices};
use crate::io::{Error, read_xyz};
use crate::model::report::{Report, ResultRow, SkippedFile};
use crate::model::structure::Structure;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Regular files in `dir` whose name carries the configured extension,
    /// sorted by file name.
    pub fn candidates(&self, dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let entries = fs::read_dir(dir).map_err(|e| Error::open(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::from(e).with_path(dir))?;
            let name = entry.file_name();
            if !self.config.matches_extension(&name.to_string_lossy()) {
                continue;
            }
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Closest pair of target atoms, with indices into `structure`.
    pub fn measure(&self, structure: &Structure) -> Option<PairDistance> {
        let indices = select_indices(structure.symbols(), &self.config.target);
        let positions = structure.positions_of(&indices);

        closest_pair(&positions).map(|pair| PairDistance {
            i: indices[pair.i],
            j: indices[pair.j],
            distance: pair.distance,
        })
    }

    /// Reads and measures one file. `Ok(None)` means the file has fewer than
    /// two target atoms and contributes no row.
    pub fn process_file(&self, path: &Path) -> Result<Option<ResultRow>, Error> {
        let structure = read_xyz(path)?;
        let row = self
            .measure(&structure)
            .map(|pair| ResultRow::new(file_label(path), pair.distance, (pair.i, pair.j)));
        Ok(row)
    }

    pub fn scan(&self, dir: &Path) -> Result<Report, Error> {
        self.scan_with(dir, |_| {})
    }

    /// Like [`Scanner::scan`], calling `on_file` before each candidate is read.
    pub fn scan_with<F>(&self, dir: &Path, mut on_file: F) -> Result<Report, Error>
    where
        F: FnMut(&Path),
    {
        let candidates = self.candidates(dir)?;
        debug!(
            "found {} candidate file(s) in '{}'",
            candidates.len(),
            dir.display()
        );

        let mut report = Report::new();
        for path in &candidates {
            on_file(path);
            report.scanned += 1;

            match self.process_file(path) {
                Ok(Some(row)) => {
                    debug!(
                        "{}: closest {}-{} distance {} (atoms {} and {})",
                        row.file,
                        self.config.target,
                        self.config.target,
                        row.distance,
                        row.pair.0,
                        row.pair.1
                    );
                    report.push(row);
                }
                Ok(None) => {
                    debug!(
                        "{}: fewer than two {} atoms, skipped",
                        file_label(path),
                        self.config.target
                    );
                }
                Err(err) if err.is_parse() && self.config.on_error == ErrorPolicy::Skip => {
                    warn!("skipping {}: {err}", path.display());
                    report.skipped.push(SkippedFile {
                        file: file_label(path),
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            "scanned {} file(s): {} row(s), {} skipped",
            report.scanned,
            report.row_count(),
            report.skipped.len()
        );
        Ok(report)
    }
}

pub fn scan_directory(dir: &Path, config: &ScanConfig) -> Result<Report, Error> {
    Scanner::new(config.clone()).scan(dir)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
