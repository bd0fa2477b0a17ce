/// Minimum target-element distance found in one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// File name of the source geometry, without its directory.
    pub file: String,
    pub distance: f64,
    /// Indices (into the source structure) of the closest pair, `i < j`.
    pub pair: (usize, usize),
}

impl ResultRow {
    pub fn new(file: impl Into<String>, distance: f64, pair: (usize, usize)) -> Self {
        Self {
            file: file.into(),
            distance,
            pair,
        }
    }
}

/// A file that was left out of the report because it could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub rows: Vec<ResultRow>,
    pub skipped: Vec<SkippedFile>,
    /// Number of candidate files that were examined.
    pub scanned: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    /// The row with the smallest distance across the whole report.
    pub fn closest(&self) -> Option<&ResultRow> {
        self.rows
            .iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
