/// A single atom as it appears in a geometry file.
///
/// The element symbol is kept exactly as written; comparisons against a
/// target element are done case-insensitively by [`crate::geometry::select_indices`].
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            symbol: symbol.into(),
            position,
        }
    }
}
