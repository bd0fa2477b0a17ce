use super::atom::Atom;

/// An ordered list of atoms read from one geometry file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    pub atoms: Vec<Atom>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.atoms.iter().map(|a| a.symbol.as_str())
    }

    /// Positions of the atoms at `indices`, in the order given.
    ///
    /// Indices out of range are ignored.
    pub fn positions_of(&self, indices: &[usize]) -> Vec<[f64; 3]> {
        indices
            .iter()
            .filter_map(|&i| self.atoms.get(i).map(|a| a.position))
            .collect()
    }
}

impl FromIterator<Atom> for Structure {
    fn from_iter<T: IntoIterator<Item = Atom>>(iter: T) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}
