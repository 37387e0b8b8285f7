/// A chemically meaningful grouping of atoms within a topology.
///
/// Residues keep their atoms in input-file order; the atom entries are
/// indices into the owning topology's atom list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    /// Residue sequence number from the source file.
    pub seq: isize,
    /// Name of the residue (e.g., "ALA", "MG", "DG").
    pub name: String,
    /// Single-character chain identifier from the source file.
    ///
    /// Sequence numbers restart per chain, so `(chain_id, seq)` is the
    /// residue's identity; a blank chain is kept as a space.
    pub chain_id: char,
    pub(crate) atoms: Vec<usize>,
}

impl Residue {
    pub(crate) fn new(seq: isize, name: &str, chain_id: char) -> Self {
        Self {
            seq,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_index: usize) {
        self.atoms.push(atom_index);
    }

    /// Returns the indices of this residue's atoms, in input-file order.
    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    /// Returns the number of atoms in this residue.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let residue = Residue::new(10, "GLY", 'A');
        assert_eq!(residue.seq, 10);
        assert_eq!(residue.name, "GLY");
        assert_eq!(residue.chain_id, 'A');
        assert!(residue.atoms().is_empty());
        assert_eq!(residue.atom_count(), 0);
    }

    #[test]
    fn add_atom_preserves_insertion_order() {
        let mut residue = Residue::new(5, "ALA", 'A');
        residue.add_atom(7);
        residue.add_atom(3);
        residue.add_atom(11);
        assert_eq!(residue.atoms(), &[7, 3, 11]);
        assert_eq!(residue.atom_count(), 3);
    }
}
