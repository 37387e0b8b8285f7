use super::atom::Atom;
use super::residue::Residue;

/// The static description of a molecular system: atoms grouped into residues.
///
/// A topology is shared across all frames of a trajectory. Two ordering
/// invariants hold by construction and are relied on everywhere downstream:
///
/// - an atom's index in [`atoms`](Topology::atoms) equals its column in every
///   coordinate frame of a trajectory built on this topology;
/// - residue order equals declaration order (the order residues were added,
///   which mirrors input-file order).
///
/// The `add_*` methods are the only mutation path; once a topology is handed
/// to a [`Trajectory`](super::trajectory::Trajectory) it is treated as
/// immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    residues: Vec<Residue>,
    atoms: Vec<Atom>,
}

impl Topology {
    /// Creates a new, empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an atom by its positional index.
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Returns all atoms in coordinate-column order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Retrieves a residue by its positional index.
    pub fn residue(&self, index: usize) -> Option<&Residue> {
        self.residues.get(index)
    }

    /// Returns all residues in declaration order.
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// Returns the total number of atoms across all residues.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the number of residues.
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Appends a new residue and returns its index.
    ///
    /// # Arguments
    ///
    /// * `seq` - The residue sequence number from the source file.
    /// * `name` - The residue name.
    /// * `chain_id` - The single-character chain identifier.
    pub fn add_residue(&mut self, seq: isize, name: &str, chain_id: char) -> usize {
        self.residues.push(Residue::new(seq, name, chain_id));
        self.residues.len() - 1
    }

    /// Appends an atom to an existing residue and returns the atom's index.
    ///
    /// The atom's residue back-reference is set to `residue_index`.
    ///
    /// # Return
    ///
    /// Returns `Some(atom_index)` on success, or `None` if `residue_index`
    /// does not name an existing residue.
    pub fn add_atom_to_residue(&mut self, residue_index: usize, mut atom: Atom) -> Option<usize> {
        let residue = self.residues.get_mut(residue_index)?;
        atom.residue_index = residue_index;
        let atom_index = self.atoms.len();
        self.atoms.push(atom);
        residue.add_atom(atom_index);
        Some(atom_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;

    #[test]
    fn new_topology_is_empty() {
        let topology = Topology::new();
        assert_eq!(topology.atom_count(), 0);
        assert_eq!(topology.residue_count(), 0);
    }

    #[test]
    fn add_residue_returns_sequential_indices() {
        let mut topology = Topology::new();
        assert_eq!(topology.add_residue(1, "ALA", 'A'), 0);
        assert_eq!(topology.add_residue(2, "GLY", 'A'), 1);
        assert_eq!(topology.residue(0).unwrap().name, "ALA");
        assert_eq!(topology.residue(1).unwrap().seq, 2);
    }

    #[test]
    fn add_atom_to_residue_assigns_positional_index_and_back_reference() {
        let mut topology = Topology::new();
        let res = topology.add_residue(1, "ALA", 'A');
        let a0 = topology
            .add_atom_to_residue(res, Atom::new("N", Element::Nitrogen))
            .unwrap();
        let a1 = topology
            .add_atom_to_residue(res, Atom::new("CA", Element::Carbon))
            .unwrap();
        assert_eq!((a0, a1), (0, 1));
        assert_eq!(topology.atom(1).unwrap().residue_index, res);
        assert_eq!(topology.residue(res).unwrap().atoms(), &[0, 1]);
    }

    #[test]
    fn add_atom_to_missing_residue_returns_none() {
        let mut topology = Topology::new();
        assert!(
            topology
                .add_atom_to_residue(0, Atom::new("CA", Element::Carbon))
                .is_none()
        );
        assert_eq!(topology.atom_count(), 0);
    }

    #[test]
    fn atom_count_is_sum_over_residues() {
        let mut topology = Topology::new();
        let r0 = topology.add_residue(1, "ALA", 'A');
        let r1 = topology.add_residue(2, "MG", 'A');
        topology.add_atom_to_residue(r0, Atom::new("N", Element::Nitrogen));
        topology.add_atom_to_residue(r0, Atom::new("CA", Element::Carbon));
        topology.add_atom_to_residue(r1, Atom::new("MG", Element::Magnesium));
        let per_residue: usize = topology.residues().iter().map(|r| r.atom_count()).sum();
        assert_eq!(topology.atom_count(), per_residue);
        assert_eq!(topology.atom_count(), 3);
    }
}
