use super::element::Element;

/// Represents a single atom within a topology.
///
/// Atoms do not carry coordinates; positions live in the trajectory's frame
/// data, indexed by the atom's position in the topology's atom list. That
/// positional index is the atom's identity and equals its column in every
/// coordinate frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom as it appears in the source file (e.g., "CA", "MG", "C5").
    pub name: String,
    /// The chemical element, used for mass weighting.
    pub element: Element,
    /// Index of the owning residue within the topology's residue list.
    ///
    /// Assigned when the atom is attached via
    /// [`Topology::add_atom_to_residue`](super::topology::Topology::add_atom_to_residue).
    pub residue_index: usize,
}

impl Atom {
    /// Creates a new detached `Atom`.
    ///
    /// The residue back-reference is filled in when the atom is added to a
    /// topology.
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name.
    /// * `element` - The chemical element of the atom.
    pub fn new(name: &str, element: Element) -> Self {
        Self {
            name: name.to_string(),
            element,
            residue_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_carries_name_and_element() {
        let atom = Atom::new("CA", Element::Carbon);
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.element, Element::Carbon);
        assert_eq!(atom.residue_index, 0);
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new("MG", Element::Magnesium);
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
