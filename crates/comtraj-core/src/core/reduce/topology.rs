use super::selection::Selection;
use crate::core::models::topology::Topology;
use std::collections::HashMap;

/// Builds a reduced topology containing only the atoms matching `selection`.
///
/// Atoms are scanned in topology order. Each matching atom is added to the
/// output under a copy of its original residue (chain, sequence number and
/// name preserved); residues are created lazily in first-match order, which is
/// the original residue order because atoms are grouped by residue in
/// topology order. Residues contributing zero matching atoms are silently
/// absent from the output.
///
/// This function does not verify the one-representative-per-residue
/// precondition the reduction pipeline relies on; the workflow checks it
/// explicitly before assembling output (see
/// [`workflows::reduce`](crate::workflows::reduce)).
pub fn reduce_topology(topology: &Topology, selection: &Selection) -> Topology {
    let mut reduced = Topology::new();
    let mut residue_map: HashMap<usize, usize> = HashMap::new();

    for atom in topology.atoms() {
        if !selection.matches(atom) {
            continue;
        }
        let target_residue = *residue_map.entry(atom.residue_index).or_insert_with(|| {
            // Every atom's residue_index names an existing residue.
            let residue = &topology.residues()[atom.residue_index];
            reduced.add_residue(residue.seq, &residue.name, residue.chain_id)
        });
        reduced.add_atom_to_residue(target_residue, atom.clone());
    }

    reduced
}
