use crate::core::models::trajectory::{Frame, Trajectory};
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComError {
    #[error("Residue {seq} ({name}) contains no atoms; its center of mass is undefined")]
    EmptyResidue { seq: isize, name: String },

    #[error(
        "Atom '{atom_name}' in residue {seq} ({name}) has no known mass (element '{element}')"
    )]
    UnknownMass {
        seq: isize,
        name: String,
        atom_name: String,
        element: String,
    },

    #[error("Residue {seq} ({name}) has zero total mass; its center of mass is undefined")]
    ZeroMass { seq: isize, name: String },
}

/// Per-residue weights, resolved once and reused across all frames.
struct ResidueWeights {
    atoms: Vec<(usize, f64)>,
    total_mass: f64,
}

/// Computes the mass-weighted center of mass of every residue in every frame.
///
/// For residue `r` with atom index set `A(r)` and atom masses `w(a)`, frame
/// `f` yields `com[f][r] = Σ w(a)·coords[f][a] / Σ w(a)`. Masses are
/// constant across frames, so the atom/mass mapping is resolved once per
/// residue up front and the per-frame pass is a plain weighted sum,
/// O(n_frames × n_atoms) overall.
///
/// The result has one point per *original* residue per frame, in the
/// topology's residue order. The function is pure: it reads the trajectory
/// and allocates a fresh array.
///
/// # Errors
///
/// Degenerate residues are reported, never turned into NaN coordinates:
///
/// - [`ComError::EmptyResidue`] for a residue with no atoms;
/// - [`ComError::UnknownMass`] for an atom whose element has no mass;
/// - [`ComError::ZeroMass`] for a residue whose masses sum to zero.
pub fn compute_com(trajectory: &Trajectory) -> Result<Vec<Frame>, ComError> {
    let topology = trajectory.topology();

    let weights = topology
        .residues()
        .iter()
        .map(|residue| {
            if residue.atoms().is_empty() {
                return Err(ComError::EmptyResidue {
                    seq: residue.seq,
                    name: residue.name.clone(),
                });
            }
            let mut atoms = Vec::with_capacity(residue.atom_count());
            let mut total_mass = 0.0;
            for &atom_index in residue.atoms() {
                let atom = &topology.atoms()[atom_index];
                let mass = atom.element.mass().ok_or_else(|| ComError::UnknownMass {
                    seq: residue.seq,
                    name: residue.name.clone(),
                    atom_name: atom.name.clone(),
                    element: atom.element.to_string(),
                })?;
                atoms.push((atom_index, mass));
                total_mass += mass;
            }
            if total_mass <= 0.0 {
                return Err(ComError::ZeroMass {
                    seq: residue.seq,
                    name: residue.name.clone(),
                });
            }
            Ok(ResidueWeights { atoms, total_mass })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let com = trajectory
        .frames()
        .iter()
        .map(|coords| {
            weights
                .iter()
                .map(|residue| {
                    let weighted_sum: Vector3<f64> = residue
                        .atoms
                        .iter()
                        .map(|&(atom_index, mass)| coords[atom_index].coords * mass)
                        .sum();
                    Point3::from(weighted_sum / residue.total_mass)
                })
                .collect()
        })
        .collect();

    Ok(com)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::element::Element;
    use crate::core::models::topology::Topology;

    const EPS: f64 = 1e-12;

    fn assert_point_eq(actual: Point3<f64>, expected: Point3<f64>) {
        assert!(
            (actual - expected).norm() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn two_atom_residue_matches_hand_computed_com() {
        // Masses 12.011 and 15.999 at (0,0,0) and (0,0,7).
        let mut topology = Topology::new();
        let res = topology.add_residue(1, "LIG", 'A');
        topology.add_atom_to_residue(res, Atom::new("C1", Element::Carbon));
        topology.add_atom_to_residue(res, Atom::new("O1", Element::Oxygen));
        let frames = vec![vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 7.0)]];
        let trajectory = Trajectory::new(topology, frames).unwrap();

        let com = compute_com(&trajectory).unwrap();
        let expected_z = 15.999 * 7.0 / (12.011 + 15.999);
        assert_eq!(com.len(), 1);
        assert_eq!(com[0].len(), 1);
        assert_point_eq(com[0][0], Point3::new(0.0, 0.0, expected_z));
    }

    #[test]
    fn equal_masses_give_geometric_midpoint() {
        let mut topology = Topology::new();
        let res = topology.add_residue(1, "LIG", 'A');
        topology.add_atom_to_residue(res, Atom::new("C1", Element::Carbon));
        topology.add_atom_to_residue(res, Atom::new("C2", Element::Carbon));
        let frames = vec![vec![Point3::new(1.0, 2.0, 3.0), Point3::new(3.0, 4.0, 5.0)]];
        let trajectory = Trajectory::new(topology, frames).unwrap();

        let com = compute_com(&trajectory).unwrap();
        assert_point_eq(com[0][0], Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn single_atom_residues_reproduce_input_coordinates() {
        let mut topology = Topology::new();
        for (i, name) in ["CA", "MG", "C5"].iter().enumerate() {
            let res = topology.add_residue(i as isize + 1, name, 'A');
            let element = Element::infer_from_atom_name(name);
            topology.add_atom_to_residue(res, Atom::new(name, element));
        }
        let frames = vec![
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(2.0, 2.0, 2.0),
            ],
            vec![
                Point3::new(0.1, 0.2, 0.3),
                Point3::new(1.1, 1.2, 1.3),
                Point3::new(2.1, 2.2, 2.3),
            ],
        ];
        let trajectory = Trajectory::new(topology, frames.clone()).unwrap();

        let com = compute_com(&trajectory).unwrap();
        assert_eq!(com.len(), 2);
        for (frame, com_frame) in frames.iter().zip(&com) {
            for (coord, com_point) in frame.iter().zip(com_frame) {
                assert_point_eq(*com_point, *coord);
            }
        }
    }

    #[test]
    fn residue_order_matches_topology_order_across_frames() {
        let mut topology = Topology::new();
        let r0 = topology.add_residue(7, "ALA", 'A');
        topology.add_atom_to_residue(r0, Atom::new("CA", Element::Carbon));
        let r1 = topology.add_residue(3, "MG", 'A');
        topology.add_atom_to_residue(r1, Atom::new("MG", Element::Magnesium));
        let frames = vec![vec![Point3::new(5.0, 0.0, 0.0), Point3::new(9.0, 0.0, 0.0)]];
        let trajectory = Trajectory::new(topology, frames).unwrap();

        let com = compute_com(&trajectory).unwrap();
        // Residue 0 (seq 7) first, residue 1 (seq 3) second: topology order,
        // not sequence-number order.
        assert_point_eq(com[0][0], Point3::new(5.0, 0.0, 0.0));
        assert_point_eq(com[0][1], Point3::new(9.0, 0.0, 0.0));
    }

    #[test]
    fn shape_is_frames_by_residues() {
        let mut topology = Topology::new();
        for seq in 1..=4 {
            let res = topology.add_residue(seq, "GLY", 'A');
            topology.add_atom_to_residue(res, Atom::new("CA", Element::Carbon));
            topology.add_atom_to_residue(res, Atom::new("N", Element::Nitrogen));
        }
        let frames = vec![vec![Point3::origin(); 8]; 5];
        let trajectory = Trajectory::new(topology, frames).unwrap();

        let com = compute_com(&trajectory).unwrap();
        assert_eq!(com.len(), 5);
        assert!(com.iter().all(|frame| frame.len() == 4));
    }

    #[test]
    fn empty_residue_is_reported_with_identity() {
        let mut topology = Topology::new();
        let r0 = topology.add_residue(1, "ALA", 'A');
        topology.add_atom_to_residue(r0, Atom::new("CA", Element::Carbon));
        topology.add_residue(2, "HOH", 'A');
        let frames = vec![vec![Point3::origin()]];
        let trajectory = Trajectory::new(topology, frames).unwrap();

        match compute_com(&trajectory).unwrap_err() {
            ComError::EmptyResidue { seq, name } => {
                assert_eq!(seq, 2);
                assert_eq!(name, "HOH");
            }
            other => panic!("expected EmptyResidue, got {other:?}"),
        }
    }

    #[test]
    fn unknown_mass_is_reported_with_atom_identity() {
        let mut topology = Topology::new();
        let res = topology.add_residue(4, "LIG", 'A');
        topology.add_atom_to_residue(res, Atom::new("X1", Element::Unknown));
        let frames = vec![vec![Point3::origin()]];
        let trajectory = Trajectory::new(topology, frames).unwrap();

        match compute_com(&trajectory).unwrap_err() {
            ComError::UnknownMass {
                seq,
                name,
                atom_name,
                ..
            } => {
                assert_eq!(seq, 4);
                assert_eq!(name, "LIG");
                assert_eq!(atom_name, "X1");
            }
            other => panic!("expected UnknownMass, got {other:?}"),
        }
    }

    #[test]
    fn com_of_empty_trajectory_has_no_frames() {
        let mut topology = Topology::new();
        let res = topology.add_residue(1, "ALA", 'A');
        topology.add_atom_to_residue(res, Atom::new("CA", Element::Carbon));
        let trajectory = Trajectory::new(topology, Vec::new()).unwrap();
        assert!(compute_com(&trajectory).unwrap().is_empty());
    }
}
