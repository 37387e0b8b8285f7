use crate::core::models::trajectory::{Trajectory, TrajectoryError};
use crate::core::reduce::com::{ComError, compute_com};
use crate::core::reduce::selection::Selection;
use crate::core::reduce::topology::reduce_topology;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum ReduceError {
    #[error(
        "Selection matched {selected} atoms but the topology has {residues} residues; \
         the selection must pick exactly one representative atom per residue"
    )]
    SelectionMismatch { selected: usize, residues: usize },

    #[error("Center-of-mass computation failed: {source}")]
    Com {
        #[from]
        source: ComError,
    },

    #[error("Failed to assemble reduced trajectory: {source}")]
    Assembly {
        #[from]
        source: TrajectoryError,
    },
}

/// Reduces a trajectory to one mass-weighted center-of-mass point per
/// residue per frame.
///
/// Straight-line pipeline over a loaded trajectory:
///
/// 1. build the reduced topology of representative atoms chosen by
///    `selection`;
/// 2. compute the per-residue COM array over all frames;
/// 3. check the alignment contract, then assemble the output trajectory.
///
/// The COM array is indexed by *original* residue while the reduced
/// topology is indexed by selection match, so the two only line up when the
/// selection picked exactly one atom per original residue. That contract is
/// enforced here, before any output exists: a mismatch fails fast with
/// [`ReduceError::SelectionMismatch`] instead of silently writing a
/// misaligned trajectory.
///
/// # Errors
///
/// Returns [`ReduceError::SelectionMismatch`] when the selection does not
/// pick one atom per residue, or a [`ComError`](ReduceError::Com) for
/// degenerate residues (no atoms, unknown mass, zero total mass).
#[instrument(skip_all, name = "reduce_workflow")]
pub fn run(trajectory: &Trajectory, selection: &Selection) -> Result<Trajectory, ReduceError> {
    let topology = trajectory.topology();
    info!(
        frames = trajectory.frame_count(),
        atoms = topology.atom_count(),
        residues = topology.residue_count(),
        "Starting center-of-mass reduction."
    );

    let reduced_topology = reduce_topology(topology, selection);
    let com = compute_com(trajectory)?;

    let selected = reduced_topology.atom_count();
    let residues = topology.residue_count();
    if selected != residues {
        return Err(ReduceError::SelectionMismatch { selected, residues });
    }

    let reduced = Trajectory::new(reduced_topology, com)?;
    info!(
        frames = reduced.frame_count(),
        atoms = reduced.atom_count(),
        "Reduction complete."
    );
    Ok(reduced)
}
