use super::topology::Topology;
use nalgebra::Point3;
use thiserror::Error;

/// One snapshot of all atom coordinates at a single time step, in Angstroms.
///
/// Position `i` in a frame belongs to atom `i` of the topology.
pub type Frame = Vec<Point3<f64>>;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error(
        "Frame {frame} has {actual} coordinates but the topology declares {expected} atoms"
    )]
    FrameAtomMismatch {
        frame: usize,
        actual: usize,
        expected: usize,
    },
}

/// A topology paired with a time-ordered sequence of coordinate frames.
///
/// The central invariant, checked at construction: every frame holds exactly
/// one coordinate per topology atom, in atom-index order. Both the topology
/// and the frames are read-only for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    topology: Topology,
    frames: Vec<Frame>,
}

impl Trajectory {
    /// Builds a trajectory, validating frame/topology agreement.
    ///
    /// # Arguments
    ///
    /// * `topology` - The static atom/residue description.
    /// * `frames` - Per-frame coordinates, one point per topology atom.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::FrameAtomMismatch`] if any frame's length
    /// differs from the topology's atom count.
    pub fn new(topology: Topology, frames: Vec<Frame>) -> Result<Self, TrajectoryError> {
        let expected = topology.atom_count();
        for (frame, coords) in frames.iter().enumerate() {
            if coords.len() != expected {
                return Err(TrajectoryError::FrameAtomMismatch {
                    frame,
                    actual: coords.len(),
                    expected,
                });
            }
        }
        Ok(Self { topology, frames })
    }

    /// Returns the topology shared by all frames.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns the coordinate frames in time order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the number of atoms per frame.
    pub fn atom_count(&self) -> usize {
        self.topology.atom_count()
    }
}
