use crate::core::io::traits::TrajectoryFile;
use crate::core::models::atom::Atom;
use crate::core::models::element::Element;
use crate::core::models::topology::Topology;
use crate::core::models::trajectory::{Frame, Trajectory, TrajectoryError};
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Frame {frame} declares {actual} atoms but the first frame has {expected}")]
    FrameAtomMismatch {
        frame: usize,
        actual: usize,
        expected: usize,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
    #[error("Inconsistent trajectory: {0}")]
    Inconsistency(#[from] TrajectoryError),
}

/// Multi-frame XYZ files: repeated blocks of an atom-count line, a comment
/// line, and `label x y z` rows.
///
/// XYZ carries no residue structure, so the reader groups all atoms into a
/// single residue (sequence number 1, name "MOL"); the label is kept as the
/// atom name and doubles as the element symbol (falling back to name-based
/// inference). Suitable for simple inputs and tests, not for residue-rich
/// systems.
pub struct XyzFile;

impl TrajectoryFile for XyzFile {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Trajectory, Self::Error> {
        let mut lines = reader.lines().enumerate();
        let mut topology = Topology::new();
        let mut frames: Vec<Frame> = Vec::new();

        loop {
            let Some((count_index, count_line)) = lines.next() else {
                break;
            };
            let count_line = count_line?;
            if count_line.trim().is_empty() {
                continue;
            }
            let declared: usize = count_line.trim().parse().map_err(|_| XyzError::Parse {
                line: count_index + 1,
                message: format!("expected an atom count, found '{}'", count_line.trim()),
            })?;
            if !frames.is_empty() && declared != topology.atom_count() {
                return Err(XyzError::FrameAtomMismatch {
                    frame: frames.len() + 1,
                    actual: declared,
                    expected: topology.atom_count(),
                });
            }

            // Comment line, ignored.
            if let Some((_, comment)) = lines.next() {
                comment?;
            }

            let building = frames.is_empty();
            let residue_index = if building {
                topology.add_residue(1, "MOL", 'A')
            } else {
                0
            };
            // The declared count is untrusted input; cap the pre-allocation
            // so a bogus huge count fails as a truncated frame instead of an
            // oversized allocation.
            let mut coords = Vec::with_capacity(declared.min(1024));
            for _ in 0..declared {
                let (row_index, row) = lines.next().ok_or_else(|| XyzError::Parse {
                    line: count_index + 1,
                    message: format!("frame truncated: expected {declared} atom rows"),
                })?;
                let row = row?;
                let mut parts = row.split_whitespace();
                let label = parts.next().ok_or_else(|| XyzError::Parse {
                    line: row_index + 1,
                    message: "missing atom label".into(),
                })?;
                let mut parse_coord = |axis: &str| -> Result<f64, XyzError> {
                    let value = parts.next().ok_or_else(|| XyzError::Parse {
                        line: row_index + 1,
                        message: format!("missing {axis} coordinate"),
                    })?;
                    value.parse().map_err(|_| XyzError::Parse {
                        line: row_index + 1,
                        message: format!("invalid {axis} coordinate '{value}'"),
                    })
                };
                let x = parse_coord("x")?;
                let y = parse_coord("y")?;
                let z = parse_coord("z")?;

                if building {
                    let element = label
                        .parse()
                        .unwrap_or_else(|_| Element::infer_from_atom_name(label));
                    topology.add_atom_to_residue(residue_index, Atom::new(label, element));
                }
                coords.push(Point3::new(x, y, z));
            }
            frames.push(coords);
        }

        if topology.atom_count() == 0 {
            return Err(XyzError::MissingRecord("atom rows".into()));
        }

        Ok(Trajectory::new(topology, frames)?)
    }

    fn write_to(trajectory: &Trajectory, writer: &mut impl Write) -> Result<(), Self::Error> {
        let topology = trajectory.topology();
        for (frame_index, coords) in trajectory.frames().iter().enumerate() {
            writeln!(writer, "{}", topology.atom_count())?;
            writeln!(writer, "frame {}", frame_index + 1)?;
            for (atom, position) in topology.atoms().iter().zip(coords) {
                writeln!(
                    writer,
                    "{} {:.6} {:.6} {:.6}",
                    atom.name, position.x, position.y, position.z
                )?;
            }
        }
        Ok(())
    }
}
