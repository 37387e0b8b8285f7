use crate::core::io::traits::TrajectoryFile;
use crate::core::models::atom::Atom;
use crate::core::models::element::Element;
use crate::core::models::topology::Topology;
use crate::core::models::trajectory::{Frame, Trajectory, TrajectoryError};
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("MODEL {model} has {actual} atoms but the first model has {expected}")]
    ModelAtomMismatch {
        model: usize,
        actual: usize,
        expected: usize,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
    #[error("Inconsistent trajectory: {0}")]
    Inconsistency(#[from] TrajectoryError),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

/// Multi-model PDB files: MODEL/ENDMDL records delimit frames, a file
/// without MODEL records is a single frame. The topology is built from the
/// first model; later models contribute coordinates only and must repeat
/// the same atom count.
pub struct PdbFile;

impl TrajectoryFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Trajectory, Self::Error> {
        let mut topology = Topology::new();
        let mut frames: Vec<Frame> = Vec::new();
        let mut current_frame: Frame = Vec::new();
        // Chain id and residue sequence number together identify a residue.
        let mut current_residue: Option<(char, isize)> = None;
        let mut current_residue_index = 0;

        fn flush_frame(
            frames: &mut Vec<Frame>,
            current_frame: &mut Frame,
            expected: usize,
        ) -> Result<(), PdbError> {
            if current_frame.is_empty() {
                return Ok(());
            }
            if !frames.is_empty() && current_frame.len() != expected {
                return Err(PdbError::ModelAtomMismatch {
                    model: frames.len() + 1,
                    actual: current_frame.len(),
                    expected,
                });
            }
            frames.push(std::mem::take(current_frame));
            Ok(())
        }

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let record_type = slice_and_trim(&line, 0, 6);

            match record_type {
                "ATOM" | "HETATM" => {
                    let name_str = slice_and_trim(&line, 12, 16);
                    if name_str.is_empty() {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::MissingRequiredField {
                                columns: "13-16".into(),
                            },
                        });
                    }
                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_id = line.chars().nth(21).unwrap_or(' ');
                    let res_seq_str = slice_and_trim(&line, 22, 26);
                    let res_seq: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "23-26".into(),
                            value: res_seq_str.into(),
                        },
                    })?;
                    let x = parse_float(&line, line_num, 30, 38)?;
                    let y = parse_float(&line, line_num, 38, 46)?;
                    let z = parse_float(&line, line_num, 46, 54)?;

                    // Only the first model defines the topology.
                    if frames.is_empty() {
                        if current_residue != Some((chain_id, res_seq)) {
                            current_residue_index =
                                topology.add_residue(res_seq, res_name_str, chain_id);
                            current_residue = Some((chain_id, res_seq));
                        }
                        let element_str = slice_and_trim(&line, 76, 78);
                        let element = if element_str.is_empty() {
                            Element::infer_from_atom_name(name_str)
                        } else {
                            element_str.parse().unwrap_or(Element::Unknown)
                        };
                        topology.add_atom_to_residue(
                            current_residue_index,
                            Atom::new(name_str, element),
                        );
                    }
                    current_frame.push(Point3::new(x, y, z));
                }
                "MODEL" => {
                    flush_frame(&mut frames, &mut current_frame, topology.atom_count())?;
                }
                "ENDMDL" => {
                    flush_frame(&mut frames, &mut current_frame, topology.atom_count())?;
                }
                "END" => break,
                _ => {}
            }
        }
        flush_frame(&mut frames, &mut current_frame, topology.atom_count())?;

        if topology.atom_count() == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }

        Ok(Trajectory::new(topology, frames)?)
    }

    fn write_to(trajectory: &Trajectory, writer: &mut impl Write) -> Result<(), Self::Error> {
        let topology = trajectory.topology();
        for (frame_index, coords) in trajectory.frames().iter().enumerate() {
            writeln!(writer, "MODEL     {:>4}", frame_index + 1)?;
            for (atom_index, atom) in topology.atoms().iter().enumerate() {
                let residue = &topology.residues()[atom.residue_index];
                let position = &coords[atom_index];
                // Truncate by characters, not bytes; a multi-byte label must
                // not split mid-char.
                let name = if atom.name.chars().count() >= 4 {
                    atom.name.chars().take(4).collect()
                } else {
                    format!(" {:<3}", atom.name)
                };
                let element = match atom.element {
                    Element::Unknown => "",
                    _ => atom.element.symbol(),
                };
                writeln!(
                    writer,
                    "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
                    atom_index + 1,
                    name,
                    residue.name,
                    residue.chain_id,
                    residue.seq,
                    position.x,
                    position.y,
                    position.z,
                    1.00,
                    0.00,
                    element,
                )?;
            }
            writeln!(writer, "ENDMDL")?;
        }
        writeln!(writer, "END")?;
        Ok(())
    }
}
