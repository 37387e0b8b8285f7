//! Residue-level trajectory reduction primitives.
//!
//! Two independent pieces that share only the original topology as input:
//!
//! - [`topology`] - builds a reduced topology of representative atoms chosen
//!   by a [`selection::Selection`] predicate;
//! - [`com`] - computes the per-residue, per-frame mass-weighted centroid
//!   array over the full coordinate data.
//!
//! The reduction workflow composes them and enforces the alignment contract
//! between their outputs; see [`crate::workflows::reduce`].

pub mod com;
pub mod selection;
pub mod topology;
