//! # Workflows Module
//!
//! High-level entry points that tie the core models, reduction algorithms,
//! and I/O together into complete transformations.
//!
//! - **Reduction Workflow** ([`reduce`]) - The full center-of-mass pipeline:
//!   reduced topology, COM array, alignment contract check, and assembly of
//!   the output trajectory.

pub mod reduce;
