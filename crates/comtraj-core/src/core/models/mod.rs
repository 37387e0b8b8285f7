//! # Core Models Module
//!
//! Fundamental data structures for representing molecular-dynamics
//! trajectories: atoms, residues, the topology that groups them, and the
//! trajectory that pairs a topology with per-frame coordinates.
//!
//! ## Key Components
//!
//! - [`element`] - Chemical elements with the atomic masses used for weighting
//! - [`atom`] - Individual atom identity (name, element, owning residue)
//! - [`residue`] - Ordered atom groupings with source-file sequence numbers
//! - [`topology`] - The static atom/residue description shared across frames
//! - [`trajectory`] - Topology plus time-ordered coordinate frames
//!
//! ## Ordering Invariants
//!
//! The models are index-based rather than keyed: an atom's position in the
//! topology's atom list equals its column in every coordinate frame, and
//! residue order equals declaration order. [`trajectory::Trajectory::new`]
//! checks the frame/topology agreement; everything downstream relies on it.

pub mod atom;
pub mod element;
pub mod residue;
pub mod topology;
pub mod trajectory;
