//! # Core Module
//!
//! The computational core of comtraj: data models for trajectories, the
//! residue-level reduction algorithms, and trajectory file I/O.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, residues, topologies,
//!   and trajectories, with the index-based ordering invariants the reduction
//!   relies on
//! - **Reduction** ([`reduce`]) - The selection predicate, topology reducer,
//!   and mass-weighted center-of-mass aggregator
//! - **File I/O** ([`io`]) - Reading/writing trajectory file formats with
//!   extension-based dispatch

pub mod io;
pub mod models;
pub mod reduce;
