//! # comtraj Core Library
//!
//! A library for reducing molecular-dynamics trajectories to one
//! mass-weighted center-of-mass (COM) point per residue per frame, producing
//! a smaller trajectory with a correspondingly reduced topology.
//!
//! ## Architectural Philosophy
//!
//! The library separates stateless data models from the algorithms that
//! consume them:
//!
//! - **[`core`]: The Foundation.** Contains the trajectory data models
//!   (`Topology`, `Trajectory`), the reduction primitives (selection,
//!   topology reducer, COM aggregator), and trajectory file I/O.
//!
//! - **[`workflows`]: The Public API.** The user-facing layer that composes
//!   the reduction primitives into a complete pipeline, including the
//!   alignment contract check between the reduced topology and the COM
//!   array. Most users only need [`workflows::reduce::run`] together with
//!   [`core::io::load_trajectory`] and [`core::io::save_trajectory`].

pub mod core;
pub mod workflows;
