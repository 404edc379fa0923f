//! # Workflows Module
//!
//! The public, user-facing entry points of the library. Each workflow
//! composes the pure geometry primitives from [`crate::core`] into a
//! complete analysis over a chain of backbone positions, isolating
//! per-window failures so that one bad residue never aborts a batch.

pub mod distance;
pub mod helix;
