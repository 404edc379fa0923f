//! # Core Module
//!
//! The fundamental building blocks for helix geometry analysis: pure
//! vector math, angle extraction, the rotation-angle root finder, and the
//! plain-text coordinate format shared by the command-line tools.
//!
//! ## Architecture
//!
//! - **Geometry** ([`geometry`]) - Bond/torsion angle extraction, the omega
//!   root finder, and supporting vector utilities
//! - **File I/O** ([`io`]) - The whitespace-separated coordinate trace
//!   format, with blank/malformed lines mapped to an "unavailable" marker

pub mod geometry;
pub mod io;
