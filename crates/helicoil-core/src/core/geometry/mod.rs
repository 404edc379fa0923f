//! Stateless geometric primitives for backbone traces.
//!
//! Everything here is a pure function over [`nalgebra`] points and vectors:
//! the angle extractor that turns four consecutive backbone positions into
//! two bond angles and a signed torsion, the bisection root finder that
//! converts those angles into the helix rotation angle omega, and the
//! closest-approach solver for two lines in space.

pub mod angles;
pub mod error;
pub mod lines;
pub mod omega;
pub mod vector;
