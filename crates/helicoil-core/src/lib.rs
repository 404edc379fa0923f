//! # Helicoil Core Library
//!
//! A library for measuring the rotation angle of helices from backbone
//! coordinate traces, used to infer the periodicity of alpha-helices
//! (and other helical polymers) within protein structures.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers to keep the math reusable and the
//! public surface small:
//!
//! - **[`core`]: The Foundation.** Stateless geometry primitives (bond and
//!   torsion angles, the helix rotation-angle root finder, closest points on
//!   two lines) and the line-oriented coordinate reader used to exchange
//!   data between tools.
//!
//! - **[`workflows`]: The Public API.** The user-facing entry points that
//!   compose the geometry primitives into complete analyses: the
//!   four-point helix rotation angle, windowed omega profiles over whole
//!   chains with per-window failure isolation, and pairwise distance
//!   profiles.
//!
//! Every function in both layers is a pure computation: all inputs are
//! arguments, all outputs are return values, and there is no ambient state.

pub mod core;
pub mod workflows;
