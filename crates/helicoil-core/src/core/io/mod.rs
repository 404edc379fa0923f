//! Readers for the plain-text formats the analysis tools pipe between
//! processes.

pub mod coords;
