use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Degenerate input: bond {pair} has zero length")]
    DegenerateInput { pair: usize },

    #[error("Root finder failed to converge after {iterations} iterations")]
    NonConvergence { iterations: usize },
}
