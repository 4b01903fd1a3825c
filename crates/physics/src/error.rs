use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f64),
    #[error("simulation has no bodies")]
    NoBodies,
    #[error("body index {index} out of range for {len} bodies")]
    BodyIndex { index: usize, len: usize },
}
