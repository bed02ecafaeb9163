use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),
    #[error("No replacement policies selected")]
    EmptyPolicySelection,
    #[error("Unrecognized replacement policy: {0}")]
    UnknownPolicy(String),
}
