use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("cannot {operation} while the episode is {phase}")]
    InvalidStateTransition {
        operation: &'static str,
        phase: &'static str,
    },
    #[error("simulation diverged at step {step}: non-finite observation")]
    NumericDivergence { step: u64 },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
