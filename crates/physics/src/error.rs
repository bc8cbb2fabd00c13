use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    #[error("unknown vessel kind: {0:?} (expected \"sailboat\" or \"motorboat\")")]
    UnknownVesselKind(String),
}
