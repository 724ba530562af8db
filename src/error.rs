use thiserror::Error;

/// Errors surfaced by the matching engine
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid profile {id}: {reason}")]
    InvalidProfile { id: String, reason: String },
}
