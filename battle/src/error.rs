use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    /// Malformed or impossible session state; rejected, never corrected
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BattleError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
