use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("ObjectId is written in the wrong format")]
    InvalidIdentifier,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Document store failure: {0}")]
    Store(String),

    #[error("Malformed document in store: {0}")]
    MalformedDocument(String),
}

impl CoreError {
    /// Infrastructure failures are the only errors that are not the caller's fault.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, CoreError::Store(_) | CoreError::MalformedDocument(_))
    }
}
