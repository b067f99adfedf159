// src/store/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Unknown store action type: {0}")]
    UnknownAction(String),
    #[error("Unknown store field: {0}")]
    UnknownField(String),
    #[error("{kind} is missing its {field}")]
    MissingPayload { kind: &'static str, field: &'static str },
}
