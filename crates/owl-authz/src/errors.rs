use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    #[error("invalid filter: {field} has no variant for code {code}")]
    InvalidFilter { field: &'static str, code: i32 },
    #[error("unknown filter: {field} must not be Unknown")]
    UnknownFilter { field: &'static str },
    #[error("invalid action: {0}")]
    InvalidAction(String),
}

pub type AuthzResult<T> = Result<T, AuthzError>;
