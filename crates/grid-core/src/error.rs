use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid namespace '{namespace}': {reason}")]
    InvalidNamespace {
        namespace: String,
        reason: &'static str,
    },
}
