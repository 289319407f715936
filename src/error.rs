use thiserror::Error;

pub type Result<T> = std::result::Result<T, LseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LseError {
    /// Input the log-space operations cannot give a meaningful answer for:
    /// an empty sequence, a NaN, or a distribution with no finite mass.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl LseError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        LseError::InvalidArgument {
            reason: reason.into(),
        }
    }
}
