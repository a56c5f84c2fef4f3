/// The error type for the construction of model values.
///
/// These errors are local to the value that is constructed. They are never caused by the state of
/// the persistence layer and retrying the construction with the same input yields the same error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The raw input cannot be turned into the requested value.
    #[error("invalid input for {value_type}: {reason}")]
    InvalidInput {
        /// The type of value that was constructed.
        value_type: &'static str,
        /// The reason the input was rejected.
        reason: &'static str,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
