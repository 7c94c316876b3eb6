use thiserror::Error;

/// Failures of the connection resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// A cursor that was not produced by `ArrayCursor::encode`.
    #[error("Cursor `{0}` is invalid.")]
    InvalidCursor(String),
    /// A negative page size.
    #[error("Argument `{argument}` must be a non-negative integer, got `{value}`.")]
    InvalidArgument {
        argument: &'static str,
        value: i32,
    },
}

/// Failure to decode a global ID.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ID `{0}` is not a valid global ID.")]
pub struct GlobalIdError(pub String);
