use thiserror::Error;

/// Reasons a `Pagination` can not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// A field expected an integer but got another kind of value,
    /// carries the name of the type that was given
    #[error("The field requires an integer, but a `{0}` is provided")]
    InvalidIntegerType(String),
    /// An integer is outside of its allowed range,
    /// carries the offending value
    #[error("The provided value must be a positive integer, but `{0}` is provided")]
    PositiveIntegerRequired(i64),
}

impl PaginationError {
    /// Wrong type error from anything displaying a type name
    pub(crate) fn invalid_type<S: Into<String>>(given: S) -> Self {
        Self::InvalidIntegerType(given.into())
    }
}
