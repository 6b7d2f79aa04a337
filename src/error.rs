use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::result;

/// Convenience alias for results produced by the fail-fast constructors.
pub type Result<T> = result::Result<T, ContainerError>;

/// Enum with all possible errors the container types can raise.
///
/// Constructor validation is the only error source in this crate: absence of
/// a value, or selection of the left side, is first-class container state and
/// never an error. Failures raised inside caller-supplied transforms are not
/// represented here; they unwind through the combinators untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// A fail-fast constructor was handed an absent value where a present
    /// value is required. Carries the name of the rejecting constructor.
    NullValue(&'static str),
}

impl Display for ContainerError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::NullValue(constructor) => {
                write!(
                    fmt,
                    "{} requires a present value but was given an absent one",
                    constructor
                )
            }
        }
    }
}

impl Error for ContainerError {}
