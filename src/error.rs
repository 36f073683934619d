//! Build-time errors

use core::fmt;

/// Error returned when a matcher cannot be built from its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// A pattern in the set was empty; carries the pattern's index in
    /// build order.
    EmptyPattern { index: usize },
    /// The wildcard mask was empty.
    EmptyMask,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BuildError::EmptyPattern { index } => {
                write!(f, "pattern at index {} is empty", index)
            }
            BuildError::EmptyMask => write!(f, "wildcard mask is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}
