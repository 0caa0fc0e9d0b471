//! Error types for podium_lab.

use std::fmt;

/// Result type alias for podium_lab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for triangle construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A side length is NaN or infinite. `position` is zero-based.
    NonFiniteSide { position: usize, value: f64 },
    /// The first side is shorter than one of the other two.
    FirstSideNotLongest { first: f64, second: f64, third: f64 },
    /// The longest side is not strictly shorter than the sum of the others.
    TriangleInequality { first: f64, second: f64, third: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteSide { position, value } => {
                write!(f, "Side is not a finite number: side {position} is {value}")
            }
            Self::FirstSideNotLongest {
                first,
                second,
                third,
            } => {
                write!(
                    f,
                    "First side is not the longest: ({first}, {second}, {third})"
                )
            }
            Self::TriangleInequality {
                first,
                second,
                third,
            } => {
                write!(
                    f,
                    "Does not satisfy triangle inequality: {first} >= {second} + {third}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
