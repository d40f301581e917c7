//! Coordinate string parsing.
//!
//! Artifacts and lookup requests are written as colon separated coordinates,
//! the same shape build tools print them in:
//! - artifact: `group:artifact:type[:classifier]:version`
//! - query:    `group:artifact[:type[:classifier]]`

use std::fmt;

/// Error returned when a coordinate string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// The input was empty or only whitespace.
    Empty,
    /// Wrong number of `:` separated segments.
    SegmentCount {
        input: String,
        found: usize,
        expected: &'static str,
    },
    /// A segment that must carry a value was empty.
    EmptySegment { input: String, segment: &'static str },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::Empty => write!(f, "empty artifact coordinates"),
            CoordinateError::SegmentCount {
                input,
                found,
                expected,
            } => write!(
                f,
                "invalid artifact coordinates {:?}: found {} segments, expected {}",
                input, found, expected
            ),
            CoordinateError::EmptySegment { input, segment } => {
                write!(f, "invalid artifact coordinates {:?}: empty {}", input, segment)
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Split a coordinate string on `:` and trim every segment.
pub(crate) fn split_segments(input: &str) -> Result<Vec<&str>, CoordinateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoordinateError::Empty);
    }
    Ok(trimmed.split(':').map(str::trim).collect())
}
