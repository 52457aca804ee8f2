//! Module containing the errors emitted by bicycle
//!
//! Only construction can fail. Once a [crate::BiCycle] exists, stepping it never errors.
use std::fmt::{Debug, Display};

/// Errors that may occur when creating a [crate::BiCycle]
#[derive(PartialEq, Eq, Clone)]
pub enum Error {
    /// The elements and starting index passed can't be cycled through
    InvalidArgument(InvalidArgument),
}

/// The reason behind an [Error::InvalidArgument]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InvalidArgument {
    /// There are no elements to cycle through
    EmptySequence,
    /// The starting index doesn't point into the elements
    StartOutOfRange {
        /// The index that was passed
        index: usize,
        /// Number of elements
        len: usize,
    },
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "Cannot cycle through an empty sequence."),
            Self::StartOutOfRange { index, len } => write!(
                f,
                "Starting index {} is out of range for a sequence of length {}.",
                index, len
            ),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for Error {}

impl From<InvalidArgument> for Error {
    fn from(value: InvalidArgument) -> Self {
        Self::InvalidArgument(value)
    }
}
