use crate::kind::ElementKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListError {
    #[error("out of memory while allocating a node")]
    OutOfMemory,
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    #[error("expected a {expected} element, found {found}")]
    KindMismatch { expected: ElementKind, found: ElementKind },
    #[error("list is empty")]
    Empty,
    #[error("node handle does not refer to a live node of this list")]
    StaleHandle,
    #[error("string is empty")]
    EmptyString,
    #[error("invalid string size {0}")]
    InvalidSize(isize),
    #[error("no terminator found after scanning {scanned} bytes")]
    Unterminated { scanned: usize },
}

impl ListError {
    pub fn description(&self) -> &'static str {
        match self {
            Self::OutOfMemory => "Out of memory",
            Self::IndexOutOfRange { .. } => "Index out of range",
            Self::KindMismatch { .. } => "Wrong element kind",
            Self::Empty => "Empty list",
            Self::StaleHandle => "Stale node handle",
            Self::EmptyString => "Empty string",
            Self::InvalidSize(_) => "Invalid string size",
            Self::Unterminated { .. } => "Unterminated string",
        }
    }
}
