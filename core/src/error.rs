use alloc::string::String;
use thiserror::Error;

use crate::{CategoryId, ClueRef};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Trivia source unreachable: {0}")]
    Unreachable(String),
    #[error("Trivia source answered with HTTP status {0}")]
    Status(u16),
    #[error("Trivia source did not answer in time")]
    Timeout,
    #[error("Malformed trivia data: {0}")]
    Malformed(String),
    #[error("Category {category} has {found} clues, {needed} needed")]
    TooFewClues {
        category: CategoryId,
        found: usize,
        needed: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Requested {requested} categories but only {available} are available")]
    InsufficientPool { requested: usize, available: usize },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("No clue at {0}")]
    InvalidReference(ClueRef),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        use alloc::string::ToString;
        Self::Malformed(err.to_string())
    }
}

pub type Result<T> = core::result::Result<T, BoardError>;
