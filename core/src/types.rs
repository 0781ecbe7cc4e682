use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier the trivia source assigns to a category.
pub type CategoryId = u64;

/// Counter distinguishing successive board loads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LoadGeneration(u32);

impl LoadGeneration {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for LoadGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to one clue cell of a specific board.
///
/// The presentation layer holds these instead of indexing into whatever board happens to be current, so a cell
/// rendered for an older board can never resolve to a clue of a newer one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClueRef {
    pub generation: LoadGeneration,
    pub column: usize,
    pub row: usize,
}

impl ClueRef {
    pub const fn new(generation: LoadGeneration, column: usize, row: usize) -> Self {
        Self {
            generation,
            column,
            row,
        }
    }
}

impl fmt::Display for ClueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column {} row {} of board {}",
            self.column, self.row, self.generation
        )
    }
}
