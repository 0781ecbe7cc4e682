#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use error::*;
pub use loader::*;
pub use selector::*;
pub use session::*;
pub use types::*;

mod board;
mod clue;
mod error;
mod loader;
mod selector;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: usize,
    pub clues_per_category: usize,
}

impl GameConfig {
    pub const DEFAULT_CATEGORIES: usize = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: usize = 5;
    pub const MAX_CATEGORIES: usize = 20;
    pub const MAX_CLUES_PER_CATEGORY: usize = 10;

    pub const fn new_unchecked(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }

    pub fn new(categories: usize, clues_per_category: usize) -> Self {
        let categories = categories.clamp(1, Self::MAX_CATEGORIES);
        let clues_per_category = clues_per_category.clamp(1, Self::MAX_CLUES_PER_CATEGORY);
        Self::new_unchecked(categories, clues_per_category)
    }

    pub const fn total_clues(&self) -> usize {
        self.categories * self.clues_per_category
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_CATEGORIES, Self::DEFAULT_CLUES_PER_CATEGORY)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The clue moved to showing its question.
    ShowQuestion,
    /// The clue moved to showing its answer.
    ShowAnswer,
    NoChange,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            ShowQuestion => true,
            ShowAnswer => true,
            NoChange => false,
        }
    }
}
