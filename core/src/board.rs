use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Named column of clues. The clue list is fixed once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(id: CategoryId, title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            id,
            title: title.into(),
            clues,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title as shown in the column header.
    pub fn header(&self) -> String {
        self.title.to_uppercase()
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn clue(&self, row: usize) -> Option<&Clue> {
        self.clues.get(row)
    }

    pub(crate) fn truncate(mut self, len: usize) -> Self {
        self.clues.truncate(len);
        self
    }
}

/// All categories of one game, in display column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn columns(&self) -> usize {
        self.categories.len()
    }

    pub fn rows(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.clues.len())
            .max()
            .unwrap_or(0)
    }

    pub fn clue(&self, column: usize, row: usize) -> Option<&Clue> {
        self.categories.get(column)?.clue(row)
    }

    /// Applies one reveal step to the clue at `(column, row)`, `None` if there is no such clue.
    pub fn reveal(&mut self, column: usize, row: usize) -> Option<RevealOutcome> {
        let clue = self.categories.get_mut(column)?.clues.get_mut(row)?;
        Some(clue.reveal())
    }

    fn iter_clues(&self) -> impl Iterator<Item = &Clue> {
        self.categories.iter().flat_map(|category| category.clues.iter())
    }

    pub fn total_clues(&self) -> usize {
        self.iter_clues().count()
    }

    /// Number of clues showing their answer.
    pub fn answered_count(&self) -> usize {
        self.iter_clues()
            .filter(|clue| clue.state().is_terminal())
            .count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.iter_clues().all(|clue| clue.state().is_terminal())
    }
}
