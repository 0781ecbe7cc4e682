use crate::*;
pub use random::*;

mod random;

/// Picks which categories go on a board.
pub trait CategorySelector {
    /// Chooses `count` distinct identifiers out of `pool`.
    fn select(self, pool: &[CategoryId], count: usize) -> Result<alloc::vec::Vec<CategoryId>>;
}
