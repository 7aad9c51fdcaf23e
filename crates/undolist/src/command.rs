#![forbid(unsafe_code)]

//! Reversible edit commands over an ordered list.
//!
//! [`EditCommand`] is a tagged union of the mutations the editor supports.
//! Each variant carries exactly the state needed to revert itself after it
//! has been applied; nothing more is captured, so history entries stay
//! small regardless of list size.
//!
//! # Invariants
//!
//! - `apply` followed immediately by `revert` on the same list restores the
//!   prior sequence exactly, for every variant and valid input
//! - A command records undo state during `apply` (the insertion index, the
//!   removed item); `revert` consumes the command, so it can never run twice
//!
//! # Failure modes
//!
//! - Out-of-range index: `apply`/`revert` return
//!   [`EditError::IndexOutOfRange`] instead of touching the list
//! - Lifecycle misuse (double apply, revert before apply):
//!   [`EditError::InvalidState`]

use crate::error::{EditError, EditResult};

/// A single reversible mutation of an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand<T> {
    /// Append an item at the tail of the list.
    Insert {
        /// The item to append. `Some` until the command is applied, which
        /// moves it into the list.
        item: Option<T>,
        /// Index the item landed at, recorded by [`EditCommand::apply`].
        index: usize,
    },
    /// Remove the item at `index`.
    Remove {
        index: usize,
        /// The removed item, recorded by [`EditCommand::apply`] so that
        /// `revert` can reinsert it.
        removed: Option<T>,
    },
    /// Swap the items at `lower` and `lower + 1`. Self-inverse.
    SwapAdjacent { lower: usize },
}

impl<T> EditCommand<T> {
    /// An append of `item` at the tail of the list.
    #[must_use]
    pub fn insert(item: T) -> Self {
        Self::Insert {
            item: Some(item),
            index: 0,
        }
    }

    /// A removal of the item at `index`.
    #[must_use]
    pub fn remove(index: usize) -> Self {
        Self::Remove {
            index,
            removed: None,
        }
    }

    /// A swap of the adjacent items at `lower` and `lower + 1`.
    #[must_use]
    pub fn swap_adjacent(lower: usize) -> Self {
        Self::SwapAdjacent { lower }
    }

    /// Short operation label for log events and debugging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Remove { .. } => "remove",
            Self::SwapAdjacent { .. } => "swap-adjacent",
        }
    }

    /// Apply the forward mutation to `items`, recording undo state.
    ///
    /// The editor validates indices before constructing commands, so the
    /// bounds checks here only reject commands built by hand with stale or
    /// out-of-range indices.
    pub fn apply(&mut self, items: &mut Vec<T>) -> EditResult {
        match self {
            Self::Insert { item, index } => {
                let Some(value) = item.take() else {
                    return Err(EditError::InvalidState(
                        "insert applied twice".to_string(),
                    ));
                };
                items.push(value);
                *index = items.len() - 1;
                Ok(())
            }
            Self::Remove { index, removed } => {
                if *index >= items.len() {
                    return Err(EditError::IndexOutOfRange {
                        index: *index,
                        length: items.len(),
                    });
                }
                *removed = Some(items.remove(*index));
                Ok(())
            }
            Self::SwapAdjacent { lower } => {
                let upper = lower.saturating_add(1);
                if upper >= items.len() {
                    return Err(EditError::IndexOutOfRange {
                        index: upper,
                        length: items.len(),
                    });
                }
                items.swap(*lower, upper);
                Ok(())
            }
        }
    }

    /// Reverse a previously applied mutation, consuming the command.
    ///
    /// Undo pops each command exactly once; taking `self` by value makes a
    /// second revert unrepresentable.
    pub fn revert(self, items: &mut Vec<T>) -> EditResult {
        match self {
            Self::Insert { item: Some(_), .. } => Err(EditError::InvalidState(
                "insert reverted before apply".to_string(),
            )),
            Self::Insert { item: None, index } => {
                if index >= items.len() {
                    return Err(EditError::IndexOutOfRange {
                        index,
                        length: items.len(),
                    });
                }
                items.remove(index);
                Ok(())
            }
            Self::Remove {
                index,
                removed: Some(item),
            } => {
                if index > items.len() {
                    return Err(EditError::IndexOutOfRange {
                        index,
                        length: items.len(),
                    });
                }
                items.insert(index, item);
                Ok(())
            }
            Self::Remove { removed: None, .. } => Err(EditError::InvalidState(
                "remove reverted before apply".to_string(),
            )),
            Self::SwapAdjacent { lower } => {
                let upper = lower.saturating_add(1);
                if upper >= items.len() {
                    return Err(EditError::IndexOutOfRange {
                        index: upper,
                        length: items.len(),
                    });
                }
                items.swap(lower, upper);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
