#![forbid(unsafe_code)]

//! Ordered list editor with bounded undo history.
//!
//! [`ListEditor`] owns the visible list and its history. Every mutation
//! method follows the same flow: validate, construct an [`EditCommand`],
//! apply it, push it onto the history. Undo pops the newest command and
//! reverts it against the list.
//!
//! The editor is single-writer and synchronous: no interior mutability, no
//! suspension points. A mutation either fully applies and records a history
//! entry, or changes nothing at all.
//!
//! Move operations are guarded rather than fallible: an out-of-range
//! `move_up`/`move_down` is a defined no-op, matching the
//! button-enablement model where a UI disables invalid moves up front via
//! [`ListEditor::can_move_up`] and [`ListEditor::can_move_down`].

use std::fmt;

use crate::command::EditCommand;
use crate::error::EditResult;
use crate::history::BoundedHistory;

/// An ordered, index-addressable list of `T` with bounded undo.
pub struct ListEditor<T> {
    /// The visible list.
    items: Vec<T>,
    /// Applied commands available for undo, newest first.
    history: BoundedHistory<EditCommand<T>>,
}

impl<T> fmt::Debug for ListEditor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListEditor")
            .field("items", &self.items.len())
            .field("undo_depth", &self.history.len())
            .field("undo_capacity", &self.history.capacity())
            .finish()
    }
}

impl<T> ListEditor<T> {
    /// Create an editor over an empty list.
    ///
    /// `undo_capacity` bounds the history; zero disables undo entirely.
    #[must_use]
    pub fn new(undo_capacity: usize) -> Self {
        Self::with_items(Vec::new(), undo_capacity)
    }

    /// Create an editor seeded with `items`.
    #[must_use]
    pub fn with_items(items: Vec<T>, undo_capacity: usize) -> Self {
        Self {
            items,
            history: BoundedHistory::new(undo_capacity),
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append `item` at the tail of the list. Always succeeds.
    pub fn add_item(&mut self, item: T) {
        let mut cmd = EditCommand::insert(item);
        // A fresh insert cannot fail; the check keeps pushes paired 1:1
        // with applied mutations.
        if cmd.apply(&mut self.items).is_ok() {
            tracing::debug!(len = self.items.len(), "appended item");
            self.history.push(cmd);
        }
    }

    /// Remove the item at `index`.
    ///
    /// Fails with [`EditError::IndexOutOfRange`](crate::EditError) when
    /// `index` is outside the list; nothing is mutated or recorded in that
    /// case.
    pub fn remove_item(&mut self, index: usize) -> EditResult {
        let mut cmd = EditCommand::remove(index);
        cmd.apply(&mut self.items)?;
        tracing::debug!(index, len = self.items.len(), "removed item");
        self.history.push(cmd);
        Ok(())
    }

    /// Swap the item at `index` with its predecessor.
    ///
    /// A no-op unless `1 <= index < len`: no mutation, no history entry.
    pub fn move_up(&mut self, index: usize) {
        if !self.can_move_up(index) {
            tracing::trace!(index, len = self.items.len(), "move_up ignored");
            return;
        }
        let mut cmd = EditCommand::swap_adjacent(index - 1);
        if cmd.apply(&mut self.items).is_ok() {
            self.history.push(cmd);
        }
    }

    /// Swap the item at `index` with its successor.
    ///
    /// A no-op unless `index + 1 < len`: no mutation, no history entry.
    pub fn move_down(&mut self, index: usize) {
        if !self.can_move_down(index) {
            tracing::trace!(index, len = self.items.len(), "move_down ignored");
            return;
        }
        let mut cmd = EditCommand::swap_adjacent(index);
        if cmd.apply(&mut self.items).is_ok() {
            self.history.push(cmd);
        }
    }

    /// Pop the newest command and revert it against the list.
    ///
    /// Fails with [`EditError::EmptyHistory`](crate::EditError) when no
    /// commands remain; the history failure propagates unchanged, and
    /// callers should gate on [`ListEditor::can_undo`].
    pub fn undo(&mut self) -> EditResult {
        let cmd = self.history.pop()?;
        tracing::debug!(command = cmd.name(), "undoing");
        cmd.revert(&mut self.items)
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    /// Whether at least one command is available for undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether `move_up(index)` would mutate the list.
    #[must_use]
    pub fn can_move_up(&self, index: usize) -> bool {
        index >= 1 && index < self.items.len()
    }

    /// Whether `move_down(index)` would mutate the list.
    #[must_use]
    pub fn can_move_down(&self, index: usize) -> bool {
        index < self.items.len().saturating_sub(1)
    }

    /// Read-only view of the list.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of commands currently available for undo.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// The undo bound fixed at construction.
    #[must_use]
    pub fn undo_capacity(&self) -> usize {
        self.history.capacity()
    }
}

// ============================================================================
// Tests
// ============================================================================
