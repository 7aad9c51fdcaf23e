#![forbid(unsafe_code)]

//! Error types for history and editor operations.

use std::fmt;

/// Result alias for fallible history and editor operations.
pub type EditResult<T = ()> = Result<T, EditError>;

/// Errors surfaced by the history stack and the list editor.
///
/// Guard-rejected moves (`move_up`/`move_down` with an out-of-range index)
/// are defined no-ops, not errors, and never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Undo was requested with no recorded commands.
    ///
    /// Recoverable: callers are expected to gate on
    /// [`ListEditor::can_undo`](crate::ListEditor::can_undo) first.
    EmptyHistory,
    /// An index was outside the current bounds of the list.
    IndexOutOfRange { index: usize, length: usize },
    /// A command was used outside its lifecycle (applied twice, or reverted
    /// before being applied).
    InvalidState(String),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHistory => write!(f, "no commands to undo"),
            Self::IndexOutOfRange { index, length } => {
                write!(f, "index {} out of range (length {})", index, length)
            }
            Self::InvalidState(msg) => write!(f, "invalid state: {}", msg),
        }
    }
}

impl std::error::Error for EditError {}
