#![forbid(unsafe_code)]

//! Bounded-undo command engine for ordered list editing.
//!
//! This crate implements the Command Pattern over an in-memory ordered list:
//! every mutation is a reversible [`EditCommand`], and applied commands are
//! recorded in a fixed-capacity [`BoundedHistory`] so the most recent edits
//! can be undone without the history ever growing unbounded.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      ListEditor<T>                       │
//! │                                                          │
//! │   items: Vec<T>          history: BoundedHistory<Cmd>    │
//! │   ┌───┬───┬───┐          ┌──────────────┐ newest         │
//! │   │ a │ b │ c │          │ SwapAdjacent │ ◄── push/pop   │
//! │   └───┴───┴───┘          ├──────────────┤                │
//! │         ▲                │ Insert       │                │
//! │         │ apply/revert   ├──────────────┤                │
//! │         └─────────────── │ Remove       │ oldest         │
//! │                          └──────────────┘ (evicted       │
//! │                                            when full)    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Each mutation method constructs a command, applies it to the list, and
//! pushes it onto the history; pushes are always 1:1 with applied
//! mutations. [`ListEditor::undo`] pops the newest command and reverts it.
//! A popped command is consumed; there is no redo stack.
//!
//! # Quick start
//!
//! ```
//! use undolist::ListEditor;
//!
//! let mut editor = ListEditor::with_items(vec!["draft agenda", "book room"], 20);
//! editor.add_item("send invites");
//! assert_eq!(editor.items(), ["draft agenda", "book room", "send invites"]);
//!
//! editor.move_up(2);
//! assert_eq!(editor.items(), ["draft agenda", "send invites", "book room"]);
//!
//! editor.undo()?;
//! editor.undo()?;
//! assert_eq!(editor.items(), ["draft agenda", "book room"]);
//! assert!(!editor.can_undo());
//! # Ok::<(), undolist::EditError>(())
//! ```
//!
//! # Design notes
//!
//! - Commands are a tagged union, not trait objects: the variant set is
//!   closed and the dispatch is a plain `match`.
//! - The history is backed by a `VecDeque` so push, evict-oldest, and pop
//!   are all O(1); these run on every user-facing edit.
//! - The library emits `tracing` events on state changes but never installs
//!   a subscriber; that belongs to the consuming application.

pub mod command;
pub mod editor;
pub mod error;
pub mod history;

pub use command::EditCommand;
pub use editor::ListEditor;
pub use error::{EditError, EditResult};
pub use history::BoundedHistory;
