#![forbid(unsafe_code)]

//! End-to-end tests for the list editor public API.
//!
//! Validates:
//! - Undo restores the exact prior list after every mutation kind
//! - Guard-rejected moves change neither the list nor the history
//! - The history bound holds under repeated edits, and exhausting it
//!   surfaces `EmptyHistory`
//! - A realistic editing session (seeded list, interleaved edits and undos)

use undolist::{EditError, ListEditor};

// ============================================================================
// Undo restores exact prior state
// ============================================================================

#[test]
fn add_then_undo_restores_list_and_disables_undo() {
    let mut editor = ListEditor::with_items(vec!["a", "b", "c"], 8);

    editor.add_item("d");
    assert_eq!(editor.items(), ["a", "b", "c", "d"]);
    assert!(editor.can_undo());

    editor.undo().unwrap();
    assert_eq!(editor.items(), ["a", "b", "c"]);
    assert!(!editor.can_undo());
}

#[test]
fn remove_then_undo_reinserts_at_original_position() {
    let mut editor = ListEditor::with_items(vec!["a", "b", "c"], 8);

    editor.remove_item(1).unwrap();
    assert_eq!(editor.items(), ["a", "c"]);

    editor.undo().unwrap();
    assert_eq!(editor.items(), ["a", "b", "c"]);
}

#[test]
fn move_down_then_undo_restores_order() {
    let mut editor = ListEditor::with_items(vec!["a", "b", "c"], 8);

    editor.move_down(0);
    assert_eq!(editor.items(), ["b", "a", "c"]);

    editor.undo().unwrap();
    assert_eq!(editor.items(), ["a", "b", "c"]);
}

#[test]
fn interleaved_mutations_undo_in_reverse_order() {
    let mut editor = ListEditor::with_items(vec![10, 20, 30], 16);

    editor.add_item(40); // [10, 20, 30, 40]
    editor.move_up(3); // [10, 20, 40, 30]
    editor.remove_item(0).unwrap(); // [20, 40, 30]
    assert_eq!(editor.undo_depth(), 3);

    editor.undo().unwrap();
    assert_eq!(editor.items(), [10, 20, 40, 30]);
    editor.undo().unwrap();
    assert_eq!(editor.items(), [10, 20, 30, 40]);
    editor.undo().unwrap();
    assert_eq!(editor.items(), [10, 20, 30]);
    assert!(!editor.can_undo());
}

// ============================================================================
// Guards and invalid input
// ============================================================================

#[test]
fn boundary_moves_are_noops_without_history_entries() {
    let mut editor = ListEditor::with_items(vec!["a", "b", "c"], 8);

    editor.move_up(0);
    assert_eq!(editor.items(), ["a", "b", "c"]);
    assert!(!editor.can_undo());

    editor.move_down(2);
    assert_eq!(editor.items(), ["a", "b", "c"]);
    assert!(!editor.can_undo());
}

#[test]
fn remove_out_of_range_is_an_error_not_a_mutation() {
    let mut editor = ListEditor::with_items(vec!["only"], 8);

    let err = editor.remove_item(1).unwrap_err();
    assert_eq!(
        err,
        EditError::IndexOutOfRange {
            index: 1,
            length: 1
        }
    );
    assert_eq!(editor.items(), ["only"]);
    assert!(!editor.can_undo());
}

#[test]
fn undo_with_empty_history_surfaces_empty_history() {
    let mut editor: ListEditor<u8> = ListEditor::new(8);
    assert_eq!(editor.undo(), Err(EditError::EmptyHistory));
}

// ============================================================================
// History bound under repeated edits
// ============================================================================

#[test]
fn eviction_caps_undo_depth_but_keeps_applied_edits() {
    let mut editor = ListEditor::with_items(vec!["a", "b", "c"], 2);

    editor.add_item("d");
    editor.add_item("e");
    editor.add_item("f");
    assert_eq!(editor.items(), ["a", "b", "c", "d", "e", "f"]);
    // Three mutations applied, only the two newest are undoable
    assert_eq!(editor.undo_depth(), 2);

    editor.undo().unwrap();
    editor.undo().unwrap();
    assert_eq!(editor.undo(), Err(EditError::EmptyHistory));

    // The evicted insert of "d" stays applied
    assert_eq!(editor.items(), ["a", "b", "c", "d"]);
}

#[test]
fn capacity_zero_editor_never_records_history() {
    let mut editor = ListEditor::with_items(vec![1, 2, 3], 0);

    editor.add_item(4);
    editor.move_up(2);
    editor.remove_item(0).unwrap();

    assert!(!editor.can_undo());
    assert_eq!(editor.undo(), Err(EditError::EmptyHistory));
}

// ============================================================================
// Editing session
// ============================================================================

#[test]
fn task_list_editing_session() {
    // A session shaped like the consuming app: a small seeded to-do list
    // with a generous undo bound, driven through adds, moves, removes, and
    // a couple of mid-session undos.
    let mut editor = ListEditor::with_items(
        vec![
            "plan the week".to_string(),
            "review homework".to_string(),
            "solve problem 1519".to_string(),
        ],
        20,
    );

    editor.add_item("buy groceries".to_string());
    editor.add_item("call dentist".to_string());
    assert_eq!(editor.len(), 5);

    // Prioritize the last entry one step at a time
    editor.move_up(4);
    editor.move_up(3);
    assert_eq!(editor.items()[2], "call dentist");

    // Changed our mind about the reordering
    editor.undo().unwrap();
    editor.undo().unwrap();
    assert_eq!(editor.items()[4], "call dentist");

    // Done with homework
    editor.remove_item(1).unwrap();
    assert_eq!(
        editor.items(),
        [
            "plan the week",
            "solve problem 1519",
            "buy groceries",
            "call dentist"
        ]
    );

    // Three commands remain after the mid-session undos (capacity 20, so
    // nothing was evicted)
    assert_eq!(editor.undo_depth(), 3);
    while editor.can_undo() {
        editor.undo().unwrap();
    }
    assert_eq!(
        editor.items(),
        ["plan the week", "review homework", "solve problem 1519"]
    );
}
