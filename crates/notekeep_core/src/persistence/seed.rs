//! Example notes shown on first launch or after unreadable storage.

use crate::model::color::NoteColor;
use crate::model::note::Note;

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Returns the fixed welcome and sample notes, stamped with `created_at`.
pub fn seed_notes(created_at: i64) -> Vec<Note> {
    vec![
        Note {
            id: "1".to_string(),
            title: "Welcome to Keep Clone".to_string(),
            content: lines(&[
                "Click the \"Take a note...\" button to create a new note",
                "Notes are automatically saved to your browser",
            ]),
            color: NoteColor::Yellow,
            created_at,
            tags: lines(&["welcome", "tutorial"]),
        },
        Note {
            id: "2".to_string(),
            title: "Sample Note".to_string(),
            content: lines(&[
                "You can edit notes",
                "Delete notes",
                "Change note color",
                "Add tags",
            ]),
            color: NoteColor::Green,
            created_at,
            tags: lines(&["sample"]),
        },
    ]
}
