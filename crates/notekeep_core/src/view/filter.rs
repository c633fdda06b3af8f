//! Note filtering and tag derivation.

use crate::model::color::NoteColor;
use crate::model::note::Note;
use std::collections::BTreeSet;

/// Filter parameters selected by the user. All predicates are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Free text, matched case-insensitively. Empty matches everything.
    pub search_term: String,
    /// Exact tag membership.
    pub selected_tag: Option<String>,
    /// Exact color match.
    pub selected_color: Option<NoteColor>,
}

impl NoteFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.selected_tag = Some(tag.into());
        self
    }

    pub fn with_color(mut self, color: NoteColor) -> Self {
        self.selected_color = Some(color);
        self
    }

    /// Returns whether no predicate is active.
    pub fn is_cleared(&self) -> bool {
        self.search_term.is_empty() && self.selected_tag.is_none() && self.selected_color.is_none()
    }

    /// Evaluates all three predicates against one note.
    pub fn matches(&self, note: &Note) -> bool {
        let term = self.search_term.to_lowercase();
        self.matches_normalized(note, &term)
    }

    fn matches_normalized(&self, note: &Note, normalized_term: &str) -> bool {
        matches_search(note, normalized_term)
            && self
                .selected_tag
                .as_deref()
                .map_or(true, |tag| note.has_tag(tag))
            && self
                .selected_color
                .map_or(true, |color| note.color == color)
    }
}

/// Free-text predicate over title, content lines and tags.
///
/// `normalized_term` must already be lowercased; empty matches everything.
pub fn matches_search(note: &Note, normalized_term: &str) -> bool {
    if normalized_term.is_empty() {
        return true;
    }
    let hit = |value: &String| value.to_lowercase().contains(normalized_term);
    hit(&note.title) || note.content.iter().any(hit) || note.tags.iter().any(hit)
}

/// Returns the notes matching `filter`, in collection order.
pub fn filtered_notes<'a>(notes: &'a [Note], filter: &NoteFilter) -> Vec<&'a Note> {
    let term = filter.search_term.to_lowercase();
    notes
        .iter()
        .filter(|note| filter.matches_normalized(note, &term))
        .collect()
}

/// Distinct tags across all notes, sorted lexicographically.
pub fn all_tags(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .flat_map(|note| note.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
