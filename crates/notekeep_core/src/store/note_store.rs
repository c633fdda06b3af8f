//! Note store implementation.
//!
//! # Invariants
//! - `version` advances once per effective mutation and never on a no-op.
//! - Mutations replace the collection value (copy-on-write); snapshots handed
//!   out earlier never observe later changes.

use crate::model::note::{now_epoch_ms, Note, NoteDraft, NoteId, NotePatch};
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

/// Owned, ordered note collection with a mutation counter.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Arc<Vec<Note>>,
    version: u64,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an existing collection (hydration path).
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant holds
    /// even for hand-edited input.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut seen = HashSet::with_capacity(notes.len());
        let unique: Vec<Note> = notes
            .into_iter()
            .filter(|note| seen.insert(note.id.clone()))
            .collect();
        Self {
            notes: Arc::new(unique),
            version: 0,
        }
    }

    /// Creates a note from `draft` and prepends it.
    ///
    /// Returns the new id, or `None` when title and content are both blank.
    pub fn create(&mut self, draft: NoteDraft) -> Option<NoteId> {
        let note = draft.into_note(now_epoch_ms())?;
        let id = note.id.clone();
        self.mutate(|notes| notes.insert(0, note));
        debug!(
            "event=note_create module=store status=ok count={}",
            self.notes.len()
        );
        Some(id)
    }

    /// Overwrites the patch's fields on the note with `id`, in place.
    ///
    /// Returns `false` when no note has that id or the patch leaves every
    /// field as it was.
    pub fn update(&mut self, id: &str, patch: NotePatch) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!("event=note_update module=store status=skipped reason=not_found");
            return false;
        };
        if patch.is_empty() {
            debug!("event=note_update module=store status=skipped reason=empty_patch");
            return false;
        }

        let mut updated = self.notes[index].clone();
        if !patch.apply_to(&mut updated) {
            debug!("event=note_update module=store status=skipped reason=unchanged");
            return false;
        }
        self.mutate(|notes| notes[index] = updated);
        true
    }

    /// Removes the note with `id`. Returns `false` when absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!("event=note_delete module=store status=skipped reason=not_found");
            return false;
        };
        self.mutate(|notes| {
            notes.remove(index);
        });
        true
    }

    /// Moves `source_id` to the index currently held by `dest_id`.
    ///
    /// No-op when the ids are equal or either one is unknown.
    pub fn reorder(&mut self, source_id: &str, dest_id: &str) -> bool {
        if source_id == dest_id {
            return false;
        }
        match (self.index_of(source_id), self.index_of(dest_id)) {
            (Some(from), Some(to)) => self.move_index(from, to),
            _ => false,
        }
    }

    /// Array-move: removes the element at `from` and reinserts it at `to`,
    /// shifting the elements in between by one.
    pub fn move_index(&mut self, from: usize, to: usize) -> bool {
        let len = self.notes.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        self.mutate(|notes| {
            let moved = notes.remove(from);
            notes.insert(to, moved);
        });
        true
    }

    /// Current ordered collection.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Alias of [`NoteStore::notes`].
    pub fn get_all(&self) -> &[Note] {
        self.notes()
    }

    /// Shared immutable snapshot of the current collection.
    pub fn snapshot(&self) -> Arc<Vec<Note>> {
        Arc::clone(&self.notes)
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Current position of `id` in the collection.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Number of effective mutations applied since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn mutate(&mut self, apply: impl FnOnce(&mut Vec<Note>)) {
        apply(Arc::make_mut(&mut self.notes));
        self.version += 1;
    }
}
