//! Drag-end handling for manual note ordering.
//!
//! The drag-and-drop capability resolves pointer geometry on its own and only
//! reports which note was dragged (`active_id`) and which note it was
//! dropped onto (`over_id`).

use crate::model::note::NoteId;
use crate::store::note_store::NoteStore;
use log::debug;

/// Completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEndEvent {
    pub active_id: NoteId,
    /// `None` when the item was dropped outside any note.
    pub over_id: Option<NoteId>,
}

impl DragEndEvent {
    pub fn new(active_id: impl Into<NoteId>, over_id: Option<NoteId>) -> Self {
        Self {
            active_id: active_id.into(),
            over_id,
        }
    }

    pub fn onto(active_id: impl Into<NoteId>, over_id: impl Into<NoteId>) -> Self {
        Self::new(active_id, Some(over_id.into()))
    }
}

/// Applies drag-end events to a store as array moves.
pub struct ReorderController;

impl ReorderController {
    /// Moves the dragged note to the drop target's index.
    ///
    /// Returns `false` (and leaves `store` untouched) when there is no drop
    /// target, the target is the dragged note itself, or either id is unknown.
    pub fn handle_drag_end(store: &mut NoteStore, event: &DragEndEvent) -> bool {
        let Some(over_id) = event.over_id.as_deref() else {
            return false;
        };
        if over_id == event.active_id {
            return false;
        }

        let (Some(from), Some(to)) = (store.index_of(&event.active_id), store.index_of(over_id))
        else {
            debug!("event=drag_end module=reorder status=skipped reason=not_found");
            return false;
        };

        let moved = store.move_index(from, to);
        debug!("event=drag_end module=reorder status=ok from={from} to={to}");
        moved
    }
}
