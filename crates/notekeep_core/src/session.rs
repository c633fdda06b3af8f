//! Session facade held by the presentation layer.
//!
//! # Responsibility
//! - Own the store, the persistence bridge and the active filter.
//! - Route every effective mutation into a debounced write.
//!
//! # Invariants
//! - Hydration never schedules a write.
//! - No-op commands never schedule a write.
//! - Closing or dropping the session discards any pending write.

use crate::clock::{Clock, SystemClock};
use crate::config::PersistenceConfig;
use crate::model::color::NoteColor;
use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use crate::persistence::bridge::{HydrationSource, PersistenceBridge};
use crate::reorder::{DragEndEvent, ReorderController};
use crate::storage::BlobStore;
use crate::store::note_store::NoteStore;
use crate::view::filter::{all_tags, filtered_notes, NoteFilter};
use log::info;

/// One editing session over a hydrated note collection.
pub struct NoteSession<S: BlobStore, C: Clock = SystemClock> {
    store: NoteStore,
    bridge: PersistenceBridge<S, C>,
    filter: NoteFilter,
    hydration: HydrationSource,
}

impl<S: BlobStore> NoteSession<S, SystemClock> {
    /// Opens a session on the process clock with default settings.
    pub fn open_default(blob_store: S) -> Self {
        Self::open(blob_store, SystemClock, PersistenceConfig::default())
    }
}

impl<S: BlobStore, C: Clock> NoteSession<S, C> {
    /// Hydrates from `blob_store` and starts a session.
    pub fn open(blob_store: S, clock: C, config: PersistenceConfig) -> Self {
        let bridge = PersistenceBridge::with_clock(blob_store, clock, config);
        let hydrated = bridge.hydrate();
        let store = NoteStore::from_notes(hydrated.notes);
        info!(
            "event=session_open module=session status=ok source={:?} count={}",
            hydrated.source,
            store.len()
        );
        Self {
            store,
            bridge,
            filter: NoteFilter::default(),
            hydration: hydrated.source,
        }
    }

    pub fn create(&mut self, draft: NoteDraft) -> Option<NoteId> {
        let id = self.store.create(draft)?;
        self.persist();
        Some(id)
    }

    pub fn update(&mut self, id: &str, patch: NotePatch) -> bool {
        self.after(|store| store.update(id, patch))
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.after(|store| store.delete(id))
    }

    pub fn reorder(&mut self, source_id: &str, dest_id: &str) -> bool {
        self.after(|store| store.reorder(source_id, dest_id))
    }

    pub fn handle_drag_end(&mut self, event: &DragEndEvent) -> bool {
        self.after(|store| ReorderController::handle_drag_end(store, event))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_selected_tag(&mut self, tag: Option<String>) {
        self.filter.selected_tag = tag;
    }

    pub fn set_selected_color(&mut self, color: Option<NoteColor>) {
        self.filter.selected_color = color;
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    /// Notes passing the active filter, in collection order.
    pub fn visible_notes(&self) -> Vec<&Note> {
        filtered_notes(self.store.notes(), &self.filter)
    }

    pub fn all_tags(&self) -> Vec<String> {
        all_tags(self.store.notes())
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn hydration_source(&self) -> HydrationSource {
        self.hydration
    }

    pub fn bridge(&self) -> &PersistenceBridge<S, C> {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut PersistenceBridge<S, C> {
        &mut self.bridge
    }

    /// Drives the debounce timer. Returns whether a write was attempted.
    pub fn tick(&mut self) -> bool {
        self.bridge.poll()
    }

    /// Ends the session. A pending write is discarded, not flushed.
    pub fn close(mut self) {
        let discarded = self.bridge.cancel();
        info!("event=session_close module=session status=ok discarded_pending={discarded}");
    }

    fn after(&mut self, command: impl FnOnce(&mut NoteStore) -> bool) -> bool {
        let changed = command(&mut self.store);
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&mut self) {
        self.bridge.schedule(self.store.snapshot());
    }
}
