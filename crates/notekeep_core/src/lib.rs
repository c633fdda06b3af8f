//! Core state layer for NoteKeep.
//! This crate owns the note collection, its derived views and its
//! write-back to a key/value blob store.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod reorder;
pub mod session;
pub mod storage;
pub mod store;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{PersistenceConfig, DEFAULT_DEBOUNCE, DEFAULT_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::color::{NoteColor, UnknownColor};
pub use model::note::{Note, NoteDraft, NoteId, NotePatch, DEFAULT_TITLE};
pub use persistence::bridge::{Hydrated, HydrationSource, PersistenceBridge};
pub use persistence::codec::{decode_notes, encode_notes, CodecError};
pub use persistence::seed::seed_notes;
pub use reorder::{DragEndEvent, ReorderController};
pub use session::NoteSession;
pub use storage::{BlobError, BlobResult, BlobStore, MemoryBlobStore, SqliteBlobStore};
pub use store::note_store::NoteStore;
pub use view::filter::{all_tags, filtered_notes, matches_search, NoteFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
