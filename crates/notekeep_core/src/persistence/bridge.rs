//! Debounced write-back and one-time hydration.
//!
//! The bridge owns at most one [`PendingWrite`]: the latest collection
//! snapshot plus the instant it becomes due. The caller's event loop drives
//! it with [`PersistenceBridge::poll`]; nothing runs in the background.

use crate::clock::{Clock, SystemClock};
use crate::config::PersistenceConfig;
use crate::model::note::{now_epoch_ms, Note};
use crate::persistence::codec::{decode_notes, encode_notes};
use crate::persistence::seed::seed_notes;
use crate::storage::BlobStore;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;

/// Where the hydrated collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationSource {
    /// Decoded from the blob store.
    Stored,
    /// Nothing usable was stored; seed notes were used.
    Seeded,
}

/// Result of [`PersistenceBridge::hydrate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hydrated {
    pub notes: Vec<Note>,
    pub source: HydrationSource,
}

#[derive(Debug)]
struct PendingWrite {
    deadline: Instant,
    snapshot: Arc<Vec<Note>>,
}

/// Debounced, best-effort persistence of the note collection.
pub struct PersistenceBridge<S: BlobStore, C: Clock = SystemClock> {
    blob_store: S,
    clock: C,
    config: PersistenceConfig,
    pending: Option<PendingWrite>,
}

impl<S: BlobStore> PersistenceBridge<S, SystemClock> {
    /// Creates a bridge on the process clock with default settings.
    pub fn new(blob_store: S) -> Self {
        Self::with_clock(blob_store, SystemClock, PersistenceConfig::default())
    }
}

impl<S: BlobStore, C: Clock> PersistenceBridge<S, C> {
    pub fn with_clock(blob_store: S, clock: C, config: PersistenceConfig) -> Self {
        Self {
            blob_store,
            clock,
            config,
            pending: None,
        }
    }

    /// Reads the stored collection, or falls back to the seed notes.
    ///
    /// Never fails: missing, unreadable and undecodable values all seed.
    /// Stored records are normalized the same way user input is.
    pub fn hydrate(&self) -> Hydrated {
        let key = self.config.storage_key.as_str();
        let raw = match self.blob_store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("event=hydrate module=persistence status=seeded reason=absent");
                return seeded();
            }
            Err(err) => {
                error!(
                    "event=hydrate module=persistence status=seeded reason=read_failed error={err}"
                );
                return seeded();
            }
        };

        match decode_notes(&raw) {
            Ok(notes) => {
                let notes: Vec<Note> = notes.into_iter().map(Note::normalized).collect();
                info!(
                    "event=hydrate module=persistence status=ok count={} bytes={}",
                    notes.len(),
                    raw.len()
                );
                Hydrated {
                    notes,
                    source: HydrationSource::Stored,
                }
            }
            Err(err) => {
                error!(
                    "event=hydrate module=persistence status=seeded reason=decode_failed bytes={} error={err}",
                    raw.len()
                );
                seeded()
            }
        }
    }

    /// Replaces any pending write with `snapshot`, due one debounce period
    /// from now.
    pub fn schedule(&mut self, snapshot: Arc<Vec<Note>>) {
        let deadline = self.clock.now() + self.config.debounce;
        if self.pending.is_some() {
            debug!("event=persist_schedule module=persistence status=rescheduled");
        }
        self.pending = Some(PendingWrite { deadline, snapshot });
    }

    /// Fires the pending write when its deadline has passed.
    ///
    /// Returns whether a write was attempted.
    pub fn poll(&mut self) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| self.clock.now() >= pending.deadline);
        if due {
            self.flush()
        } else {
            false
        }
    }

    /// Writes the pending snapshot immediately, ignoring its deadline.
    pub fn flush(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.write(&pending.snapshot);
        true
    }

    /// Discards the pending write. Returns whether one existed.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            debug!("event=persist_cancel module=persistence status=ok");
        }
        cancelled
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant the pending write becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    pub fn config(&self) -> &PersistenceConfig {
        &self.config
    }

    pub fn blob_store(&self) -> &S {
        &self.blob_store
    }

    pub fn blob_store_mut(&mut self) -> &mut S {
        &mut self.blob_store
    }

    fn write(&mut self, notes: &[Note]) {
        let encoded = match encode_notes(notes) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!("event=persist_write module=persistence status=error stage=encode error={err}");
                return;
            }
        };

        match self.blob_store.set(&self.config.storage_key, &encoded) {
            Ok(()) => info!(
                "event=persist_write module=persistence status=ok count={} bytes={}",
                notes.len(),
                encoded.len()
            ),
            Err(err) => warn!(
                "event=persist_write module=persistence status=error stage=store count={} error={err}",
                notes.len()
            ),
        }
    }
}

impl<S: BlobStore, C: Clock> Drop for PersistenceBridge<S, C> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn seeded() -> Hydrated {
    Hydrated {
        notes: seed_notes(now_epoch_ms()),
        source: HydrationSource::Seeded,
    }
}

#[cfg(test)]
mod tests {
    use super::{HydrationSource, PersistenceBridge};
    use crate::clock::ManualClock;
    use crate::config::PersistenceConfig;
    use crate::storage::MemoryBlobStore;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn poll_before_deadline_does_not_write() {
        let clock = ManualClock::new();
        let mut bridge = PersistenceBridge::with_clock(
            MemoryBlobStore::new(),
            clock.clone(),
            PersistenceConfig::default(),
        );
        bridge.schedule(Arc::new(Vec::new()));

        clock.advance(Duration::from_millis(299));
        assert!(!bridge.poll());
        clock.advance(Duration::from_millis(1));
        assert!(bridge.poll());
        assert!(!bridge.has_pending());
        assert_eq!(bridge.blob_store().write_count(), 1);
    }

    #[test]
    fn hydrate_uses_configured_key() {
        let store = MemoryBlobStore::with_entry("other", "[]");
        let config = PersistenceConfig::default().with_storage_key("other");
        let bridge = PersistenceBridge::with_clock(store, ManualClock::new(), config);

        let hydrated = bridge.hydrate();
        assert_eq!(hydrated.source, HydrationSource::Stored);
        assert!(hydrated.notes.is_empty());
    }
}
