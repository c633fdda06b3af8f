//! Persistence bridge between the note store and a blob store.
//!
//! # Responsibility
//! - Hydrate the collection once at session start, falling back to seed notes.
//! - Debounce write-back of the whole collection after mutations.
//!
//! # Invariants
//! - Hydration and write failures are logged, never propagated.
//! - At most one write is pending; a new schedule replaces it and resets the
//!   deadline.
//! - A pending write dropped with the bridge never reaches the blob store.

pub mod bridge;
pub mod codec;
pub mod seed;
