//! In-memory note collection.
//!
//! # Responsibility
//! - Own the canonical ordered collection for one session.
//! - Apply create/update/delete/reorder commands and enforce invariants.
//!
//! # Invariants
//! - Note ids are unique within the collection.
//! - Order changes only through create (prepend), delete and reorder.
//! - Unknown ids and blank drafts are silent no-ops.

pub mod note_store;
