//! Derived, read-only projections of the note collection.
//!
//! # Responsibility
//! - Filter notes by free text, tag and color.
//! - Derive the sorted tag universe.
//!
//! # Invariants
//! - Projections are pure and never mutate the source collection.
//! - Filtered output preserves the relative order of the source.

pub mod filter;
