//! Domain model for notes and their edit inputs.
//!
//! # Responsibility
//! - Define the canonical `Note` record and its fixed color palette.
//! - Define typed draft/patch inputs and their boundary normalization.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned at creation.
//! - Titles are never blank; content lines are never blank.
//! - Tags are non-empty and unique (case-sensitive), in insertion order.

pub mod color;
pub mod note;
