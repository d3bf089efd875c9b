//! Domain model for quick notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by manager and presentation.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Notes are immutable after creation; deletion is the only lifecycle exit.

pub mod note;
