//! Note domain model.
//!
//! # Responsibility
//! - Define the note record and its persisted JSON shape.
//! - Provide the single creation path used by the notes manager.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Notes are immutable after creation; there is no update path.
//! - The serialized shape is exactly `{id, text, date}` with no version
//!   field; any shape change is a breaking decode failure.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier assigned to every note at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Immutable-after-creation note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID, generated once at creation.
    pub id: NoteId,
    /// Free-form text content. Empty strings are valid notes.
    pub text: String,
    /// Creation time in Unix epoch milliseconds.
    ///
    /// Serialized as `date` to stay decode-compatible with payloads
    /// written by earlier builds.
    #[serde(rename = "date")]
    pub created_at_ms: i64,
}

impl Note {
    /// Creates a note with a generated stable ID and the current time.
    ///
    /// This is the only creation path used by live code; notes are never
    /// constructed externally with arbitrary fields.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_parts(Uuid::new_v4(), text, now_epoch_ms())
    }

    /// Creates a note from already-known parts.
    ///
    /// Used by decode and test paths where identity and timestamp already
    /// exist; regular creation goes through [`Note::new`].
    pub fn with_parts(id: NoteId, text: impl Into<String>, created_at_ms: i64) -> Self {
        Self {
            id,
            text: text.into(),
            created_at_ms,
        }
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Clamps to zero for clocks set before the epoch instead of failing.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
