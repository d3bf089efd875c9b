//! Core note-management logic for QuickNotes.
//! This crate is the single source of truth for the note model, its
//! persistence synchronization, and the text-capture flow.

pub mod capture;
pub mod display;
pub mod logging;
pub mod manager;
pub mod model;
pub mod store;

pub use capture::{capture_note, CaptureError, CaptureResult, TextCapture};
pub use display::preview;
pub use logging::{default_log_level, init_logging};
pub use manager::{
    ManagerError, ManagerResult, NotesManager, NotesObserver, SubscriberId, NOTES_STORAGE_KEY,
};
pub use model::note::{Note, NoteId};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};

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
