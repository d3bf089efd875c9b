//! Notes manager: ordered in-memory collection with write-through persistence.
//!
//! # Responsibility
//! - Own the session's ordered note list and its only mutation paths.
//! - Encode the full list and persist it under one fixed key after every
//!   mutation.
//! - Notify subscribed observers after each in-memory change.
//!
//! # Invariants
//! - Note ids are unique within one manager instance.
//! - Order reflects insertion order (newest appended last) except as
//!   reordered by deletion.
//! - In-memory state is never rolled back on a failed save; memory and
//!   disk may diverge until the next successful save.
//! - A corrupt persisted payload loads as an empty list, never an error.

use crate::model::note::Note;
use crate::store::{KeyValueStore, StoreError};
use log::{info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the serialized note list is stored under.
///
/// Matches the key used by earlier builds, so existing payloads keep
/// decoding.
pub const NOTES_STORAGE_KEY: &str = "quickNotes";

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Error for note-management operations.
#[derive(Debug)]
pub enum ManagerError {
    /// Persistence backend failure.
    Store(StoreError),
    /// Note list could not be encoded for persistence.
    Codec(serde_json::Error),
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "failed to encode note list: {err}"),
        }
    }
}

impl Error for ManagerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<StoreError> for ManagerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for ManagerError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Handle returned by [`NotesManager::subscribe`], used to unsubscribe.
pub type SubscriberId = usize;

/// Change-notification interface for presentation surfaces.
///
/// Observers receive the full post-mutation list; a list view re-renders
/// from it directly.
pub trait NotesObserver {
    fn notes_changed(&self, notes: &[Note]);
}

/// Owner of the in-memory ordered note collection and its persistence
/// synchronization.
pub struct NotesManager<S: KeyValueStore> {
    store: S,
    notes: Vec<Note>,
    observers: Vec<(SubscriberId, Box<dyn NotesObserver>)>,
    next_subscriber_id: SubscriberId,
}

impl<S: KeyValueStore> NotesManager<S> {
    /// Opens a manager over the given store, loading the persisted list.
    ///
    /// A missing key or a corrupt payload yields an empty list (the
    /// corrupt case is logged, not raised). A store read failure is
    /// returned to the caller.
    pub fn open(store: S) -> ManagerResult<Self> {
        let notes = load_notes(&store)?;
        info!(
            "event=manager_open module=manager status=ok count={}",
            notes.len()
        );
        Ok(Self {
            store,
            notes,
            observers: Vec::new(),
            next_subscriber_id: 0,
        })
    }

    /// Ordered view of the current notes, newest appended last.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the note at `position`, for detail display.
    pub fn get(&self, position: usize) -> Option<&Note> {
        self.notes.get(position)
    }

    /// Appends a note with a fresh id and the current timestamp, then
    /// persists the full list.
    ///
    /// Text is not validated; empty strings are accepted. Observers are
    /// notified before the save result is returned, so a presentation
    /// surface re-renders even when persistence diverges.
    pub fn add_note(&mut self, text: impl Into<String>) -> ManagerResult<Note> {
        let note = Note::new(text);
        self.notes.push(note.clone());
        info!(
            "event=note_added module=manager status=ok id={} text_chars={} count={}",
            note.id,
            note.text.chars().count(),
            self.notes.len()
        );
        self.notify_observers();
        self.save()?;
        Ok(note)
    }

    /// Removes exactly the in-range positions, preserving the relative
    /// order of survivors, then persists the resulting list.
    ///
    /// Out-of-range positions are silently ignored. When nothing is
    /// removed, no observer fires and nothing is written.
    pub fn delete_notes(&mut self, positions: &BTreeSet<usize>) -> ManagerResult<usize> {
        let before = self.notes.len();
        let mut position = 0usize;
        self.notes.retain(|_| {
            let keep = !positions.contains(&position);
            position += 1;
            keep
        });

        let removed = before - self.notes.len();
        if removed == 0 {
            return Ok(0);
        }

        info!(
            "event=notes_deleted module=manager status=ok removed={} count={}",
            removed,
            self.notes.len()
        );
        self.notify_observers();
        self.save()?;
        Ok(removed)
    }

    /// Registers an observer; the returned id unsubscribes it later.
    pub fn subscribe(&mut self, observer: Box<dyn NotesObserver>) -> SubscriberId {
        let id = self.next_subscriber_id;
        self.next_subscriber_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes a previously registered observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.observers.retain(|(subscriber, _)| *subscriber != id);
    }

    fn notify_observers(&self) {
        for (_, observer) in &self.observers {
            observer.notes_changed(&self.notes);
        }
    }

    fn save(&mut self) -> ManagerResult<()> {
        let payload = serde_json::to_string(&self.notes)?;
        self.store.set(NOTES_STORAGE_KEY, &payload)?;
        Ok(())
    }
}

fn load_notes<S: KeyValueStore>(store: &S) -> ManagerResult<Vec<Note>> {
    let Some(payload) = store.get(NOTES_STORAGE_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&payload) {
        Ok(notes) => Ok(notes),
        Err(err) => {
            warn!(
                "event=notes_load module=manager status=corrupt payload_bytes={} error={}",
                payload.len(),
                err
            );
            Ok(Vec::new())
        }
    }
}
