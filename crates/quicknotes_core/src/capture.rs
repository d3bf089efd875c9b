//! Text-capture seam between an input mechanism and the notes manager.
//!
//! # Responsibility
//! - Define the contract an input source (dictation, stdin, test fake)
//!   implements.
//! - Turn at most one capture result into exactly one added note.
//!
//! # Invariants
//! - A session with no result adds no note and is not an error.
//! - Only the first candidate of a result is ever used.

use crate::manager::{ManagerError, NotesManager};
use crate::model::note::Note;
use crate::store::KeyValueStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CaptureResult<T> = Result<T, CaptureError>;

/// Error for the capture flow.
#[derive(Debug)]
pub enum CaptureError {
    /// The input source itself failed.
    Io(std::io::Error),
    /// The captured note could not be stored.
    Manager(ManagerError),
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "capture source failed: {err}"),
            Self::Manager(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CaptureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Manager(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ManagerError> for CaptureError {
    fn from(value: ManagerError) -> Self {
        Self::Manager(value)
    }
}

/// One-shot text input source.
///
/// Modeled on dictation-style APIs: a session either produces a ranked
/// list of candidate strings or ends with no result at all.
pub trait TextCapture {
    /// Runs one capture session.
    ///
    /// Returns `None` when the session ended without a result (cancelled,
    /// nothing recognized). Candidates may include empty strings; an
    /// empty string is still a valid note text.
    fn capture(&mut self) -> CaptureResult<Option<Vec<String>>>;
}

/// Runs one capture session and adds the first candidate as a note.
///
/// Calls `add_note` exactly once per session that yields a candidate;
/// sessions without a result leave the manager untouched and return
/// `Ok(None)`.
pub fn capture_note<S, C>(
    manager: &mut NotesManager<S>,
    source: &mut C,
) -> CaptureResult<Option<Note>>
where
    S: KeyValueStore,
    C: TextCapture,
{
    let Some(candidates) = source.capture()? else {
        info!("event=capture module=capture status=no_result");
        return Ok(None);
    };

    let Some(text) = candidates.into_iter().next() else {
        info!("event=capture module=capture status=no_candidates");
        return Ok(None);
    };

    let note = manager.add_note(text)?;
    info!(
        "event=capture module=capture status=ok id={} text_chars={}",
        note.id,
        note.text.chars().count()
    );
    Ok(Some(note))
}
