use quicknotes_core::{capture_note, CaptureResult, MemoryStore, NotesManager, TextCapture};

/// Scripted capture source replaying one queued session result.
struct ScriptedCapture {
    result: Option<Vec<String>>,
}

impl TextCapture for ScriptedCapture {
    fn capture(&mut self) -> CaptureResult<Option<Vec<String>>> {
        Ok(self.result.take())
    }
}

#[test]
fn first_candidate_becomes_exactly_one_note() {
    let mut manager = NotesManager::open(MemoryStore::new()).unwrap();
    let mut source = ScriptedCapture {
        result: Some(vec!["Buy milk".to_string(), "By milk".to_string()]),
    };

    let note = capture_note(&mut manager, &mut source)
        .unwrap()
        .expect("a candidate should produce a note");

    assert_eq!(note.text, "Buy milk");
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.notes()[0].id, note.id);
}

#[test]
fn session_without_result_adds_nothing() {
    let mut manager = NotesManager::open(MemoryStore::new()).unwrap();
    let mut source = ScriptedCapture { result: None };

    let outcome = capture_note(&mut manager, &mut source).unwrap();

    assert!(outcome.is_none());
    assert!(manager.is_empty());
}

#[test]
fn empty_candidate_list_adds_nothing() {
    let mut manager = NotesManager::open(MemoryStore::new()).unwrap();
    let mut source = ScriptedCapture {
        result: Some(Vec::new()),
    };

    let outcome = capture_note(&mut manager, &mut source).unwrap();

    assert!(outcome.is_none());
    assert!(manager.is_empty());
}

#[test]
fn empty_string_candidate_is_still_a_note() {
    let mut manager = NotesManager::open(MemoryStore::new()).unwrap();
    let mut source = ScriptedCapture {
        result: Some(vec![String::new()]),
    };

    let note = capture_note(&mut manager, &mut source)
        .unwrap()
        .expect("empty text is a valid note");

    assert_eq!(note.text, "");
    assert_eq!(manager.len(), 1);
}
