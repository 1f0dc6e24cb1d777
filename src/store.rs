use std::collections::BTreeMap;

use crate::model::note::{Note, NoteDraft};

/// In-memory note storage.
///
/// Ids are handed out sequentially starting at 1 and never reused, even
/// after a delete, so ascending-key iteration over the map is exactly
/// insertion order. Nothing is persisted; a new process starts empty.
#[derive(Debug)]
pub struct NoteStore {
    notes: BTreeMap<u64, Note>,
    next_id: u64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// All notes in insertion order. Always succeeds; empty store gives `[]`.
    pub fn list(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<Note> {
        self.notes.get(&id).cloned()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.notes.contains_key(&id)
    }

    /// Store a new note under the next free id and return it.
    pub fn insert(&mut self, draft: NoteDraft) -> Note {
        let note = Note {
            id: self.next_id,
            title: draft.title,
            content: draft.content,
        };
        self.notes.insert(note.id, note.clone());
        self.next_id += 1;

        note
    }

    /// Full overwrite of `title` and `content`; the id never changes.
    /// Returns `None` when the id is absent.
    pub fn replace(&mut self, id: u64, draft: NoteDraft) -> Option<Note> {
        let note = self.notes.get_mut(&id)?;
        note.title = draft.title;
        note.content = draft.content;

        Some(note.clone())
    }

    /// Remove and return a note. The freed id is never handed out again.
    pub fn remove(&mut self, id: u64) -> Option<Note> {
        self.notes.remove(&id)
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
