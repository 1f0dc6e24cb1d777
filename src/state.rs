use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::RestError;
use crate::store::NoteStore;

#[derive(Clone)]
pub struct AppState {
    notes: Arc<Mutex<NoteStore>>, // Sole shared state; guards the id counter too
}

impl AppState {
    pub fn new() -> Self {
        Self {
            notes: Arc::new(Mutex::new(NoteStore::new())),
        }
    }

    /// Every store access goes through this guard. Poisoning only happens if
    /// a handler panicked mid-operation, so it surfaces as an internal error
    /// instead of taking the whole process down.
    pub fn notes(&self) -> Result<MutexGuard<'_, NoteStore>, RestError> {
        self.notes
            .lock()
            .map_err(|_| RestError::Internal("note store mutex poisoned".to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
