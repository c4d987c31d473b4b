
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::errors::{GiftError, Result};
use crate::domain::GiftDocument;
use crate::storage::DocumentStore;

/// In-memory store that remembers how often it was asked to save.
///
/// Clones share their counters, so a test can keep a handle after boxing one.
#[derive(Default, Clone)]
pub(crate) struct RecordingStore {
    pub saves: Rc<Cell<usize>>,
    pub last: Rc<RefCell<Option<GiftDocument>>>,
    pub fail: bool,
}

impl RecordingStore {
    pub fn seeded(document: GiftDocument) -> Self {
        let store = Self::default();
        *store.last.borrow_mut() = Some(document);
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl DocumentStore for RecordingStore {
    fn load(&self) -> GiftDocument {
        self.last.borrow().clone().unwrap_or_default()
    }

    fn save(&self, document: &GiftDocument) -> Result<()> {
        if self.fail {
            return Err(GiftError::Storage("disk is read-only".into()));
        }
        self.saves.set(self.saves.get() + 1);
        *self.last.borrow_mut() = Some(document.clone());
        Ok(())
    }
}
