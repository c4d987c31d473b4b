pub mod json_backend;

use crate::{core::errors::Result, domain::GiftDocument};

/// Abstraction over persistence backends holding the whole gift document.
pub trait DocumentStore {
    /// Reads the document, falling back to an empty one when nothing usable is stored.
    fn load(&self) -> GiftDocument;

    /// Replaces the stored document with `document`.
    fn save(&self, document: &GiftDocument) -> Result<()>;
}

pub use json_backend::JsonStorage;
