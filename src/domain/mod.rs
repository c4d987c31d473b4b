//! Typed model of the gift document: recipients, their gift ideas, and the
//! occasions those ideas are tagged with.

pub mod document;
pub mod gift;

pub use document::GiftDocument;
pub use gift::{GiftIdea, Occasion};
