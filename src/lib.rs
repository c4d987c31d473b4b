#![doc(test(attr(deny(warnings))))]

//! Gift Idea Saver keeps a list of gift ideas per recipient, each tagged with
//! an occasion, behind a numbered text menu and a single JSON file.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Gift saver tracing initialized.");
    });
}
