use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{debug, warn};

use crate::{core::errors::Result, domain::GiftDocument};

use super::DocumentStore;

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for the gift document.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentStore for JsonStorage {
    fn load(&self) -> GiftDocument {
        load_document_from_path(&self.path)
    }

    fn save(&self, document: &GiftDocument) -> Result<()> {
        save_document_to_path(document, &self.path)
    }
}

/// Loads a document from disk; missing or unparsable files yield an empty document.
pub fn load_document_from_path(path: &Path) -> GiftDocument {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no readable gift document; starting empty");
            return GiftDocument::new();
        }
    };
    match serde_json::from_str::<Value>(&data) {
        Ok(value) => {
            let document = GiftDocument::from_value(value);
            debug!(path = %path.display(), recipients = document.len(), "gift document loaded");
            document
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "gift document is not valid JSON; starting empty");
            GiftDocument::new()
        }
    }
}

/// Writes the whole document, pretty-printed, creating parent directories as needed.
pub fn save_document_to_path(document: &GiftDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(document)?;
    let tmp = tmp_path(path);
    let staged = write_file(&tmp, &json).and_then(|()| Ok(fs::rename(&tmp, path)?));
    if let Err(err) = staged {
        // A failed save leaves no stray sibling behind.
        let _ = fs::remove_file(&tmp);
        warn!(path = %path.display(), error = %err, "gift document save failed");
        return Err(err);
    }
    debug!(path = %path.display(), recipients = document.len(), "gift document saved");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
