use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::utils::clean_text;

const OTHER_PREFIX: &str = "Other: ";

/// A single recorded suggestion for a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftIdea {
    pub idea: String,
    pub occasion: String,
}

impl GiftIdea {
    pub fn new(idea: impl Into<String>, occasion: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            occasion: occasion.into(),
        }
    }
}

impl fmt::Display for GiftIdea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.idea, self.occasion)
    }
}

/// The event a gift idea is meant for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occasion {
    Birthday,
    Christmas,
    Other(String),
}

impl Occasion {
    /// Builds a free-text occasion, rejecting labels that are blank once cleaned.
    pub fn other(label: &str) -> Option<Self> {
        let cleaned = clean_text(label);
        if cleaned.is_empty() {
            None
        } else {
            Some(Occasion::Other(cleaned))
        }
    }

    /// The string persisted in [`GiftIdea::occasion`].
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occasion::Birthday => f.write_str("Birthday"),
            Occasion::Christmas => f.write_str("Christmas"),
            Occasion::Other(label) => write!(f, "{OTHER_PREFIX}{label}"),
        }
    }
}

impl From<Occasion> for String {
    fn from(occasion: Occasion) -> Self {
        occasion.label()
    }
}
