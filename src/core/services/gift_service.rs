//! Operations over the in-memory gift document. Every successful mutation is
//! followed by a full save through the supplied store.

use strsim::levenshtein;
use tracing::info;

use crate::core::errors::{GiftError, Result};
use crate::core::utils::clean_text;
use crate::domain::{GiftDocument, GiftIdea, Occasion};
use crate::storage::DocumentStore;

const SIMILARITY_THRESHOLD: usize = 2;

pub struct GiftService;

impl GiftService {
    /// Adds a recipient with an empty gift list and persists the document.
    ///
    /// Returns `Ok(false)` without saving when the cleaned name is already present.
    pub fn add_recipient(
        document: &mut GiftDocument,
        store: &dyn DocumentStore,
        name: &str,
    ) -> Result<bool> {
        let name = clean_text(name);
        if name.is_empty() {
            return Err(GiftError::InvalidInput(
                "recipient name cannot be empty".into(),
            ));
        }
        if !document.insert_recipient(name.clone()) {
            return Ok(false);
        }
        store.save(document)?;
        info!(recipient = %name, "recipient added");
        Ok(true)
    }

    /// Appends a gift idea to an existing recipient and persists the document.
    pub fn add_gift(
        document: &mut GiftDocument,
        store: &dyn DocumentStore,
        recipient: &str,
        idea: &str,
        occasion: &Occasion,
    ) -> Result<()> {
        let idea = clean_text(idea);
        if idea.is_empty() {
            return Err(GiftError::InvalidInput("gift idea cannot be empty".into()));
        }
        let gifts = document
            .gifts_mut(recipient)
            .ok_or_else(|| GiftError::RecipientNotFound(recipient.to_string()))?;
        gifts.push(GiftIdea::new(idea, occasion.label()));
        store.save(document)?;
        info!(recipient = %recipient, occasion = %occasion, "gift idea added");
        Ok(())
    }

    /// Recipient names in ascending, case-sensitive lexical order.
    pub fn list_recipients(document: &GiftDocument) -> Vec<String> {
        document.names().map(str::to_string).collect()
    }

    /// Gift ideas for `recipient` in insertion order; empty when unknown.
    pub fn list_gifts<'a>(document: &'a GiftDocument, recipient: &str) -> &'a [GiftIdea] {
        document.gifts(recipient)
    }

    /// The closest existing name to `candidate` that is not an exact match, if any
    /// lies within a small edit distance.
    pub fn similar_recipient<'a>(document: &'a GiftDocument, candidate: &str) -> Option<&'a str> {
        let candidate = clean_text(candidate);
        let mut suggestions: Vec<_> = document
            .names()
            .filter(|name| *name != candidate)
            .map(|name| (levenshtein(name, &candidate), name))
            .filter(|(distance, _)| *distance <= SIMILARITY_THRESHOLD)
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);
        suggestions.first().map(|(_, name)| *name)
    }
}
