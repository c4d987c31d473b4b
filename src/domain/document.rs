use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::GiftIdea;

/// The complete persisted mapping of recipient names to their gift ideas.
///
/// Keys are kept in a `BTreeMap`, so iteration is always in plain byte-wise
/// lexical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GiftDocument {
    recipients: BTreeMap<String, Vec<GiftIdea>>,
}

impl GiftDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes an arbitrary JSON value into a document.
    ///
    /// A non-object top level yields an empty document. A value that is not an
    /// array becomes an empty gift list, and array items that are not
    /// `{ idea, occasion }` string records are dropped.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(entries) = value else {
            warn!("gift document is not a JSON object; starting empty");
            return Self::default();
        };

        let recipients = entries
            .into_iter()
            .map(|(name, gifts)| {
                let gifts = match gifts {
                    Value::Array(items) => normalize_gifts(&name, items),
                    _ => {
                        warn!(recipient = %name, "gift list is not an array; replaced with empty list");
                        Vec::new()
                    }
                };
                (name, gifts)
            })
            .collect();

        Self { recipients }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipients.contains_key(name)
    }

    /// Inserts a recipient with no gifts. Returns `false` if the name already exists.
    pub fn insert_recipient(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.recipients.contains_key(&name) {
            return false;
        }
        self.recipients.insert(name, Vec::new());
        true
    }

    pub fn gifts(&self, name: &str) -> &[GiftIdea] {
        self.recipients
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn gifts_mut(&mut self, name: &str) -> Option<&mut Vec<GiftIdea>> {
        self.recipients.get_mut(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipients.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }
}

fn normalize_gifts(name: &str, items: Vec<Value>) -> Vec<GiftIdea> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<GiftIdea>(item) {
            Ok(gift) => Some(gift),
            Err(err) => {
                warn!(recipient = %name, index, error = %err, "dropping malformed gift record");
                None
            }
        })
        .collect()
}
