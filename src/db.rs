//! The emoji database contract and a bundled map-backed implementation.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single emoji as the database describes it.
///
/// The `character` field maps to the JSON key `"char"`, so an
/// `emojilib`-style database deserializes without preprocessing. Everything
/// except the character itself defaults when absent - the converter performs
/// no schema validation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EmojiRecord {
    /// The rendered character sequence - one or more code points, possibly
    /// joined into a compound by zero-width joiners.
    #[serde(rename = "char")]
    pub character: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub category: String,
    /// Whether this emoji supports Fitzpatrick skin-tone modifier variants.
    #[serde(default)]
    pub fitzpatrick_scale: bool,
}

/// Read-only lookup capability the converter is generic over.
///
/// Implementors decide iteration order; candidate search and reverse lookup
/// follow it, so an order-preserving backing store makes both deterministic.
pub trait EmojiDatabase {
    /// Fetches the record for a bare shortcode name (no colons).
    fn lookup(&self, shortcode: &str) -> Option<&EmojiRecord>;

    /// Walks every `(shortcode, record)` pair in the database's native order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &EmojiRecord)> + '_>;
}

impl EmojiDatabase for BTreeMap<String, EmojiRecord> {
    fn lookup(&self, shortcode: &str) -> Option<&EmojiRecord> {
        self.get(shortcode)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &EmojiRecord)> + '_> {
        Box::new(BTreeMap::iter(self).map(|(key, record)| (key.as_str(), record)))
    }
}

/// Errors surfaced while deserializing an [`EmojiDb`].
#[derive(Error, Debug)]
pub enum DbError {
    #[error("could not parse emoji database")]
    Parse(#[from] serde_json::Error),
    #[error("could not read emoji database")]
    Io(#[from] std::io::Error),
}

/// Map-backed emoji database, keyed by shortcode.
///
/// Iterates in key order, which pins down the otherwise
/// implementation-defined ordering of [`EmojiConverter::find_matches`]
/// results and reverse lookups.
///
/// [`EmojiConverter::find_matches`]: crate::EmojiConverter::find_matches
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct EmojiDb(BTreeMap<String, EmojiRecord>);

impl EmojiDb {
    /// Deserializes a database from `emojilib`-style JSON: an object mapping
    /// shortcode names to records.
    pub fn from_json(json: &str) -> Result<Self, DbError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Like [`from_json`](Self::from_json), but streaming from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, DbError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, EmojiRecord)> for EmojiDb {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, EmojiRecord)>,
    {
        Self(iter.into_iter().collect())
    }
}

impl EmojiDatabase for EmojiDb {
    fn lookup(&self, shortcode: &str) -> Option<&EmojiRecord> {
        self.0.get(shortcode)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &EmojiRecord)> + '_> {
        Box::new(self.0.iter().map(|(key, record)| (key.as_str(), record)))
    }
}
