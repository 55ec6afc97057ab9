//! core::word
//!
//! Words: lexical items with a lemma, language, pronunciation, and part of
//! speech.
//!
//! # Resolution
//!
//! A [`Word`] is either built from a full `WORD` row or is a lazy proxy
//! holding only its [`WordId`]. Both answer the same methods. The first
//! derived-field read on a proxy runs one `word_by_id` query and memoizes
//! the outcome for the lifetime of the proxy.
//!
//! When the row does not exist, a strict store reports
//! [`StoreError::WordNotFound`]; a lenient store answers empty strings and
//! `None` for every derived field.
//!
//! # Identity
//!
//! Equality and hashing use the word id only, so a proxy equals the fully
//! built word with the same id whether or not it has been resolved.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::lazy::Slot;
use super::schema::WordRecord;
use super::sense::Sense;
use super::synset::Synset;
use super::types::{Lang, Pos, WordId};
use crate::store::{ErrorPolicy, QueryShape, StoreError, WordNet};

/// A word of the lexicon.
#[derive(Clone)]
pub struct Word<'wn> {
    wn: &'wn WordNet,
    id: WordId,
    slot: Slot<WordRecord>,
}

impl<'wn> Word<'wn> {
    /// A fully built word.
    pub(crate) fn from_record(wn: &'wn WordNet, record: WordRecord) -> Self {
        Self {
            wn,
            id: record.wordid,
            slot: Slot::resolved(record),
        }
    }

    /// A lazy proxy for the word `id`.
    pub(crate) fn proxy(wn: &'wn WordNet, id: WordId) -> Self {
        Self {
            wn,
            id,
            slot: Slot::pending(),
        }
    }

    /// The word id. Never queries.
    pub fn id(&self) -> WordId {
        self.id
    }

    /// Whether the derived fields are known without a query.
    pub fn is_resolved(&self) -> bool {
        self.slot.is_resolved()
    }

    /// The full row, resolving it on first call.
    ///
    /// Returns `Ok(None)` only on a lenient store, when the row is missing or
    /// the lookup failed. A failed lookup is retried on the next call.
    ///
    /// # Errors
    ///
    /// - [`StoreError::WordNotFound`] on a strict store when the row is missing
    /// - [`StoreError::Query`] on a strict store when the lookup fails
    pub fn details(&self) -> Result<Option<&WordRecord>, StoreError> {
        let wn = self.wn;
        let id = self.id;
        match self.slot.get_or_load(|| wn.word_record(id)) {
            Ok(Some(record)) => Ok(Some(record)),
            Ok(None) => match wn.policy() {
                ErrorPolicy::Strict => Err(StoreError::WordNotFound(id)),
                ErrorPolicy::Lenient => Ok(None),
            },
            // Left unresolved so the next read retries.
            Err(err) => wn.apply_policy(QueryShape::WordById, Err(err), None),
        }
    }

    /// The language of the word.
    pub fn language(&self) -> Result<Option<Lang>, StoreError> {
        Ok(self.details()?.map(|r| r.lang))
    }

    /// The lemma (headword), lowercased as stored.
    pub fn lemma(&self) -> Result<&str, StoreError> {
        Ok(self.details()?.map(|r| r.lemma.as_str()).unwrap_or(""))
    }

    /// The pronunciation, if recorded.
    pub fn pronunciation(&self) -> Result<Option<&str>, StoreError> {
        Ok(self.details()?.and_then(|r| r.pron.as_deref()))
    }

    /// The part of speech.
    pub fn pos(&self) -> Result<Option<Pos>, StoreError> {
        Ok(self.details()?.map(|r| r.pos))
    }

    /// Senses attaching this word to synsets.
    pub fn senses(&self) -> Result<Vec<Sense<'wn>>, StoreError> {
        self.wn.senses_by_word(self.id)
    }

    /// Synsets named like this word's lemma, with the same part of speech.
    ///
    /// This matches `SYNSET.name` against the lemma rather than following
    /// `SENSE`, so it finds the synsets whose canonical name is this word.
    /// Use [`Word::synsets_via_senses`] for every synset the word belongs to.
    /// A word that cannot be resolved on a lenient store has no synsets.
    pub fn synsets(&self) -> Result<Vec<Synset<'wn>>, StoreError> {
        match self.details()? {
            Some(record) => self.wn.synsets_by_name(&record.lemma, record.pos),
            None => Ok(Vec::new()),
        }
    }

    /// Synsets this word is attached to through `SENSE`.
    pub fn synsets_via_senses(&self) -> Result<Vec<Synset<'wn>>, StoreError> {
        self.wn.synsets_by_sense_word(self.id)
    }

    /// A copy of the full row.
    pub fn to_record(&self) -> Result<Option<WordRecord>, StoreError> {
        Ok(self.details()?.cloned())
    }
}

impl PartialEq for Word<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Word<'_> {}

impl Hash for Word<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Word")
            .field("id", &self.id)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Writes the row as JSON, resolving a proxy first.
///
/// A word that cannot be resolved is written as `{"wordid":<id>}`.
impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.details() {
            Ok(Some(record)) => fmt::Display::fmt(record, f),
            _ => write!(f, "{{\"wordid\":{}}}", self.id),
        }
    }
}
