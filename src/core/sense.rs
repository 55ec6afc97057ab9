//! core::sense
//!
//! Senses: the membership of a word in a synset.
//!
//! A [`Sense`] is always built from a full `SENSE` row. Its synset and word
//! are lazy proxies, so reading `sense.synset().name()` issues at most one
//! `synset_by_id` query for that sense.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::schema::SenseRecord;
use super::synset::Synset;
use super::types::Lang;
use super::word::Word;
use crate::store::WordNet;

/// A word-in-synset membership.
#[derive(Clone)]
pub struct Sense<'wn> {
    record: SenseRecord,
    synset: Synset<'wn>,
    word: Word<'wn>,
}

impl<'wn> Sense<'wn> {
    pub(crate) fn from_record(wn: &'wn WordNet, record: SenseRecord) -> Self {
        let synset = Synset::proxy(wn, record.synset.clone());
        let word = Word::proxy(wn, record.wordid);
        Self {
            record,
            synset,
            word,
        }
    }

    /// The synset side, unresolved until read.
    pub fn synset(&self) -> &Synset<'wn> {
        &self.synset
    }

    /// The word side, unresolved until read.
    pub fn word(&self) -> &Word<'wn> {
        &self.word
    }

    pub fn lang(&self) -> Lang {
        self.record.lang
    }

    /// Rank of the word within the synset.
    pub fn rank(&self) -> i64 {
        self.record.rank
    }

    pub fn lexid(&self) -> i64 {
        self.record.lexid
    }

    /// Corpus frequency, 0 when unrecorded.
    pub fn freq(&self) -> i64 {
        self.record.freq
    }

    pub fn provenance(&self) -> &str {
        &self.record.src
    }

    pub fn record(&self) -> &SenseRecord {
        &self.record
    }

    pub fn to_record(&self) -> SenseRecord {
        self.record.clone()
    }
}

impl PartialEq for Sense<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.record.synset == other.record.synset && self.record.wordid == other.record.wordid
    }
}

impl Eq for Sense<'_> {}

impl Hash for Sense<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.synset.hash(state);
        self.record.wordid.hash(state);
    }
}

impl fmt::Debug for Sense<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sense")
            .field("synset", self.synset.id())
            .field("word", &self.word.id())
            .field("lang", &self.record.lang)
            .finish()
    }
}

impl fmt::Display for Sense<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.record, f)
    }
}
