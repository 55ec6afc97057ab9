//! core::definition
//!
//! Glosses attached to synsets.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::schema::SynsetDefRecord;
use super::synset::Synset;
use super::types::Lang;
use crate::store::WordNet;

/// A definition (gloss) of a synset in one language.
#[derive(Clone)]
pub struct SynsetDefinition<'wn> {
    record: SynsetDefRecord,
    synset: Synset<'wn>,
}

impl<'wn> SynsetDefinition<'wn> {
    /// A definition whose synset is a lazy proxy.
    pub(crate) fn from_record(wn: &'wn WordNet, record: SynsetDefRecord) -> Self {
        let synset = Synset::proxy(wn, record.synset.clone());
        Self { record, synset }
    }

    /// A definition attached to an already known synset.
    pub(crate) fn with_synset(record: SynsetDefRecord, synset: Synset<'wn>) -> Self {
        Self { record, synset }
    }

    pub fn synset(&self) -> &Synset<'wn> {
        &self.synset
    }

    pub fn lang(&self) -> Lang {
        self.record.lang
    }

    /// The gloss text.
    pub fn text(&self) -> &str {
        &self.record.def
    }

    /// Sentence index of the gloss.
    pub fn sid(&self) -> i64 {
        self.record.sid
    }

    pub fn record(&self) -> &SynsetDefRecord {
        &self.record
    }

    pub fn to_record(&self) -> SynsetDefRecord {
        self.record.clone()
    }
}

impl PartialEq for SynsetDefinition<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.record.synset == other.record.synset
    }
}

impl Eq for SynsetDefinition<'_> {}

impl Hash for SynsetDefinition<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.synset.hash(state);
    }
}

impl fmt::Debug for SynsetDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynsetDefinition")
            .field("synset", self.synset.id())
            .field("lang", &self.record.lang)
            .field("sid", &self.record.sid)
            .finish()
    }
}

impl fmt::Display for SynsetDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.record, f)
    }
}
