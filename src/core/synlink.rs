//! core::synlink
//!
//! Typed, directed edges between synsets.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::schema::SynlinkRecord;
use super::synset::Synset;
use super::types::LinkType;
use crate::store::WordNet;

/// A directed link `from --link--> to`.
///
/// Both endpoints are lazy proxies. Identity is the triple of endpoints and
/// link type; provenance is not part of it.
#[derive(Clone)]
pub struct Synlink<'wn> {
    record: SynlinkRecord,
    from: Synset<'wn>,
    to: Synset<'wn>,
}

impl<'wn> Synlink<'wn> {
    pub(crate) fn from_record(wn: &'wn WordNet, record: SynlinkRecord) -> Self {
        let from = Synset::proxy(wn, record.synset1.clone());
        let to = Synset::proxy(wn, record.synset2.clone());
        Self { record, from, to }
    }

    /// Source synset.
    pub fn from(&self) -> &Synset<'wn> {
        &self.from
    }

    /// Target synset.
    pub fn to(&self) -> &Synset<'wn> {
        &self.to
    }

    pub fn link_type(&self) -> LinkType {
        self.record.link
    }

    pub fn provenance(&self) -> &str {
        &self.record.src
    }

    pub fn record(&self) -> &SynlinkRecord {
        &self.record
    }

    pub fn to_record(&self) -> SynlinkRecord {
        self.record.clone()
    }
}

impl PartialEq for Synlink<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.record.link == other.record.link
            && self.record.synset1 == other.record.synset1
            && self.record.synset2 == other.record.synset2
    }
}

impl Eq for Synlink<'_> {}

impl Hash for Synlink<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.link.hash(state);
        self.record.synset1.hash(state);
        self.record.synset2.hash(state);
    }
}

impl fmt::Debug for Synlink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synlink")
            .field("from", self.from.id())
            .field("to", self.to.id())
            .field("link", &self.record.link)
            .finish()
    }
}

impl fmt::Display for Synlink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.record, f)
    }
}
