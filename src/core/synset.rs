//! core::synset
//!
//! Synsets: concept nodes of the graph.
//!
//! A [`Synset`] is built either from a full `SYNSET` row or as a lazy proxy
//! holding only its [`SynsetId`]; see [`core::word`](super::word) for the
//! resolution rules, which are identical.
//!
//! # Traversal
//!
//! - [`Synset::outgoing_links`] / [`Synset::outgoing_links_of`] return the
//!   typed edges leaving this synset.
//! - [`Synset::connected_synsets`] follows edges of one type and returns
//!   every target synset, in storage order.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::definition::SynsetDefinition;
use super::lazy::Slot;
use super::schema::SynsetRecord;
use super::sense::Sense;
use super::synlink::Synlink;
use super::types::{Lang, LinkType, Pos, SynsetId};
use crate::store::{ErrorPolicy, QueryShape, StoreError, WordNet};

/// A synset (concept) of the lexicon.
#[derive(Clone)]
pub struct Synset<'wn> {
    wn: &'wn WordNet,
    id: SynsetId,
    slot: Slot<SynsetRecord>,
}

impl<'wn> Synset<'wn> {
    /// A fully built synset.
    pub(crate) fn from_record(wn: &'wn WordNet, record: SynsetRecord) -> Self {
        Self {
            wn,
            id: record.synset.clone(),
            slot: Slot::resolved(record),
        }
    }

    /// A lazy proxy for the synset `id`.
    pub(crate) fn proxy(wn: &'wn WordNet, id: SynsetId) -> Self {
        Self {
            wn,
            id,
            slot: Slot::pending(),
        }
    }

    /// The synset id. Never queries.
    pub fn id(&self) -> &SynsetId {
        &self.id
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
    /// - [`StoreError::SynsetNotFound`] on a strict store when the row is missing
    /// - [`StoreError::Query`] on a strict store when the lookup fails
    pub fn details(&self) -> Result<Option<&SynsetRecord>, StoreError> {
        let wn = self.wn;
        let id = &self.id;
        match self.slot.get_or_load(|| wn.synset_record(id)) {
            Ok(Some(record)) => Ok(Some(record)),
            Ok(None) => match wn.policy() {
                ErrorPolicy::Strict => Err(StoreError::SynsetNotFound(id.clone())),
                ErrorPolicy::Lenient => Ok(None),
            },
            // Left unresolved so the next read retries.
            Err(err) => wn.apply_policy(QueryShape::SynsetById, Err(err), None),
        }
    }

    /// The canonical name.
    pub fn name(&self) -> Result<&str, StoreError> {
        Ok(self.details()?.map(|r| r.name.as_str()).unwrap_or(""))
    }

    /// The part of speech.
    pub fn pos(&self) -> Result<Option<Pos>, StoreError> {
        Ok(self.details()?.map(|r| r.pos))
    }

    /// The provenance tag.
    pub fn provenance(&self) -> Result<&str, StoreError> {
        Ok(self.details()?.map(|r| r.src.as_str()).unwrap_or(""))
    }

    /// The definition (gloss), if any.
    ///
    /// The definition refers back to this synset without re-resolving it.
    pub fn definition(&self) -> Result<Option<SynsetDefinition<'wn>>, StoreError> {
        Ok(self
            .wn
            .definition_record(&self.id)?
            .map(|record| SynsetDefinition::with_synset(record, self.clone())))
    }

    /// Senses attaching words to this synset.
    pub fn senses(&self) -> Result<Vec<Sense<'wn>>, StoreError> {
        self.wn.senses_by_synset(&self.id)
    }

    /// Senses attaching words of language `lang` to this synset.
    pub fn senses_in(&self, lang: Lang) -> Result<Vec<Sense<'wn>>, StoreError> {
        self.wn.senses_by_synset_and_lang(&self.id, lang)
    }

    /// Every link leaving this synset.
    pub fn outgoing_links(&self) -> Result<Vec<Synlink<'wn>>, StoreError> {
        self.wn.synlinks_by_synset(&self.id)
    }

    /// Links of type `link` leaving this synset.
    pub fn outgoing_links_of(&self, link: LinkType) -> Result<Vec<Synlink<'wn>>, StoreError> {
        self.wn.synlinks_by_synset_and_link(&self.id, link)
    }

    /// Every synset reached by a link of type `link`, in storage order.
    ///
    /// Targets that have a `SYNSET` row come back resolved. A target without
    /// one comes back as a proxy carrying only its id.
    pub fn connected_synsets(&self, link: LinkType) -> Result<Vec<Synset<'wn>>, StoreError> {
        self.wn.synsets_linked_from(&self.id, link)
    }

    /// A copy of the full row.
    pub fn to_record(&self) -> Result<Option<SynsetRecord>, StoreError> {
        Ok(self.details()?.cloned())
    }
}

impl PartialEq for Synset<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Synset<'_> {}

impl Hash for Synset<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Synset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synset")
            .field("id", &self.id)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Writes the row as JSON, resolving a proxy first.
///
/// A synset that cannot be resolved is written as `{"synset":"<id>"}`.
impl fmt::Display for Synset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.details() {
            Ok(Some(record)) => fmt::Display::fmt(record, f),
            _ => {
                let id = serde_json::to_string(self.id.as_str()).map_err(|_| fmt::Error)?;
                write!(f, "{{\"synset\":{id}}}")
            }
        }
    }
}
