//! store::queries
//!
//! The fixed set of query shapes issued against the lexicon.
//!
//! Each [`QueryShape`] owns exactly one SQL text, which is also the key of
//! the connection's prepared-statement cache. Results are ordered by
//! storage order (`rowid`) so lookups are deterministic.

use std::fmt;

/// A distinct query issued by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryShape {
    WordsByLemma,
    WordsByLemmaAndPos,
    WordById,
    SensesByWord,
    SensesBySynset,
    SensesBySynsetAndLang,
    SynsetsByNameAndPos,
    SynsetById,
    SynsetsBySenseWord,
    SynsetsLinkedFrom,
    DefinitionBySynset,
    SynlinksBySynset,
    SynlinksBySynsetAndLink,
    PosDefsByLang,
    LinkDefsByLang,
}

impl QueryShape {
    /// Number of distinct shapes.
    pub const COUNT: usize = 15;

    /// All shapes, in declaration order.
    pub const ALL: [QueryShape; Self::COUNT] = [
        QueryShape::WordsByLemma,
        QueryShape::WordsByLemmaAndPos,
        QueryShape::WordById,
        QueryShape::SensesByWord,
        QueryShape::SensesBySynset,
        QueryShape::SensesBySynsetAndLang,
        QueryShape::SynsetsByNameAndPos,
        QueryShape::SynsetById,
        QueryShape::SynsetsBySenseWord,
        QueryShape::SynsetsLinkedFrom,
        QueryShape::DefinitionBySynset,
        QueryShape::SynlinksBySynset,
        QueryShape::SynlinksBySynsetAndLink,
        QueryShape::PosDefsByLang,
        QueryShape::LinkDefsByLang,
    ];

    /// Stable name used in logs and statistics.
    pub fn name(&self) -> &'static str {
        match self {
            QueryShape::WordsByLemma => "words_by_lemma",
            QueryShape::WordsByLemmaAndPos => "words_by_lemma_and_pos",
            QueryShape::WordById => "word_by_id",
            QueryShape::SensesByWord => "senses_by_word",
            QueryShape::SensesBySynset => "senses_by_synset",
            QueryShape::SensesBySynsetAndLang => "senses_by_synset_and_lang",
            QueryShape::SynsetsByNameAndPos => "synsets_by_name_and_pos",
            QueryShape::SynsetById => "synset_by_id",
            QueryShape::SynsetsBySenseWord => "synsets_by_sense_word",
            QueryShape::SynsetsLinkedFrom => "synsets_linked_from",
            QueryShape::DefinitionBySynset => "definition_by_synset",
            QueryShape::SynlinksBySynset => "synlinks_by_synset",
            QueryShape::SynlinksBySynsetAndLink => "synlinks_by_synset_and_link",
            QueryShape::PosDefsByLang => "pos_defs_by_lang",
            QueryShape::LinkDefsByLang => "link_defs_by_lang",
        }
    }

    /// The SQL text for this shape.
    ///
    /// Column order matches the row decoders in `store::rows`.
    pub fn sql(&self) -> &'static str {
        match self {
            QueryShape::WordsByLemma => {
                "SELECT wordid, lang, lemma, pron, pos FROM WORD \
                 WHERE lemma = ?1 ORDER BY rowid"
            }
            QueryShape::WordsByLemmaAndPos => {
                "SELECT wordid, lang, lemma, pron, pos FROM WORD \
                 WHERE lemma = ?1 AND pos = ?2 ORDER BY rowid"
            }
            QueryShape::WordById => {
                "SELECT wordid, lang, lemma, pron, pos FROM WORD WHERE wordid = ?1"
            }
            QueryShape::SensesByWord => {
                "SELECT synset, wordid, lang, rank, lexid, freq, src FROM SENSE \
                 WHERE wordid = ?1 ORDER BY rowid"
            }
            QueryShape::SensesBySynset => {
                "SELECT synset, wordid, lang, rank, lexid, freq, src FROM SENSE \
                 WHERE synset = ?1 ORDER BY rowid"
            }
            QueryShape::SensesBySynsetAndLang => {
                "SELECT synset, wordid, lang, rank, lexid, freq, src FROM SENSE \
                 WHERE synset = ?1 AND lang = ?2 ORDER BY rowid"
            }
            QueryShape::SynsetsByNameAndPos => {
                "SELECT synset, pos, name, src FROM SYNSET \
                 WHERE name = ?1 AND pos = ?2 ORDER BY rowid"
            }
            QueryShape::SynsetById => "SELECT synset, pos, name, src FROM SYNSET WHERE synset = ?1",
            QueryShape::SynsetsBySenseWord => {
                "SELECT e.synset, s.pos, s.name, s.src, s.synset IS NOT NULL FROM SENSE e \
                 LEFT JOIN SYNSET s ON e.synset = s.synset \
                 WHERE e.wordid = ?1 ORDER BY e.rowid"
            }
            QueryShape::SynsetsLinkedFrom => {
                "SELECT l.synset2, s.pos, s.name, s.src, s.synset IS NOT NULL FROM SYNLINK l \
                 LEFT JOIN SYNSET s ON l.synset2 = s.synset \
                 WHERE l.synset1 = ?1 AND l.link = ?2 ORDER BY l.rowid"
            }
            QueryShape::DefinitionBySynset => {
                "SELECT synset, lang, def, sid FROM SYNSET_DEF \
                 WHERE synset = ?1 ORDER BY rowid LIMIT 1"
            }
            QueryShape::SynlinksBySynset => {
                "SELECT synset1, synset2, link, src FROM SYNLINK \
                 WHERE synset1 = ?1 ORDER BY rowid"
            }
            QueryShape::SynlinksBySynsetAndLink => {
                "SELECT synset1, synset2, link, src FROM SYNLINK \
                 WHERE synset1 = ?1 AND link = ?2 ORDER BY rowid"
            }
            QueryShape::PosDefsByLang => {
                "SELECT pos, lang, def FROM POS_DEF WHERE lang = ?1 ORDER BY rowid"
            }
            QueryShape::LinkDefsByLang => {
                "SELECT link, lang, def FROM LINK_DEF WHERE lang = ?1 ORDER BY rowid"
            }
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for QueryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-shape execution counts for one store.
///
/// A count is recorded for every execution attempt, whether it succeeded,
/// failed, or was served by a recompiled statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStats {
    counts: [u64; QueryShape::COUNT],
}

impl QueryStats {
    /// Record one execution of `shape`.
    pub(crate) fn record(&mut self, shape: QueryShape) {
        self.counts[shape.index()] += 1;
    }

    /// Number of executions of `shape`.
    pub fn get(&self, shape: QueryShape) -> u64 {
        self.counts[shape.index()]
    }

    /// Total executions across all shapes.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Shapes that were executed at least once, with their counts.
    pub fn executed(&self) -> impl Iterator<Item = (QueryShape, u64)> + '_ {
        QueryShape::ALL
            .into_iter()
            .map(|shape| (shape, self.get(shape)))
            .filter(|(_, count)| *count > 0)
    }
}
