//! core::types
//!
//! Strong types for the lexicon's closed vocabularies and identity keys.
//!
//! # Types
//!
//! - [`Pos`] - Part of speech (`a`, `r`, `n`, `v`)
//! - [`Lang`] - Language code (`eng`, `jpn`)
//! - [`LinkType`] - Directed relation kind between synsets
//! - [`WordId`] - Integer identity of a word
//! - [`SynsetId`] - String identity of a synset
//!
//! # Validation
//!
//! The vocabularies are fixed by the database schema. Parsing an unknown
//! code is an error, never a fallback value.
//!
//! # Examples
//!
//! ```
//! use wnj::core::types::{LinkType, Pos, SynsetId};
//!
//! let pos: Pos = "n".parse().unwrap();
//! assert_eq!(pos.description(), "noun");
//!
//! let link: LinkType = "hypo".parse().unwrap();
//! assert_eq!(link.description(), "Hyponym");
//!
//! assert!(SynsetId::new("00001740-n").is_ok());
//! assert!("x".parse::<Pos>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown part of speech: '{0}'")]
    UnknownPos(String),

    #[error("unknown language: '{0}'")]
    UnknownLang(String),

    #[error("unknown link type: '{0}'")]
    UnknownLinkType(String),

    #[error("invalid synset id: {0}")]
    InvalidSynsetId(String),
}

/// Part of speech.
///
/// Stored as a single letter in the `pos` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Pos {
    /// Adjective (`a`)
    Adjective,
    /// Adverb (`r`)
    Adverb,
    /// Noun (`n`)
    Noun,
    /// Verb (`v`)
    Verb,
}

impl Pos {
    /// All parts of speech in schema order.
    pub const ALL: [Pos; 4] = [Pos::Adjective, Pos::Adverb, Pos::Noun, Pos::Verb];

    /// The code stored in the database.
    pub fn code(&self) -> &'static str {
        match self {
            Pos::Adjective => "a",
            Pos::Adverb => "r",
            Pos::Noun => "n",
            Pos::Verb => "v",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Pos::Adjective => "adjective",
            Pos::Adverb => "adverb",
            Pos::Noun => "noun",
            Pos::Verb => "verb",
        }
    }
}

impl FromStr for Pos {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Pos::Adjective),
            "r" => Ok(Pos::Adverb),
            "n" => Ok(Pos::Noun),
            "v" => Ok(Pos::Verb),
            other => Err(TypeError::UnknownPos(other.to_string())),
        }
    }
}

impl TryFrom<String> for Pos {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pos> for String {
    fn from(pos: Pos) -> Self {
        pos.code().to_string()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Language of a word, sense, or definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Lang {
    /// English (`eng`)
    English,
    /// Japanese (`jpn`)
    Japanese,
}

impl Lang {
    /// All languages.
    pub const ALL: [Lang; 2] = [Lang::English, Lang::Japanese];

    /// The ISO 639-3 code stored in the database.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::English => "eng",
            Lang::Japanese => "jpn",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Lang::English => "English",
            Lang::Japanese => "Japanese",
        }
    }
}

impl FromStr for Lang {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eng" => Ok(Lang::English),
            "jpn" => Ok(Lang::Japanese),
            other => Err(TypeError::UnknownLang(other.to_string())),
        }
    }
}

impl TryFrom<String> for Lang {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Lang> for String {
    fn from(lang: Lang) -> Self {
        lang.code().to_string()
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Kind of a directed link between two synsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LinkType {
    /// See also (`also`)
    Also,
    /// Synonyms (`syns`)
    Synonyms,
    /// Hypernym (`hype`)
    Hypernym,
    /// Instance of (`inst`)
    Instance,
    /// Hyponym (`hypo`)
    Hyponym,
    /// Has instance (`hasi`)
    HasInstance,
    /// Meronym (`mero`)
    Meronym,
    /// Member meronym (`mmem`)
    MeronymMember,
    /// Substance meronym (`msub`)
    MeronymSubstance,
    /// Part meronym (`mprt`)
    MeronymPart,
    /// Holonym (`holo`)
    Holonym,
    /// Member holonym (`hmem`)
    HolonymMember,
    /// Substance holonym (`hsub`)
    HolonymSubstance,
    /// Part holonym (`hprt`)
    HolonymPart,
    /// Attribute (`attr`)
    Attribute,
    /// Similar to (`sim`)
    SimilarTo,
    /// Entails (`enta`)
    Entails,
    /// Causes (`caus`)
    Causes,
    /// Domain of category (`dmnc`)
    DomainCategory,
    /// Domain of usage (`dmnu`)
    DomainUsage,
    /// Domain of region (`dmnr`)
    DomainRegion,
    /// Member of category domain (`dmtc`)
    InDomainCategory,
    /// Member of usage domain (`dmtu`)
    InDomainUsage,
    /// Member of region domain (`dmtr`)
    InDomainRegion,
    /// Antonym (`ants`)
    Antonym,
}

impl LinkType {
    /// All link types in schema order.
    pub const ALL: [LinkType; 25] = [
        LinkType::Also,
        LinkType::Synonyms,
        LinkType::Hypernym,
        LinkType::Instance,
        LinkType::Hyponym,
        LinkType::HasInstance,
        LinkType::Meronym,
        LinkType::MeronymMember,
        LinkType::MeronymSubstance,
        LinkType::MeronymPart,
        LinkType::Holonym,
        LinkType::HolonymMember,
        LinkType::HolonymSubstance,
        LinkType::HolonymPart,
        LinkType::Attribute,
        LinkType::SimilarTo,
        LinkType::Entails,
        LinkType::Causes,
        LinkType::DomainCategory,
        LinkType::DomainUsage,
        LinkType::DomainRegion,
        LinkType::InDomainCategory,
        LinkType::InDomainUsage,
        LinkType::InDomainRegion,
        LinkType::Antonym,
    ];

    /// The code stored in `SYNLINK.link`.
    pub fn code(&self) -> &'static str {
        match self {
            LinkType::Also => "also",
            LinkType::Synonyms => "syns",
            LinkType::Hypernym => "hype",
            LinkType::Instance => "inst",
            LinkType::Hyponym => "hypo",
            LinkType::HasInstance => "hasi",
            LinkType::Meronym => "mero",
            LinkType::MeronymMember => "mmem",
            LinkType::MeronymSubstance => "msub",
            LinkType::MeronymPart => "mprt",
            LinkType::Holonym => "holo",
            LinkType::HolonymMember => "hmem",
            LinkType::HolonymSubstance => "hsub",
            LinkType::HolonymPart => "hprt",
            LinkType::Attribute => "attr",
            LinkType::SimilarTo => "sim",
            LinkType::Entails => "enta",
            LinkType::Causes => "caus",
            LinkType::DomainCategory => "dmnc",
            LinkType::DomainUsage => "dmnu",
            LinkType::DomainRegion => "dmnr",
            LinkType::InDomainCategory => "dmtc",
            LinkType::InDomainUsage => "dmtu",
            LinkType::InDomainRegion => "dmtr",
            LinkType::Antonym => "ants",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            LinkType::Also => "See also",
            LinkType::Synonyms => "Synonyms",
            LinkType::Hypernym => "Hypernyms",
            LinkType::Instance => "Instance",
            LinkType::Hyponym => "Hyponym",
            LinkType::HasInstance => "Has Instance",
            LinkType::Meronym => "Meronyms",
            LinkType::MeronymMember => "Meronyms - Member",
            LinkType::MeronymSubstance => "Meronyms - Substance",
            LinkType::MeronymPart => "Meronyms - Part",
            LinkType::Holonym => "Holonyms",
            LinkType::HolonymMember => "Holonyms - Member",
            LinkType::HolonymSubstance => "Holonyms - Substance",
            LinkType::HolonymPart => "Holonyms - Part",
            LinkType::Attribute => "Attributes",
            LinkType::SimilarTo => "Similar to",
            LinkType::Entails => "Entails",
            LinkType::Causes => "Causes",
            LinkType::DomainCategory => "Domain - Category",
            LinkType::DomainUsage => "Domain - Usage",
            LinkType::DomainRegion => "Domain - Region",
            LinkType::InDomainCategory => "In Domain - Category",
            LinkType::InDomainUsage => "In Domain - Usage",
            LinkType::InDomainRegion => "In Domain - Region",
            LinkType::Antonym => "Antonyms",
        }
    }
}

impl FromStr for LinkType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkType::ALL
            .into_iter()
            .find(|link| link.code() == s)
            .ok_or_else(|| TypeError::UnknownLinkType(s.to_string()))
    }
}

impl TryFrom<String> for LinkType {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LinkType> for String {
    fn from(link: LinkType) -> Self {
        link.code().to_string()
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identity of a word (`WORD.wordid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(i64);

impl WordId {
    /// Wrap a raw word id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw id.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for WordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a synset (`SYNSET.synset`), e.g. `00001740-n`.
///
/// # Example
///
/// ```
/// use wnj::core::types::{Pos, SynsetId};
///
/// let id = SynsetId::new("00001740-n").unwrap();
/// assert_eq!(id.as_str(), "00001740-n");
/// assert_eq!(id.pos_suffix(), Some(Pos::Noun));
///
/// assert!(SynsetId::new("").is_err());
/// assert!(SynsetId::new("0000 1740-n").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SynsetId(String);

impl SynsetId {
    /// Create a new validated synset id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidSynsetId` if the id is empty or contains
    /// whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::InvalidSynsetId(
                "synset id cannot be empty".into(),
            ));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidSynsetId(format!(
                "synset id cannot contain whitespace: '{id}'"
            )));
        }
        Ok(Self(id))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part of speech encoded in the `<offset>-<pos>` suffix, if any.
    pub fn pos_suffix(&self) -> Option<Pos> {
        let (_, suffix) = self.0.rsplit_once('-')?;
        suffix.parse().ok()
    }
}

impl FromStr for SynsetId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SynsetId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SynsetId> for String {
    fn from(id: SynsetId) -> Self {
        id.0
    }
}

impl AsRef<str> for SynsetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
