//! core::schema
//!
//! Row records for the lexicon tables.
//!
//! # Design
//!
//! Each record mirrors one row of a table, with field names matching the
//! column names. Records are plain data: they carry no connection and never
//! resolve anything. Entities are built from records by the store, and
//! entities serialize back to records for their diagnostic JSON form.
//!
//! Parsing is strict: unknown fields are rejected and codes are validated
//! through [`crate::core::types`].
//!
//! # Example
//!
//! ```
//! use wnj::core::schema::{parse_record, WordRecord};
//! use wnj::core::types::{Lang, Pos, WordId};
//!
//! let json = r#"{"wordid": 1, "lang": "eng", "lemma": "path", "pron": null, "pos": "n"}"#;
//! let record: WordRecord = parse_record(json).unwrap();
//! assert_eq!(record.wordid, WordId::new(1));
//! assert_eq!(record.lang, Lang::English);
//! assert_eq!(record.pos, Pos::Noun);
//! ```

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Lang, LinkType, Pos, SynsetId, WordId};

/// Errors from parsing a diagnostic record.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse record: {0}")]
    ParseError(String),
}

/// Parse a record from its diagnostic JSON form.
///
/// # Errors
///
/// Returns [`SchemaError::ParseError`] on malformed JSON, unknown fields,
/// missing fields, or invalid codes.
pub fn parse_record<T: DeserializeOwned>(json: &str) -> Result<T, SchemaError> {
    serde_json::from_str(json).map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Write a record as compact JSON.
fn write_json<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&json)
}

/// A row of `WORD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordRecord {
    pub wordid: WordId,
    pub lang: Lang,
    /// Headword, stored lowercased
    pub lemma: String,
    /// Pronunciation (NULL for most entries)
    pub pron: Option<String>,
    pub pos: Pos,
}

/// A row of `SYNSET`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynsetRecord {
    pub synset: SynsetId,
    pub pos: Pos,
    /// Canonical name of the concept
    pub name: String,
    /// Provenance tag (e.g. `eng30`)
    pub src: String,
}

/// A row of `SENSE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SenseRecord {
    pub synset: SynsetId,
    pub wordid: WordId,
    pub lang: Lang,
    pub rank: i64,
    pub lexid: i64,
    pub freq: i64,
    pub src: String,
}

/// A row of `SYNSET_DEF`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynsetDefRecord {
    pub synset: SynsetId,
    pub lang: Lang,
    pub def: String,
    pub sid: i64,
}

/// A row of `SYNLINK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynlinkRecord {
    /// Source synset
    pub synset1: SynsetId,
    /// Target synset
    pub synset2: SynsetId,
    pub link: LinkType,
    pub src: String,
}

/// A row of `POS_DEF`: localized description of a part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PosDefRecord {
    pub pos: Pos,
    pub lang: Lang,
    pub def: String,
}

/// A row of `LINK_DEF`: localized description of a link type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkDefRecord {
    pub link: LinkType,
    pub lang: Lang,
    pub def: String,
}

macro_rules! impl_json_display {
    ($($record:ty),* $(,)?) => {
        $(
            impl fmt::Display for $record {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write_json(self, f)
                }
            }
        )*
    };
}

impl_json_display!(
    WordRecord,
    SynsetRecord,
    SenseRecord,
    SynsetDefRecord,
    SynlinkRecord,
    PosDefRecord,
    LinkDefRecord,
);
