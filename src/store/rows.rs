//! store::rows
//!
//! Decoding of result rows into records.
//!
//! The distributed database is loosely typed: `SENSE.rank` and
//! `SYNSET_DEF.sid` are TEXT columns holding numbers, and provenance or
//! pronunciation columns are frequently NULL. Decoders accept these forms.
//! Codes (part of speech, language, link type) are validated strictly.

use std::str::FromStr;

use rusqlite::types::ValueRef;
use rusqlite::Row;

use crate::core::schema::{
    LinkDefRecord, PosDefRecord, SenseRecord, SynlinkRecord, SynsetDefRecord, SynsetRecord,
    WordRecord,
};
use crate::core::types::{SynsetId, TypeError, WordId};

/// Failure to decode one row.
#[derive(Debug)]
pub(crate) enum RowError {
    /// The driver could not read a column.
    Sql(rusqlite::Error),
    /// A column held a value outside the schema's vocabulary.
    Invalid(String),
}

impl From<rusqlite::Error> for RowError {
    fn from(e: rusqlite::Error) -> Self {
        RowError::Sql(e)
    }
}

impl From<TypeError> for RowError {
    fn from(e: TypeError) -> Self {
        RowError::Invalid(e.to_string())
    }
}

fn utf8(bytes: &[u8], idx: usize) -> Result<&str, RowError> {
    std::str::from_utf8(bytes)
        .map_err(|e| RowError::Invalid(format!("column {idx} is not valid UTF-8: {e}")))
}

/// Read a text column; NULL reads as `None`.
fn opt_text(row: &Row<'_>, idx: usize) -> Result<Option<String>, RowError> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Text(bytes) => Ok(Some(utf8(bytes, idx)?.to_string())),
        ValueRef::Integer(i) => Ok(Some(i.to_string())),
        ValueRef::Real(f) => Ok(Some(f.to_string())),
        ValueRef::Blob(_) => Err(RowError::Invalid(format!(
            "column {idx} holds a blob, expected text"
        ))),
    }
}

/// Read a text column; NULL reads as the empty string.
fn text(row: &Row<'_>, idx: usize) -> Result<String, RowError> {
    Ok(opt_text(row, idx)?.unwrap_or_default())
}

/// Read an integer column stored as INTEGER, integral REAL or numeric TEXT;
/// NULL reads as 0.
fn int(row: &Row<'_>, idx: usize) -> Result<i64, RowError> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(0),
        ValueRef::Integer(i) => Ok(i),
        ValueRef::Real(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        ValueRef::Real(f) => Err(RowError::Invalid(format!(
            "column {idx} is not an integer: {f}"
        ))),
        ValueRef::Text(bytes) => {
            let s = utf8(bytes, idx)?.trim();
            if s.is_empty() {
                return Ok(0);
            }
            s.parse()
                .map_err(|_| RowError::Invalid(format!("column {idx} is not an integer: '{s}'")))
        }
        ValueRef::Blob(_) => Err(RowError::Invalid(format!(
            "column {idx} holds a blob, expected integer"
        ))),
    }
}

/// Read a code column through its `FromStr` vocabulary.
fn code<T>(row: &Row<'_>, idx: usize) -> Result<T, RowError>
where
    T: FromStr<Err = TypeError>,
{
    Ok(text(row, idx)?.parse()?)
}

fn synset_id(row: &Row<'_>, idx: usize) -> Result<SynsetId, RowError> {
    Ok(SynsetId::new(text(row, idx)?)?)
}

fn word_id(row: &Row<'_>, idx: usize) -> Result<WordId, RowError> {
    Ok(WordId::new(int(row, idx)?))
}

/// `wordid, lang, lemma, pron, pos`
pub(crate) fn word(row: &Row<'_>) -> Result<WordRecord, RowError> {
    Ok(WordRecord {
        wordid: word_id(row, 0)?,
        lang: code(row, 1)?,
        lemma: text(row, 2)?,
        pron: opt_text(row, 3)?,
        pos: code(row, 4)?,
    })
}

/// `synset, pos, name, src`
pub(crate) fn synset(row: &Row<'_>) -> Result<SynsetRecord, RowError> {
    Ok(SynsetRecord {
        synset: synset_id(row, 0)?,
        pos: code(row, 1)?,
        name: text(row, 2)?,
        src: text(row, 3)?,
    })
}

/// A synset reached through a join, which may have no `SYNSET` row.
#[derive(Debug)]
pub(crate) enum JoinedSynset {
    /// The target row exists.
    Found(SynsetRecord),
    /// Only the target id is known.
    Dangling(SynsetId),
}

/// `target_id, pos, name, src, has_row` from a `LEFT JOIN SYNSET`
pub(crate) fn joined_synset(row: &Row<'_>) -> Result<JoinedSynset, RowError> {
    let id = synset_id(row, 0)?;
    if int(row, 4)? == 0 {
        return Ok(JoinedSynset::Dangling(id));
    }
    Ok(JoinedSynset::Found(SynsetRecord {
        synset: id,
        pos: code(row, 1)?,
        name: text(row, 2)?,
        src: text(row, 3)?,
    }))
}

/// `synset, wordid, lang, rank, lexid, freq, src`
pub(crate) fn sense(row: &Row<'_>) -> Result<SenseRecord, RowError> {
    Ok(SenseRecord {
        synset: synset_id(row, 0)?,
        wordid: word_id(row, 1)?,
        lang: code(row, 2)?,
        rank: int(row, 3)?,
        lexid: int(row, 4)?,
        freq: int(row, 5)?,
        src: text(row, 6)?,
    })
}

/// `synset, lang, def, sid`
pub(crate) fn definition(row: &Row<'_>) -> Result<SynsetDefRecord, RowError> {
    Ok(SynsetDefRecord {
        synset: synset_id(row, 0)?,
        lang: code(row, 1)?,
        def: text(row, 2)?,
        sid: int(row, 3)?,
    })
}

/// `synset1, synset2, link, src`
pub(crate) fn synlink(row: &Row<'_>) -> Result<SynlinkRecord, RowError> {
    Ok(SynlinkRecord {
        synset1: synset_id(row, 0)?,
        synset2: synset_id(row, 1)?,
        link: code(row, 2)?,
        src: text(row, 3)?,
    })
}

/// `pos, lang, def`
pub(crate) fn pos_def(row: &Row<'_>) -> Result<PosDefRecord, RowError> {
    Ok(PosDefRecord {
        pos: code(row, 0)?,
        lang: code(row, 1)?,
        def: text(row, 2)?,
    })
}

/// `link, lang, def`
pub(crate) fn link_def(row: &Row<'_>) -> Result<LinkDefRecord, RowError> {
    Ok(LinkDefRecord {
        link: code(row, 0)?,
        lang: code(row, 1)?,
        def: text(row, 2)?,
    })
}
