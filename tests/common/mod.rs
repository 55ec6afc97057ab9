//! Shared fixtures: lexicon databases written to temporary files.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

/// Lexicon tables as laid out in the distributed database.
///
/// `SENSE.rank` and `SYNSET_DEF.sid` are TEXT there, so they are here too.
pub const SCHEMA: &str = "
    CREATE TABLE WORD (wordid INTEGER PRIMARY KEY, lang TEXT, lemma TEXT, pron TEXT, pos TEXT);
    CREATE TABLE SENSE (synset TEXT, wordid INTEGER, lang TEXT, rank TEXT, lexid INTEGER, freq INTEGER, src TEXT);
    CREATE TABLE SYNSET (synset TEXT, pos TEXT, name TEXT, src TEXT);
    CREATE TABLE SYNSET_DEF (synset TEXT, lang TEXT, def TEXT, sid TEXT);
    CREATE TABLE SYNLINK (synset1 TEXT, synset2 TEXT, link TEXT, src TEXT);
";

/// The auxiliary vocabulary tables.
pub const VOCAB_SCHEMA: &str = "
    CREATE TABLE POS_DEF (pos TEXT, lang TEXT, def TEXT);
    CREATE TABLE LINK_DEF (link TEXT, lang TEXT, def TEXT);
";

/// A database file that lives as long as the fixture.
pub struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write a database built by running `sql`.
pub fn database(sql: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wnjpn.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(sql).unwrap();
    conn.close().unwrap();
    Fixture { _dir: dir, path }
}

/// The minimal lexicon: one word, one synset, one sense, one link whose
/// target has no `SYNSET` row. No vocabulary tables.
pub fn scenario() -> Fixture {
    database(&format!(
        "{SCHEMA}
         INSERT INTO WORD VALUES (1, 'eng', 'path', NULL, 'n');
         INSERT INTO SYNSET VALUES ('00001740-n', 'n', 'path', 'eng30');
         INSERT INTO SENSE VALUES ('00001740-n', 1, 'eng', '1', 0, 5, 'eng30');
         INSERT INTO SYNLINK VALUES ('00001740-n', '00001741-n', 'hypo', 'eng30');"
    ))
}

/// [`scenario`] plus the `SYNSET` row for the link target.
pub fn scenario_with_target() -> Fixture {
    database(&format!(
        "{SCHEMA}
         INSERT INTO WORD VALUES (1, 'eng', 'path', NULL, 'n');
         INSERT INTO SYNSET VALUES ('00001740-n', 'n', 'path', 'eng30');
         INSERT INTO SYNSET VALUES ('00001741-n', 'n', 'trail', 'eng30');
         INSERT INTO SENSE VALUES ('00001740-n', 1, 'eng', '1', 0, 5, 'eng30');
         INSERT INTO SYNLINK VALUES ('00001740-n', '00001741-n', 'hypo', 'eng30');"
    ))
}

/// A small but complete lexicon.
///
/// `00001740-n` (path) has three hyponyms, one hypernym, and one meronym
/// link to `00009999-n`, which has no `SYNSET` row.
pub fn lexicon() -> Fixture {
    database(&format!(
        "{SCHEMA}
         {VOCAB_SCHEMA}
         INSERT INTO WORD VALUES (1, 'eng', 'path', NULL, 'n');
         INSERT INTO WORD VALUES (2, 'jpn', '道', 'みち', 'n');
         INSERT INTO WORD VALUES (3, 'eng', 'trail', NULL, 'n');
         INSERT INTO WORD VALUES (4, 'eng', 'walk', NULL, 'v');

         INSERT INTO SYNSET VALUES ('00001740-n', 'n', 'path', 'eng30');
         INSERT INTO SYNSET VALUES ('00001741-n', 'n', 'trail', 'eng30');
         INSERT INTO SYNSET VALUES ('00001742-n', 'n', 'footpath', 'eng30');
         INSERT INTO SYNSET VALUES ('00001743-n', 'n', 'bridle_path', 'eng30');
         INSERT INTO SYNSET VALUES ('00002000-n', 'n', 'way', 'eng30');

         INSERT INTO SENSE VALUES ('00001740-n', 1, 'eng', '1', 0, 5, 'eng30');
         INSERT INTO SENSE VALUES ('00001740-n', 2, 'jpn', '2', 0, NULL, 'hand');
         INSERT INTO SENSE VALUES ('00001741-n', 3, 'eng', '1', 0, 2, 'eng30');

         INSERT INTO SYNSET_DEF VALUES ('00001740-n', 'eng', 'a way or track laid down for walking', '0');
         INSERT INTO SYNSET_DEF VALUES ('00001740-n', 'jpn', '歩くための道', '0');

         INSERT INTO SYNLINK VALUES ('00001740-n', '00001741-n', 'hypo', 'eng30');
         INSERT INTO SYNLINK VALUES ('00001740-n', '00002000-n', 'hype', 'eng30');
         INSERT INTO SYNLINK VALUES ('00001740-n', '00001742-n', 'hypo', 'eng30');
         INSERT INTO SYNLINK VALUES ('00001740-n', '00009999-n', 'mero', 'eng30');
         INSERT INTO SYNLINK VALUES ('00001740-n', '00001743-n', 'hypo', 'eng30');

         INSERT INTO POS_DEF VALUES ('n', 'eng', 'noun');
         INSERT INTO POS_DEF VALUES ('v', 'eng', 'verb');
         INSERT INTO POS_DEF VALUES ('n', 'jpn', '名詞');
         INSERT INTO LINK_DEF VALUES ('hypo', 'eng', 'Hyponym');
         INSERT INTO LINK_DEF VALUES ('hype', 'eng', 'Hypernyms');"
    ))
}
