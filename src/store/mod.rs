//! store
//!
//! The single doorway to the lexicon database.
//!
//! # Architecture
//!
//! [`WordNet`] owns one SQLite connection and answers every lookup and
//! traversal. Entities ([`Word`], [`Synset`], and the value entities) borrow
//! the store and call back into it when a lazy field is first read, so the
//! borrow checker guarantees no entity outlives its connection.
//!
//! # Statement Cache
//!
//! Every query goes through one of the fixed [`QueryShape`]s. Statements are
//! taken from the connection's bounded LRU statement cache, keyed by the
//! shape's SQL text. An evicted statement is recompiled on its next use;
//! callers never observe eviction.
//!
//! # Error Policy
//!
//! Opening the database always reports failures. Query failures obey the
//! store's [`ErrorPolicy`]:
//!
//! - [`ErrorPolicy::Strict`] returns [`StoreError::Query`], and a lazy
//!   entity whose row is missing reports [`StoreError::WordNotFound`] or
//!   [`StoreError::SynsetNotFound`].
//! - [`ErrorPolicy::Lenient`] logs the failure and degrades to an empty
//!   result; a lazy entity whose row is missing reads as empty fields.
//!
//! Values outside the schema's vocabulary ([`StoreError::InvalidRow`]) are
//! reported under both policies.
//!
//! # Example
//!
//! ```no_run
//! use wnj::core::types::{LinkType, Pos};
//! use wnj::store::WordNet;
//!
//! let wn = WordNet::open("wnjpn.db")?;
//! for synset in wn.synsets_by_name("path", Pos::Noun)? {
//!     for hyponym in synset.connected_synsets(LinkType::Hyponym)? {
//!         println!("{hyponym}");
//!     }
//! }
//! wn.close()?;
//! # Ok::<(), wnj::store::StoreError>(())
//! ```

pub mod queries;
mod rows;

pub use queries::{QueryShape, QueryStats};

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use rusqlite::{params, Connection, OpenFlags, Params, Row};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::definition::SynsetDefinition;
use crate::core::schema::{LinkDefRecord, PosDefRecord, SynsetDefRecord, SynsetRecord, WordRecord};
use crate::core::sense::Sense;
use crate::core::synlink::Synlink;
use crate::core::synset::Synset;
use crate::core::types::{Lang, LinkType, Pos, SynsetId, WordId};
use crate::core::word::Word;
use rows::RowError;

/// Tables a lexicon database must contain.
pub const REQUIRED_TABLES: [&str; 5] = ["WORD", "SENSE", "SYNSET", "SYNSET_DEF", "SYNLINK"];

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file does not exist.
    #[error("database not found: {}", .0.display())]
    NotFound(PathBuf),

    /// SQLite could not open or attach the database.
    #[error("failed to open database '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// A caller-supplied connection could not be configured.
    #[error("failed to configure connection: {0}")]
    Configure(rusqlite::Error),

    /// The database lacks tables of the lexicon schema.
    #[error("database is missing tables: {}", .0.join(", "))]
    MissingTables(Vec<String>),

    /// A query failed to prepare or execute.
    #[error("query {shape} failed: {source}")]
    Query {
        shape: QueryShape,
        source: rusqlite::Error,
    },

    /// A row held a value outside the schema's vocabulary.
    #[error("invalid row from {shape}: {message}")]
    InvalidRow { shape: QueryShape, message: String },

    /// A lazy word refers to a word id with no row.
    #[error("word not found: {0}")]
    WordNotFound(WordId),

    /// A lazy synset refers to a synset id with no row.
    #[error("synset not found: {0}")]
    SynsetNotFound(SynsetId),

    /// Closing the connection failed.
    #[error("failed to close database: {0}")]
    Close(rusqlite::Error),
}

/// How query failures and missing rows are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Report every failure to the caller.
    #[default]
    Strict,
    /// Log failures and degrade to empty results and empty entities.
    Lenient,
}

impl ErrorPolicy {
    /// Name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Strict => "strict",
            ErrorPolicy::Lenient => "lenient",
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ErrorPolicy::Strict),
            "lenient" => Ok(ErrorPolicy::Lenient),
            other => Err(format!(
                "invalid policy '{other}', must be one of: strict, lenient"
            )),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options applied when a store is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Failure reporting policy
    pub policy: ErrorPolicy,
    /// Maximum number of prepared statements kept by the connection
    pub statement_cache_capacity: usize,
    /// How long to wait on a locked database before failing
    pub busy_timeout: Duration,
}

impl StoreOptions {
    /// Default statement cache capacity: room for every query shape.
    pub const DEFAULT_STATEMENT_CACHE_CAPACITY: usize = 16;

    /// Default busy timeout.
    pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

    /// Set the error policy.
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the statement cache capacity (at least 1).
    pub fn with_statement_cache_capacity(mut self, capacity: usize) -> Self {
        self.statement_cache_capacity = capacity.max(1);
        self
    }

    /// Set the busy timeout.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            policy: ErrorPolicy::default(),
            statement_cache_capacity: Self::DEFAULT_STATEMENT_CACHE_CAPACITY,
            busy_timeout: Self::DEFAULT_BUSY_TIMEOUT,
        }
    }
}

/// Read-only access to a lexicon database.
///
/// All lookups return entities borrowing this store. Results of multi-row
/// lookups are in storage order.
pub struct WordNet {
    conn: Connection,
    options: StoreOptions,
    path: Option<PathBuf>,
    stats: RefCell<QueryStats>,
}

impl WordNet {
    // =========================================================================
    // Construction and teardown
    // =========================================================================

    /// Open the database file at `path` with default options.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the file does not exist
    /// - [`StoreError::Open`] if SQLite cannot open it as a database
    /// - [`StoreError::MissingTables`] if it is not a lexicon database
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with(path, StoreOptions::default())
    }

    /// Open the database file at `path` with the given options.
    ///
    /// The file is opened read-only.
    pub fn open_with(path: impl AsRef<Path>, options: StoreOptions) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_NO_MUTEX
            | OpenFlags::SQLITE_OPEN_URI;
        let open_error = |source: rusqlite::Error| StoreError::Open {
            path: path.to_path_buf(),
            source,
        };
        let conn = Connection::open_with_flags(path, flags).map_err(open_error)?;
        conn.busy_timeout(options.busy_timeout).map_err(open_error)?;

        // SQLite attaches lazily; reading the catalog surfaces non-database files.
        verify_schema(&conn).map_err(|e| match e {
            SchemaCheck::Sql(source) => open_error(source),
            SchemaCheck::Missing(tables) => StoreError::MissingTables(tables),
        })?;

        tracing::debug!(path = %path.display(), policy = %options.policy, "opened lexicon database");
        Ok(Self::assemble(conn, options, Some(path.to_path_buf())))
    }

    /// Wrap a connection opened by the caller, with default options.
    ///
    /// The store takes ownership of the connection: [`WordNet::close`]
    /// closes it, and [`WordNet::into_connection`] hands it back open.
    pub fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        Self::from_connection_with(conn, StoreOptions::default())
    }

    /// Wrap a connection opened by the caller, with the given options.
    pub fn from_connection_with(
        conn: Connection,
        options: StoreOptions,
    ) -> Result<Self, StoreError> {
        conn.busy_timeout(options.busy_timeout)
            .map_err(StoreError::Configure)?;
        verify_schema(&conn).map_err(|e| match e {
            SchemaCheck::Sql(source) => StoreError::Configure(source),
            SchemaCheck::Missing(tables) => StoreError::MissingTables(tables),
        })?;
        Ok(Self::assemble(conn, options, None))
    }

    fn assemble(conn: Connection, options: StoreOptions, path: Option<PathBuf>) -> Self {
        conn.set_prepared_statement_cache_capacity(options.statement_cache_capacity.max(1));
        Self {
            conn,
            options,
            path,
            stats: RefCell::new(QueryStats::default()),
        }
    }

    /// Close the connection.
    ///
    /// Consumes the store, so it cannot be closed twice or used after
    /// closing. Dropping a store also releases its connection.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Close(e))
    }

    /// Release the connection without closing it.
    pub fn into_connection(self) -> Connection {
        self.conn
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Options the store was created with.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// The failure reporting policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.options.policy
    }

    /// Path of the database file, if opened from a path.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Snapshot of per-shape execution counts.
    pub fn query_stats(&self) -> QueryStats {
        self.stats.borrow().clone()
    }

    // =========================================================================
    // Public lookups
    // =========================================================================

    /// Words whose lemma matches `lemma` (compared lowercased).
    pub fn words_by_lemma(&self, lemma: &str) -> Result<Vec<Word<'_>>, StoreError> {
        let lemma = lemma.to_lowercase();
        let records = self.fetch_all(QueryShape::WordsByLemma, params![lemma], rows::word)?;
        Ok(self.words(records))
    }

    /// Words whose lemma matches `lemma` (compared lowercased) with part of
    /// speech `pos`.
    pub fn words_by_lemma_and_pos(
        &self,
        lemma: &str,
        pos: Pos,
    ) -> Result<Vec<Word<'_>>, StoreError> {
        let lemma = lemma.to_lowercase();
        let records = self.fetch_all(
            QueryShape::WordsByLemmaAndPos,
            params![lemma, pos.code()],
            rows::word,
        )?;
        Ok(self.words(records))
    }

    /// Synsets with exactly this name and part of speech.
    pub fn synsets_by_name(&self, name: &str, pos: Pos) -> Result<Vec<Synset<'_>>, StoreError> {
        let records = self.fetch_all(
            QueryShape::SynsetsByNameAndPos,
            params![name, pos.code()],
            rows::synset,
        )?;
        Ok(self.synsets(records))
    }

    /// The word with this id, fully resolved.
    pub fn word_by_id(&self, id: WordId) -> Result<Option<Word<'_>>, StoreError> {
        let record = self.apply_policy(QueryShape::WordById, self.word_record(id), None)?;
        Ok(record.map(|record| Word::from_record(self, record)))
    }

    /// The synset with this id, fully resolved.
    pub fn synset_by_id(&self, id: &SynsetId) -> Result<Option<Synset<'_>>, StoreError> {
        let record = self.apply_policy(QueryShape::SynsetById, self.synset_record(id), None)?;
        Ok(record.map(|record| Synset::from_record(self, record)))
    }

    /// A lazy word: no query runs until a derived field is read.
    pub fn word_proxy(&self, id: WordId) -> Word<'_> {
        Word::proxy(self, id)
    }

    /// A lazy synset: no query runs until a derived field is read.
    pub fn synset_proxy(&self, id: SynsetId) -> Synset<'_> {
        Synset::proxy(self, id)
    }

    /// Senses attaching the word `id` to synsets.
    pub fn senses_by_word(&self, id: WordId) -> Result<Vec<Sense<'_>>, StoreError> {
        let records = self.fetch_all(QueryShape::SensesByWord, params![id.get()], rows::sense)?;
        Ok(records
            .into_iter()
            .map(|record| Sense::from_record(self, record))
            .collect())
    }

    /// Senses attaching words to the synset `id`.
    pub fn senses_by_synset(&self, id: &SynsetId) -> Result<Vec<Sense<'_>>, StoreError> {
        let records = self.fetch_all(
            QueryShape::SensesBySynset,
            params![id.as_str()],
            rows::sense,
        )?;
        Ok(records
            .into_iter()
            .map(|record| Sense::from_record(self, record))
            .collect())
    }

    /// Senses attaching words of language `lang` to the synset `id`.
    pub fn senses_by_synset_and_lang(
        &self,
        id: &SynsetId,
        lang: Lang,
    ) -> Result<Vec<Sense<'_>>, StoreError> {
        let records = self.fetch_all(
            QueryShape::SensesBySynsetAndLang,
            params![id.as_str(), lang.code()],
            rows::sense,
        )?;
        Ok(records
            .into_iter()
            .map(|record| Sense::from_record(self, record))
            .collect())
    }

    /// The first definition of the synset `id`.
    pub fn definition_by_synset(
        &self,
        id: &SynsetId,
    ) -> Result<Option<SynsetDefinition<'_>>, StoreError> {
        Ok(self
            .definition_record(id)?
            .map(|record| SynsetDefinition::from_record(self, record)))
    }

    /// All links leaving the synset `id`.
    pub fn synlinks_by_synset(&self, id: &SynsetId) -> Result<Vec<Synlink<'_>>, StoreError> {
        let records = self.fetch_all(
            QueryShape::SynlinksBySynset,
            params![id.as_str()],
            rows::synlink,
        )?;
        Ok(records
            .into_iter()
            .map(|record| Synlink::from_record(self, record))
            .collect())
    }

    /// Links of type `link` leaving the synset `id`.
    pub fn synlinks_by_synset_and_link(
        &self,
        id: &SynsetId,
        link: LinkType,
    ) -> Result<Vec<Synlink<'_>>, StoreError> {
        let records = self.fetch_all(
            QueryShape::SynlinksBySynsetAndLink,
            params![id.as_str(), link.code()],
            rows::synlink,
        )?;
        Ok(records
            .into_iter()
            .map(|record| Synlink::from_record(self, record))
            .collect())
    }

    /// Every synset reached from `id` by a link of type `link`, in storage
    /// order.
    ///
    /// Targets with a `SYNSET` row come back resolved. A target without one
    /// comes back as a lazy proxy, which then follows the error policy when
    /// its fields are read.
    pub fn synsets_linked_from(
        &self,
        id: &SynsetId,
        link: LinkType,
    ) -> Result<Vec<Synset<'_>>, StoreError> {
        let targets = self.fetch_all(
            QueryShape::SynsetsLinkedFrom,
            params![id.as_str(), link.code()],
            rows::joined_synset,
        )?;
        Ok(self.joined_synsets(targets))
    }

    /// Synsets the word `id` is attached to through `SENSE`, in sense order.
    ///
    /// Dangling sense targets come back as lazy proxies.
    pub fn synsets_by_sense_word(&self, id: WordId) -> Result<Vec<Synset<'_>>, StoreError> {
        let targets = self.fetch_all(
            QueryShape::SynsetsBySenseWord,
            params![id.get()],
            rows::joined_synset,
        )?;
        Ok(self.joined_synsets(targets))
    }

    /// Localized part-of-speech descriptions from `POS_DEF`.
    pub fn pos_descriptions(&self, lang: Lang) -> Result<Vec<PosDefRecord>, StoreError> {
        self.fetch_all(QueryShape::PosDefsByLang, params![lang.code()], rows::pos_def)
    }

    /// Localized link-type descriptions from `LINK_DEF`.
    pub fn link_descriptions(&self, lang: Lang) -> Result<Vec<LinkDefRecord>, StoreError> {
        self.fetch_all(QueryShape::LinkDefsByLang, params![lang.code()], rows::link_def)
    }

    // =========================================================================
    // Record lookups used by lazy entities
    // =========================================================================

    // The two id lookups return query failures as-is, whatever the policy.
    // Callers degrade them after the resolution slot has been left empty.

    pub(crate) fn word_record(&self, id: WordId) -> Result<Option<WordRecord>, StoreError> {
        self.execute(QueryShape::WordById, params![id.get()], rows::word, 1)
            .map(|rows| rows.into_iter().next())
    }

    pub(crate) fn synset_record(&self, id: &SynsetId) -> Result<Option<SynsetRecord>, StoreError> {
        self.execute(QueryShape::SynsetById, params![id.as_str()], rows::synset, 1)
            .map(|rows| rows.into_iter().next())
    }

    pub(crate) fn definition_record(
        &self,
        id: &SynsetId,
    ) -> Result<Option<SynsetDefRecord>, StoreError> {
        self.fetch_first(
            QueryShape::DefinitionBySynset,
            params![id.as_str()],
            rows::definition,
        )
    }

    // =========================================================================
    // Query execution
    // =========================================================================

    fn words(&self, records: Vec<WordRecord>) -> Vec<Word<'_>> {
        records
            .into_iter()
            .map(|record| Word::from_record(self, record))
            .collect()
    }

    fn synsets(&self, records: Vec<SynsetRecord>) -> Vec<Synset<'_>> {
        records
            .into_iter()
            .map(|record| Synset::from_record(self, record))
            .collect()
    }

    fn joined_synsets(&self, targets: Vec<rows::JoinedSynset>) -> Vec<Synset<'_>> {
        targets
            .into_iter()
            .map(|target| match target {
                rows::JoinedSynset::Found(record) => Synset::from_record(self, record),
                rows::JoinedSynset::Dangling(id) => Synset::proxy(self, id),
            })
            .collect()
    }

    fn fetch_all<T, P, F>(&self, shape: QueryShape, params: P, decode: F) -> Result<Vec<T>, StoreError>
    where
        P: Params,
        F: Fn(&Row<'_>) -> Result<T, RowError>,
    {
        let result = self.execute(shape, params, decode, usize::MAX);
        self.apply_policy(shape, result, Vec::new())
    }

    fn fetch_first<T, P, F>(
        &self,
        shape: QueryShape,
        params: P,
        decode: F,
    ) -> Result<Option<T>, StoreError>
    where
        P: Params,
        F: Fn(&Row<'_>) -> Result<T, RowError>,
    {
        let result = self
            .execute(shape, params, decode, 1)
            .map(|rows| rows.into_iter().next());
        self.apply_policy(shape, result, None)
    }

    /// Degrade query failures under the lenient policy.
    pub(crate) fn apply_policy<T>(
        &self,
        shape: QueryShape,
        result: Result<T, StoreError>,
        fallback: T,
    ) -> Result<T, StoreError> {
        match result {
            Err(StoreError::Query { source, .. }) if self.options.policy == ErrorPolicy::Lenient => {
                tracing::warn!(query = shape.name(), error = %source, "query failed, returning empty result");
                Ok(fallback)
            }
            other => other,
        }
    }

    fn execute<T, P, F>(
        &self,
        shape: QueryShape,
        params: P,
        decode: F,
        limit: usize,
    ) -> Result<Vec<T>, StoreError>
    where
        P: Params,
        F: Fn(&Row<'_>) -> Result<T, RowError>,
    {
        self.stats.borrow_mut().record(shape);
        tracing::debug!(query = shape.name(), "executing query");

        let query_error = |source: rusqlite::Error| StoreError::Query { shape, source };
        let mut stmt = self.conn.prepare_cached(shape.sql()).map_err(query_error)?;
        let mut rows = stmt.query(params).map_err(query_error)?;

        let mut out = Vec::new();
        while out.len() < limit {
            let Some(row) = rows.next().map_err(query_error)? else {
                break;
            };
            let record = decode(row).map_err(|e| match e {
                RowError::Sql(source) => StoreError::Query { shape, source },
                RowError::Invalid(message) => StoreError::InvalidRow { shape, message },
            })?;
            out.push(record);
        }
        Ok(out)
    }
}

impl fmt::Debug for WordNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordNet")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

enum SchemaCheck {
    Sql(rusqlite::Error),
    Missing(Vec<String>),
}

/// Check that the lexicon tables exist.
fn verify_schema(conn: &Connection) -> Result<(), SchemaCheck> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type IN ('table', 'view')")
        .map_err(SchemaCheck::Sql)?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(SchemaCheck::Sql)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(SchemaCheck::Sql)?;

    let missing: Vec<String> = REQUIRED_TABLES
        .iter()
        .filter(|table| !present.iter().any(|p| p.eq_ignore_ascii_case(table)))
        .map(|table| table.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaCheck::Missing(missing))
    }
}
