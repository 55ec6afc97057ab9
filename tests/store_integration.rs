//! Integration tests for the store against database files.

mod common;

use std::collections::HashSet;
use std::fs;

use tempfile::TempDir;
use wnj::core::schema::{parse_record, SenseRecord, SynsetRecord, WordRecord};
use wnj::store::{ErrorPolicy, QueryShape, StoreError, StoreOptions, WordNet};
use wnj::{Lang, LinkType, Pos, SynsetId, WordId};

fn sid(id: &str) -> SynsetId {
    SynsetId::new(id).unwrap()
}

fn lenient() -> StoreOptions {
    StoreOptions::default().with_policy(ErrorPolicy::Lenient)
}

fn ids(synsets: &[wnj::core::synset::Synset<'_>]) -> Vec<String> {
    synsets.iter().map(|s| s.id().to_string()).collect()
}

// =============================================================================
// Opening
// =============================================================================

#[test]
fn open_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.db");

    match WordNet::open(&path) {
        Err(StoreError::NotFound(p)) => assert_eq!(p, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn open_non_database_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.db");
    fs::write(&path, "this is a text file, not a lexicon database\n".repeat(50)).unwrap();

    assert!(matches!(WordNet::open(&path), Err(StoreError::Open { .. })));
}

#[test]
fn open_database_without_lexicon_tables() {
    let fixture = common::database("CREATE TABLE NOTES (body TEXT);");

    match WordNet::open(fixture.path()) {
        Err(StoreError::MissingTables(tables)) => assert_eq!(tables.len(), 5),
        other => panic!("expected MissingTables, got {other:?}"),
    }
}

#[test]
fn open_records_path_and_options() {
    let fixture = common::scenario();
    let wn = WordNet::open_with(fixture.path(), lenient()).unwrap();

    assert_eq!(wn.path(), Some(fixture.path()));
    assert_eq!(wn.policy(), ErrorPolicy::Lenient);
    assert_eq!(wn.options().statement_cache_capacity, 16);
    wn.close().unwrap();
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn path_to_hyponym_scenario() {
    let fixture = common::scenario();
    let wn = WordNet::open(fixture.path()).unwrap();

    let words = wn.words_by_lemma("path").unwrap();
    assert_eq!(words.len(), 1);
    let word = &words[0];
    assert_eq!(word.id(), WordId::new(1));

    let synsets = word.synsets().unwrap();
    assert_eq!(ids(&synsets), vec!["00001740-n"]);

    let hyponyms = synsets[0].connected_synsets(LinkType::Hyponym).unwrap();
    assert_eq!(ids(&hyponyms), vec!["00001741-n"]);
    let target = &hyponyms[0];
    assert!(!target.is_resolved());

    // The seeded lexicon has no row for the target.
    assert!(matches!(
        target.name(),
        Err(StoreError::SynsetNotFound(id)) if id.as_str() == "00001741-n"
    ));
    assert!(target.is_resolved());
}

#[test]
fn path_to_hyponym_scenario_with_target_row() {
    let fixture = common::scenario_with_target();
    let wn = WordNet::open(fixture.path()).unwrap();

    let word = &wn.words_by_lemma("path").unwrap()[0];
    let synsets = word.synsets().unwrap();
    let hyponyms = synsets[0].connected_synsets(LinkType::Hyponym).unwrap();
    assert_eq!(ids(&hyponyms), vec!["00001741-n"]);

    // The joined row already carries the target's fields.
    let target = &hyponyms[0];
    assert!(target.is_resolved());
    assert_eq!(target.id().as_str(), "00001741-n");
    assert_eq!(target.name().unwrap(), "trail");
    assert_eq!(target.pos().unwrap(), Some(Pos::Noun));
    assert_eq!(target.provenance().unwrap(), "eng30");
    assert_eq!(wn.query_stats().get(QueryShape::SynsetById), 0);

    // A proxy for the same id resolves with one lookup and compares equal.
    let proxy = wn.synset_proxy(sid("00001741-n"));
    assert_eq!(proxy.name().unwrap(), "trail");
    assert_eq!(proxy.name().unwrap(), "trail");
    assert_eq!(&proxy, target);
    assert_eq!(wn.query_stats().get(QueryShape::SynsetById), 1);
}

#[test]
fn link_targets_resolve_lazily() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();
    let path = wn.synset_proxy(sid("00001740-n"));

    let links = path.outgoing_links_of(LinkType::Hyponym).unwrap();
    let target = links[0].to();
    assert_eq!(target.id().as_str(), "00001741-n");
    assert!(!target.is_resolved());
    assert_eq!(wn.query_stats().get(QueryShape::SynsetById), 0);

    assert_eq!(target.name().unwrap(), "trail");
    assert_eq!(target.pos().unwrap(), Some(Pos::Noun));
    assert_eq!(target.provenance().unwrap(), "eng30");
    assert_eq!(wn.query_stats().get(QueryShape::SynsetById), 1);
}

// =============================================================================
// Identity and memoization
// =============================================================================

#[test]
fn proxy_equals_resolved_word() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();

    let resolved = wn.word_by_id(WordId::new(2)).unwrap().unwrap();
    let proxy = wn.word_proxy(WordId::new(2));
    assert!(resolved.is_resolved());
    assert!(!proxy.is_resolved());
    assert_eq!(resolved, proxy);

    let set: HashSet<_> = [resolved.clone(), proxy.clone()].into_iter().collect();
    assert_eq!(set.len(), 1);

    proxy.lemma().unwrap();
    assert_eq!(resolved, proxy);
}

#[test]
fn proxy_equals_resolved_synset() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();

    let resolved = wn.synset_by_id(&sid("00001740-n")).unwrap().unwrap();
    let proxy = wn.synset_proxy(sid("00001740-n"));
    let other = wn.synset_proxy(sid("00001741-n"));

    let set: HashSet<_> = [resolved, proxy, other].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn word_proxy_queries_once() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();
    let word = wn.word_proxy(WordId::new(2));

    assert_eq!(wn.query_stats().get(QueryShape::WordById), 0);

    let first = word.lemma().unwrap().as_ptr();
    let second = word.lemma().unwrap().as_ptr();
    assert_eq!(first, second);
    assert_eq!(word.pronunciation().unwrap(), Some("みち"));
    assert_eq!(word.language().unwrap(), Some(Lang::Japanese));
    assert_eq!(word.pos().unwrap(), Some(Pos::Noun));

    assert_eq!(wn.query_stats().get(QueryShape::WordById), 1);
}

#[test]
fn resolved_word_never_queries() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();
    let words = wn.words_by_lemma("trail").unwrap();

    assert_eq!(words[0].lemma().unwrap(), "trail");
    assert_eq!(wn.query_stats().get(QueryShape::WordById), 0);
}

// =============================================================================
// Missing rows
// =============================================================================

#[test]
fn missing_rows_are_errors_when_strict() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();

    assert!(wn.word_by_id(WordId::new(999)).unwrap().is_none());
    assert!(wn.synset_by_id(&sid("99999999-n")).unwrap().is_none());

    let word = wn.word_proxy(WordId::new(999));
    assert!(matches!(word.lemma(), Err(StoreError::WordNotFound(id)) if id.get() == 999));

    let synset = wn.synset_proxy(sid("99999999-n"));
    assert!(matches!(synset.name(), Err(StoreError::SynsetNotFound(_))));
    assert!(matches!(synset.pos(), Err(StoreError::SynsetNotFound(_))));
}

#[test]
fn missing_rows_are_empty_when_lenient() {
    let fixture = common::lexicon();
    let wn = WordNet::open_with(fixture.path(), lenient()).unwrap();

    let word = wn.word_proxy(WordId::new(999));
    assert_eq!(word.lemma().unwrap(), "");
    assert_eq!(word.language().unwrap(), None);
    assert_eq!(word.pos().unwrap(), None);
    assert_eq!(word.pronunciation().unwrap(), None);
    assert!(word.details().unwrap().is_none());
    assert!(word.synsets().unwrap().is_empty());

    let synset = wn.synset_proxy(sid("99999999-n"));
    assert_eq!(synset.name().unwrap(), "");
    assert_eq!(synset.pos().unwrap(), None);
    assert_eq!(synset.provenance().unwrap(), "");
    assert!(synset.to_record().unwrap().is_none());

    // Missing outcomes are memoized.
    let stats = wn.query_stats();
    assert_eq!(stats.get(QueryShape::WordById), 1);
    assert_eq!(stats.get(QueryShape::SynsetById), 1);
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn connected_synsets_returns_every_match_in_order() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();
    let path = wn.synset_by_id(&sid("00001740-n")).unwrap().unwrap();

    let links = path.outgoing_links_of(LinkType::Hyponym).unwrap();
    assert_eq!(links.len(), 3);
    assert!(links.iter().all(|l| l.link_type() == LinkType::Hyponym));
    assert!(links.iter().all(|l| l.from() == &path));

    let hyponyms = path.connected_synsets(LinkType::Hyponym).unwrap();
    assert_eq!(ids(&hyponyms), vec!["00001741-n", "00001742-n", "00001743-n"]);
    assert!(hyponyms.iter().all(|s| s.is_resolved()));
    let names: Vec<_> = hyponyms.iter().map(|s| s.name().unwrap()).collect();
    assert_eq!(names, vec!["trail", "footpath", "bridle_path"]);
    assert_eq!(wn.query_stats().get(QueryShape::SynsetById), 0);

    let hypernyms = path.connected_synsets(LinkType::Hypernym).unwrap();
    assert_eq!(ids(&hypernyms), vec!["00002000-n"]);

    assert!(path.connected_synsets(LinkType::Antonym).unwrap().is_empty());
}

#[test]
fn outgoing_links_in_storage_order() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();
    let path = wn.synset_proxy(sid("00001740-n"));

    let kinds: Vec<_> = path
        .outgoing_links()
        .unwrap()
        .iter()
        .map(|l| l.link_type())
        .collect();
    assert_eq!(
        kinds,
        vec![
            LinkType::Hyponym,
            LinkType::Hypernym,
            LinkType::Hyponym,
            LinkType::Meronym,
            LinkType::Hyponym,
        ]
    );
}

#[test]
fn dangling_target_comes_back_as_proxy() {
    let fixture = common::lexicon();

    {
        let wn = WordNet::open(fixture.path()).unwrap();
        let path = wn.synset_proxy(sid("00001740-n"));
        let parts = path.connected_synsets(LinkType::Meronym).unwrap();
        assert_eq!(ids(&parts), vec!["00009999-n"]);
        assert!(!parts[0].is_resolved());
        assert!(matches!(parts[0].name(), Err(StoreError::SynsetNotFound(_))));
    }

    let wn = WordNet::open_with(fixture.path(), lenient()).unwrap();
    let path = wn.synset_proxy(sid("00001740-n"));
    let parts = path.connected_synsets(LinkType::Meronym).unwrap();
    assert_eq!(parts[0].name().unwrap(), "");
    assert_eq!(parts[0].to_string(), r#"{"synset":"00009999-n"}"#);
}

#[test]
fn unresolved_synset_display_is_json() {
    let fixture = common::lexicon();
    let wn = WordNet::open_with(fixture.path(), lenient()).unwrap();
    let odd = wn.synset_proxy(sid("a\u{1b}\"b"));

    let shown = odd.to_string();
    let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(value["synset"], "a\u{1b}\"b");
}

// =============================================================================
// Senses, words, definitions
// =============================================================================

#[test]
fn senses_of_synset() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();
    let path = wn.synset_proxy(sid("00001740-n"));

    let senses = path.senses().unwrap();
    assert_eq!(senses.len(), 2);
    assert!(senses.iter().all(|s| s.synset() == &path));

    let japanese = path.senses_in(Lang::Japanese).unwrap();
    assert_eq!(japanese.len(), 1);
    let sense = &japanese[0];
    assert_eq!(sense.rank(), 2);
    assert_eq!(sense.freq(), 0);
    assert_eq!(sense.provenance(), "hand");
    assert_eq!(sense.word().lemma().unwrap(), "道");
    assert_eq!(sense.word().pronunciation().unwrap(), Some("みち"));
}

#[test]
fn word_synsets_by_name_and_by_sense() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();

    // '道' names no synset, but is attached to 'path' through SENSE.
    let michi = wn.word_proxy(WordId::new(2));
    assert!(michi.synsets().unwrap().is_empty());
    assert_eq!(ids(&michi.synsets_via_senses().unwrap()), vec!["00001740-n"]);

    let path = wn.word_proxy(WordId::new(1));
    assert_eq!(ids(&path.synsets().unwrap()), vec!["00001740-n"]);
    assert_eq!(path.senses().unwrap().len(), 1);
}

#[test]
fn words_by_lemma_and_pos() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();

    assert_eq!(wn.words_by_lemma("WALK").unwrap().len(), 1);
    assert_eq!(wn.words_by_lemma_and_pos("walk", Pos::Verb).unwrap().len(), 1);
    assert!(wn.words_by_lemma_and_pos("walk", Pos::Noun).unwrap().is_empty());
    assert!(wn.words_by_lemma("nowhere").unwrap().is_empty());
}

#[test]
fn definition_of_synset() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();
    let path = wn.synset_proxy(sid("00001740-n"));

    let definition = path.definition().unwrap().unwrap();
    assert_eq!(definition.text(), "a way or track laid down for walking");
    assert_eq!(definition.lang(), Lang::English);
    assert_eq!(definition.sid(), 0);
    assert_eq!(definition.synset(), &path);

    let by_store = wn.definition_by_synset(&sid("00001740-n")).unwrap().unwrap();
    assert_eq!(by_store, definition);

    assert!(wn
        .definition_by_synset(&sid("00001741-n"))
        .unwrap()
        .is_none());
}

#[test]
fn vocabulary_tables() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();

    let pos = wn.pos_descriptions(Lang::English).unwrap();
    assert_eq!(pos.len(), 2);
    assert_eq!(pos[0].pos, Pos::Noun);
    assert_eq!(pos[0].def, "noun");

    let links = wn.link_descriptions(Lang::English).unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[1].link, LinkType::Hypernym);
}

// =============================================================================
// Error policy
// =============================================================================

#[test]
fn query_failure_is_error_when_strict() {
    let fixture = common::scenario();
    let wn = WordNet::open(fixture.path()).unwrap();

    match wn.pos_descriptions(Lang::English) {
        Err(StoreError::Query { shape, .. }) => assert_eq!(shape, QueryShape::PosDefsByLang),
        other => panic!("expected Query, got {other:?}"),
    }
}

#[test]
fn query_failure_is_empty_when_lenient() {
    let fixture = common::scenario();
    let wn = WordNet::open_with(fixture.path(), lenient()).unwrap();

    assert!(wn.pos_descriptions(Lang::English).unwrap().is_empty());
    assert!(wn.link_descriptions(Lang::Japanese).unwrap().is_empty());
    // The store stays usable.
    assert_eq!(wn.words_by_lemma("path").unwrap().len(), 1);
}

#[test]
fn lenient_lookup_failure_is_retried() {
    let fixture = common::lexicon();
    let wn = WordNet::open_with(fixture.path(), lenient()).unwrap();
    let word = wn.word_proxy(WordId::new(2));
    let synset = wn.synset_proxy(sid("00001741-n"));

    let admin = rusqlite::Connection::open(fixture.path()).unwrap();
    admin
        .execute_batch("ALTER TABLE WORD RENAME TO WORD_X; ALTER TABLE SYNSET RENAME TO SYNSET_X;")
        .unwrap();

    assert_eq!(word.lemma().unwrap(), "");
    assert_eq!(synset.name().unwrap(), "");
    assert!(!word.is_resolved());
    assert!(!synset.is_resolved());

    admin
        .execute_batch("ALTER TABLE WORD_X RENAME TO WORD; ALTER TABLE SYNSET_X RENAME TO SYNSET;")
        .unwrap();

    assert_eq!(word.lemma().unwrap(), "道");
    assert_eq!(synset.name().unwrap(), "trail");
    assert!(word.is_resolved());
    assert!(synset.is_resolved());
    assert_eq!(wn.query_stats().get(QueryShape::WordById), 2);
    assert_eq!(wn.query_stats().get(QueryShape::SynsetById), 2);
}

#[test]
fn lenient_by_id_lookup_failure_is_empty() {
    let fixture = common::lexicon();
    let wn = WordNet::open_with(fixture.path(), lenient()).unwrap();

    let admin = rusqlite::Connection::open(fixture.path()).unwrap();
    admin.execute_batch("ALTER TABLE WORD RENAME TO WORD_X;").unwrap();
    assert!(wn.word_by_id(WordId::new(2)).unwrap().is_none());

    admin.execute_batch("ALTER TABLE WORD_X RENAME TO WORD;").unwrap();
    let word = wn.word_by_id(WordId::new(2)).unwrap().unwrap();
    assert_eq!(word.lemma().unwrap(), "道");
}

#[test]
fn unknown_code_is_invalid_under_both_policies() {
    let fixture = common::database(&format!(
        "{}
         INSERT INTO WORD VALUES (1, 'eng', 'path', NULL, 'z');",
        common::SCHEMA
    ));

    for options in [StoreOptions::default(), lenient()] {
        let wn = WordNet::open_with(fixture.path(), options).unwrap();
        assert!(matches!(
            wn.words_by_lemma("path"),
            Err(StoreError::InvalidRow {
                shape: QueryShape::WordsByLemma,
                ..
            })
        ));
    }
}

// =============================================================================
// Statement cache
// =============================================================================

#[test]
fn capacity_one_alternates_shapes() {
    let fixture = common::lexicon();
    let options = StoreOptions::default().with_statement_cache_capacity(1);
    let wn = WordNet::open_with(fixture.path(), options).unwrap();

    for _ in 0..3 {
        assert_eq!(wn.words_by_lemma("path").unwrap().len(), 1);
        assert_eq!(wn.synsets_by_name("path", Pos::Noun).unwrap().len(), 1);
        assert_eq!(
            wn.synset_proxy(sid("00001740-n"))
                .connected_synsets(LinkType::Hyponym)
                .unwrap()
                .len(),
            3
        );
    }

    let stats = wn.query_stats();
    assert_eq!(stats.get(QueryShape::WordsByLemma), 3);
    assert_eq!(stats.get(QueryShape::SynsetsByNameAndPos), 3);
    assert_eq!(stats.get(QueryShape::SynsetsLinkedFrom), 3);
    assert_eq!(stats.total(), 9);
}

// =============================================================================
// Diagnostic form
// =============================================================================

#[test]
fn display_parses_back_to_record() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();

    let synset = wn.synset_proxy(sid("00001740-n"));
    let parsed: SynsetRecord = parse_record(&synset.to_string()).unwrap();
    assert_eq!(Some(parsed), synset.to_record().unwrap());

    let word = wn.word_proxy(WordId::new(2));
    let parsed: WordRecord = parse_record(&word.to_string()).unwrap();
    assert_eq!(parsed.lemma, "道");
    assert_eq!(parsed.pron.as_deref(), Some("みち"));

    for sense in synset.senses().unwrap() {
        let parsed: SenseRecord = parse_record(&sense.to_string()).unwrap();
        assert_eq!(parsed, sense.to_record());
    }
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn into_connection_hands_back_open_connection() {
    let fixture = common::lexicon();
    let wn = WordNet::open(fixture.path()).unwrap();
    let conn = wn.into_connection();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM SYNSET", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 5);
}

#[test]
fn from_connection_reads_caller_database() {
    let fixture = common::lexicon();
    let conn = rusqlite::Connection::open(fixture.path()).unwrap();
    let wn = WordNet::from_connection(conn).unwrap();

    assert_eq!(wn.path(), None);
    assert_eq!(wn.words_by_lemma("trail").unwrap().len(), 1);
    wn.close().unwrap();
}
