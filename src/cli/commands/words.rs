//! words command - Look up words by lemma

use anyhow::{Context as _, Result};

use crate::cli::{with_store, Context};
use crate::core::schema::WordRecord;
use crate::core::types::Pos;
use crate::ui::output;

/// List the words spelled `lemma`, optionally of one part of speech.
pub fn words(ctx: &Context, lemma: &str, pos: Option<Pos>) -> Result<()> {
    let records = with_store(ctx, |wn| {
        let words = match pos {
            Some(pos) => wn.words_by_lemma_and_pos(lemma, pos),
            None => wn.words_by_lemma(lemma),
        }
        .with_context(|| format!("Failed to look up '{lemma}'"))?;

        let mut records: Vec<WordRecord> = Vec::with_capacity(words.len());
        for word in &words {
            records.extend(word.to_record()?);
        }
        Ok(records)
    })?;

    if ctx.json {
        output::json(&records)?;
        return Ok(());
    }

    if records.is_empty() {
        output::warn(format!("no words found for '{lemma}'"), ctx.verbosity());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.wordid.to_string(),
                r.lang.to_string(),
                r.pos.to_string(),
                r.lemma.clone(),
                r.pron.clone().unwrap_or_default(),
            ]
        })
        .collect();
    output::print(output::format_table(&rows), ctx.verbosity());
    Ok(())
}
