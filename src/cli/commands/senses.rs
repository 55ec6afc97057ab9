//! senses command - List the words attached to a synset

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::{with_store, Context};
use crate::core::schema::SenseRecord;
use crate::core::types::{Lang, SynsetId};
use crate::ui::output;

#[derive(Debug, Serialize)]
struct SenseView {
    #[serde(flatten)]
    record: SenseRecord,
    lemma: String,
}

/// List the senses of `synset`, optionally in one language.
pub fn senses(ctx: &Context, synset: &SynsetId, lang: Option<Lang>) -> Result<()> {
    let views = with_store(ctx, |wn| {
        let senses = match lang {
            Some(lang) => wn.senses_by_synset_and_lang(synset, lang),
            None => wn.senses_by_synset(synset),
        }
        .with_context(|| format!("Failed to look up senses of {synset}"))?;

        let mut views = Vec::with_capacity(senses.len());
        for sense in &senses {
            views.push(SenseView {
                record: sense.to_record(),
                lemma: sense.word().lemma()?.to_string(),
            });
        }
        Ok(views)
    })?;

    if ctx.json {
        output::json(&views)?;
        return Ok(());
    }

    if views.is_empty() {
        output::warn(format!("no senses for {synset}"), ctx.verbosity());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = views
        .iter()
        .map(|v| {
            vec![
                v.record.lang.to_string(),
                v.record.wordid.to_string(),
                v.record.rank.to_string(),
                v.record.freq.to_string(),
                v.lemma.clone(),
            ]
        })
        .collect();
    output::print(output::format_table(&rows), ctx.verbosity());
    Ok(())
}
