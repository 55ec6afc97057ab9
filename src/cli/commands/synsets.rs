//! synsets command - Find synsets by canonical name

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::{with_store, Context};
use crate::core::schema::SynsetRecord;
use crate::core::types::Pos;
use crate::ui::output;

#[derive(Debug, Serialize)]
struct SynsetView {
    #[serde(flatten)]
    record: SynsetRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    definition: Option<String>,
}

/// List the synsets named `name` with part of speech `pos`.
pub fn synsets(ctx: &Context, name: &str, pos: Pos, define: bool) -> Result<()> {
    let views = with_store(ctx, |wn| {
        let synsets = wn
            .synsets_by_name(name, pos)
            .with_context(|| format!("Failed to look up synsets named '{name}'"))?;

        let mut views = Vec::with_capacity(synsets.len());
        for synset in &synsets {
            let Some(record) = synset.to_record()? else {
                continue;
            };
            let definition = if define {
                synset.definition()?.map(|d| d.text().to_string())
            } else {
                None
            };
            views.push(SynsetView { record, definition });
        }
        Ok(views)
    })?;

    if ctx.json {
        output::json(&views)?;
        return Ok(());
    }

    if views.is_empty() {
        output::warn(
            format!("no synsets named '{name}' with part of speech '{pos}'"),
            ctx.verbosity(),
        );
        return Ok(());
    }

    let rows: Vec<Vec<String>> = views
        .iter()
        .map(|v| {
            let mut row = vec![
                v.record.synset.to_string(),
                v.record.name.clone(),
                v.record.src.clone(),
            ];
            if define {
                row.push(v.definition.clone().unwrap_or_default());
            }
            row
        })
        .collect();
    output::print(output::format_table(&rows), ctx.verbosity());
    Ok(())
}
