//! links command - List the links leaving a synset

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::synset_details;
use crate::cli::{with_store, Context};
use crate::core::types::{LinkType, SynsetId};
use crate::ui::output;

#[derive(Debug, Serialize)]
struct LinkView {
    link: LinkType,
    to: SynsetId,
    name: Option<String>,
    src: String,
}

/// List the links leaving `synset`, optionally of one type.
pub fn links(ctx: &Context, synset: &SynsetId, link: Option<LinkType>) -> Result<()> {
    let views = with_store(ctx, |wn| {
        let source = wn.synset_proxy(synset.clone());
        let links = match link {
            Some(link) => source.outgoing_links_of(link),
            None => source.outgoing_links(),
        }
        .with_context(|| format!("Failed to look up links of {synset}"))?;

        let mut views = Vec::with_capacity(links.len());
        for edge in &links {
            views.push(LinkView {
                link: edge.link_type(),
                to: edge.to().id().clone(),
                name: synset_details(edge.to())?.map(|r| r.name),
                src: edge.provenance().to_string(),
            });
        }
        Ok(views)
    })?;

    if ctx.json {
        output::json(&views)?;
        return Ok(());
    }

    if views.is_empty() {
        output::warn(format!("no links from {synset}"), ctx.verbosity());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = views
        .iter()
        .map(|v| {
            vec![
                v.link.to_string(),
                v.to.to_string(),
                v.name.clone().unwrap_or_default(),
            ]
        })
        .collect();
    output::print(output::format_table(&rows), ctx.verbosity());
    Ok(())
}
