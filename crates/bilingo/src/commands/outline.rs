//! Print the navigation outline of a built artifact.

use std::path::Path;

use anyhow::{Context, Result};
use bilingo_client::dom::parse_document;
use bilingo_client::{AutoFetcher, Fetcher, Outline};

use crate::config::load_config;

/// Run the outline command.
pub async fn run(config_path: &Path, source: Option<String>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let location = source.unwrap_or_else(|| config.artifact_location());

    let html = AutoFetcher::new()
        .fetch(&location)
        .await
        .with_context(|| format!("Failed to load {}", location))?;

    let outline = Outline::from_dom(&parse_document(&html));

    if json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
    } else {
        print!("{}", format_outline(&outline));
    }

    Ok(())
}

fn format_outline(outline: &Outline) -> String {
    let mut out = String::new();
    for section in &outline.sections {
        out.push_str(&section.title);
        out.push('\n');
        for subtitle in &section.subtitles {
            out.push_str("  ");
            out.push_str(subtitle);
            out.push('\n');
        }
    }
    out
}
