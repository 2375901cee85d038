//! Initialize a bilingual documentation project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing bilingo...");

    let docs_dir = Path::new("interpretation");

    if docs_dir.exists() {
        if !yes {
            tracing::warn!("interpretation/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(docs_dir).context("Failed to create interpretation directory")?;
    }

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    let intro_path = docs_dir.join("introduction.md");
    if !intro_path.exists() || yes {
        fs::write(&intro_path, DEFAULT_INTRODUCTION).context("Failed to write introduction.md")?;
        tracing::info!("Created {}", intro_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'bilingo build' to produce the artifact.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# bilingo configuration

[docs]
# Directory holding the source documents
dir = "interpretation"

# Documents in reading order, without extension
documents = ["introduction"]

extension = "md"

[build]
# Combined artifact
output = "interpretation/dest/content.html"

# Label of the "view original" affordance
toggle_label = "[查看此处原文]"

# Cache-busting version appended to the artifact URL as ?v=...
# version = "1"

[page]
title = "Documentation"
lang = "zh-CN"

# URL the page fetches the artifact from (defaults to build.output)
# artifact_url = "/interpretation/dest/content.html"

# Scroll offset in pixels past which the nav bar is pinned
scroll_threshold = 60

output = "interpretation/dest/index.html"
"#;

const DEFAULT_INTRODUCTION: &str = r#"# Introduction

$This handbook is a side-by-side translation.$$本手册是一份对照翻译。

## Reading

$Each paragraph shows the translation first.$$每个段落先显示译文。

$Click the label to reveal the original text.$$点击标签即可查看原文。
"#;
