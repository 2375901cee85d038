//! Assemble a page: shell + artifact + highlighting + navigation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bilingo_client::{AutoFetcher, LoadOutcome, Page, PageLoader, SyntectHighlighter};
use bilingo_static::TemplateEngine;

use crate::config::load_config;

/// Run the page command.
pub async fn run(config_path: &Path, source: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let location = source.unwrap_or_else(|| config.artifact_location());
    let output = output.unwrap_or_else(|| PathBuf::from(&config.page.output));

    let shell = TemplateEngine::new()
        .and_then(|engine| engine.render_shell(&config.shell_context()))
        .context("Failed to render page shell")?;

    let mut page = Page::parse(&shell)?.with_scroll_threshold(config.page.scroll_threshold);

    let loader = PageLoader::new(AutoFetcher::new(), SyntectHighlighter::new(), location);
    if let LoadOutcome::Failed(reason) = loader.load(&mut page).await {
        anyhow::bail!("Could not load {}: {}", loader.location(), reason);
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&output, page.to_html())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("Output: {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn assembles_page_from_local_artifact() {
        let temp = tempdir().unwrap();
        let artifact = temp.path().join("content.html");
        fs::write(
            &artifact,
            bilingo_md::render_html(
                "# Basics\n\n$Hi$$嗨\n\n## Numbers\n",
                &bilingo_md::BilingualPolicy::new(),
            ),
        )
        .unwrap();

        let out = temp.path().join("site").join("index.html");
        run(
            &temp.path().join("missing.toml"),
            Some(artifact.display().to_string()),
            Some(out.clone()),
        )
        .await
        .unwrap();

        let html = fs::read_to_string(out).unwrap();
        assert!(html.contains("role=\"file-content\""));
        assert!(html.contains("<a class=\"nav-title\" href=\"#Basics\">Basics</a>"));
        assert!(html.contains("<a href=\"#Numbers\">Numbers</a>"));
    }

    #[tokio::test]
    async fn missing_artifact_fails_without_output() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("index.html");

        let result = run(
            &temp.path().join("missing.toml"),
            Some(temp.path().join("absent.html").display().to_string()),
            Some(out.clone()),
        )
        .await;

        assert!(result.is_err());
        assert!(!out.exists());
    }
}
