//! Fetch-attach-highlight-navigate pipeline.

use crate::fetch::Fetcher;
use crate::highlight::{highlight_blocks, CodeHighlighter};
use crate::page::Page;

/// Result of loading the artifact into a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Content attached; counts of highlighted blocks and nav sections
    Loaded { code_blocks: usize, sections: usize },
    /// Fetch failed; the page was left untouched
    Failed(String),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Loads the built artifact into a [`Page`].
pub struct PageLoader<F, H> {
    fetcher: F,
    highlighter: H,
    location: String,
}

impl<F: Fetcher, H: CodeHighlighter> PageLoader<F, H> {
    /// `location` is the artifact URL or path, including any cache-busting query.
    pub fn new(fetcher: F, highlighter: H, location: impl Into<String>) -> Self {
        Self {
            fetcher,
            highlighter,
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Fetch the artifact once and install it.
    ///
    /// On success the content is attached, then its code blocks are
    /// highlighted, then the navigation is built. A failed fetch is logged and
    /// reported as [`LoadOutcome::Failed`]; the page keeps an empty container
    /// and no navigation. There is no retry.
    pub async fn load(&self, page: &mut Page) -> LoadOutcome {
        let html = match self.fetcher.fetch(&self.location).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", self.location, e);
                return LoadOutcome::Failed(e.to_string());
            }
        };

        let content = page.attach(&html);
        let code_blocks = highlight_blocks(&content, &self.highlighter);
        let sections = page.build_navigation(&content);

        tracing::info!(
            "Loaded {} ({} code blocks, {} sections)",
            self.location,
            code_blocks,
            sections
        );

        LoadOutcome::Loaded {
            code_blocks,
            sections,
        }
    }
}
