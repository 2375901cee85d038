//! Configuration file (bilingo.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use bilingo_client::{artifact_url, DEFAULT_SCROLL_THRESHOLD};
use bilingo_md::DEFAULT_TOGGLE_LABEL;
use bilingo_static::{BuildConfig, ShellContext, DEFAULT_DOCUMENTS};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub page: PageSettings,
}

#[derive(Debug, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_docs_dir")]
    pub dir: String,
    /// Document names in reading order
    #[serde(default = "default_documents")]
    pub documents: Vec<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_toggle_label")]
    pub toggle_label: String,
    /// Cache-busting version appended to the artifact URL
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Where the page fetches the artifact from (defaults to the build output)
    pub artifact_url: Option<String>,
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,
    #[serde(default = "default_page_output")]
    pub output: String,
    #[serde(default)]
    pub styles: Vec<String>,
}

fn default_docs_dir() -> String {
    "interpretation".to_string()
}
fn default_documents() -> Vec<String> {
    DEFAULT_DOCUMENTS.iter().map(|d| d.to_string()).collect()
}
fn default_extension() -> String {
    "md".to_string()
}
fn default_output() -> String {
    "interpretation/dest/content.html".to_string()
}
fn default_toggle_label() -> String {
    DEFAULT_TOGGLE_LABEL.to_string()
}
fn default_title() -> String {
    "TypeScript Handbook".to_string()
}
fn default_lang() -> String {
    "zh-CN".to_string()
}
fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD
}
fn default_page_output() -> String {
    "interpretation/dest/index.html".to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
            documents: default_documents(),
            extension: default_extension(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            toggle_label: default_toggle_label(),
            version: None,
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            lang: default_lang(),
            artifact_url: None,
            scroll_threshold: default_scroll_threshold(),
            output: default_page_output(),
            styles: Vec::new(),
        }
    }
}

impl ConfigFile {
    /// Settings for the aggregator.
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            source_dir: PathBuf::from(&self.docs.dir),
            documents: self.docs.documents.clone(),
            extension: self.docs.extension.clone(),
            output: PathBuf::from(&self.build.output),
            toggle_label: self.build.toggle_label.clone(),
        }
    }

    /// Artifact location as the page requests it, cache-busting query included.
    pub fn artifact_location(&self) -> String {
        let base = self
            .page
            .artifact_url
            .as_deref()
            .unwrap_or(&self.build.output);
        artifact_url(base, self.build.version.as_deref())
    }

    pub fn shell_context(&self) -> ShellContext {
        ShellContext {
            title: self.page.title.clone(),
            lang: self.page.lang.clone(),
            styles: self.page.styles.clone(),
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("{} not found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
