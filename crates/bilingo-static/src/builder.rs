//! Combined artifact builder.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use bilingo_md::{outline, render_html, BilingualPolicy, DEFAULT_TOGGLE_LABEL};

/// Appended after every document. The blank lines keep the rule from being
/// read as a setext underline of the document's last paragraph.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// Document order of the TypeScript handbook interpretation.
pub const DEFAULT_DOCUMENTS: &[&str] = &[
    "basic_types",
    "interfaces",
    "classes",
    "modules",
    "functions",
    "generics",
    "common_errors",
    "mixins",
    "declaration_merging",
    "type_inference",
    "type_compatibility",
    "writing_.d.ts_files",
    "typescript_1.5",
];

/// Configuration for building the artifact.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding the source documents
    pub source_dir: PathBuf,

    /// Document names, in reading order
    pub documents: Vec<String>,

    /// Extension appended to each document name
    pub extension: String,

    /// Artifact path
    pub output: PathBuf,

    /// Label of the "view original" affordance
    pub toggle_label: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("interpretation"),
            documents: DEFAULT_DOCUMENTS.iter().map(|d| d.to_string()).collect(),
            extension: "md".to_string(),
            output: PathBuf::from("interpretation/dest/content.html"),
            toggle_label: DEFAULT_TOGGLE_LABEL.to_string(),
        }
    }
}

impl BuildConfig {
    /// Path of a named document.
    pub fn document_path(&self, name: &str) -> PathBuf {
        if self.extension.is_empty() {
            self.source_dir.join(name)
        } else {
            // Names like `writing_.d.ts_files` contain dots, so no `with_extension`.
            self.source_dir.join(format!("{}.{}", name, self.extension))
        }
    }
}

/// Result of a build.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of documents combined
    pub documents: usize,

    /// Size of the written artifact in bytes
    pub bytes: usize,

    /// Number of headings in the combined document
    pub headings: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Artifact path
    pub output_path: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No documents configured")]
    EmptyDocumentList,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Concatenates the configured documents and renders them into one artifact.
pub struct Aggregator {
    config: BuildConfig,
    policy: BilingualPolicy,
}

impl Aggregator {
    /// Create a new aggregator.
    pub fn new(config: BuildConfig) -> Self {
        let policy = BilingualPolicy::new().toggle_label(config.toggle_label.clone());
        Self { config, policy }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Read every document in order, each followed by [`SEPARATOR`].
    ///
    /// A missing or non-UTF-8 document aborts the whole build.
    pub fn combine(&self) -> Result<String, BuildError> {
        if self.config.documents.is_empty() {
            return Err(BuildError::EmptyDocumentList);
        }

        let mut combined = String::new();

        for name in &self.config.documents {
            let path = self.config.document_path(name);
            let text = fs::read_to_string(&path).map_err(|source| BuildError::Read {
                path: path.clone(),
                source,
            })?;

            tracing::debug!("Read {} ({} bytes)", path.display(), text.len());

            combined.push_str(&text);
            combined.push_str(SEPARATOR);
        }

        Ok(combined)
    }

    /// Render combined markdown to HTML.
    pub fn render(&self, combined: &str) -> String {
        render_html(combined, &self.policy)
    }

    /// Build the artifact, overwriting any previous one.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let combined = self.combine()?;
        let headings = outline(&combined).len();
        let html = self.render(&combined);

        let output = &self.config.output;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| BuildError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(output, &html).map_err(|source| BuildError::Write {
            path: output.clone(),
            source,
        })?;

        Ok(BuildResult {
            documents: self.config.documents.len(),
            bytes: html.len(),
            headings,
            duration_ms: start.elapsed().as_millis() as u64,
            output_path: output.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path, documents: &[&str]) -> BuildConfig {
        BuildConfig {
            source_dir: dir.join("src"),
            documents: documents.iter().map(|d| d.to_string()).collect(),
            output: dir.join("dest").join("content.html"),
            ..Default::default()
        }
    }

    #[test]
    fn combines_in_configured_order() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("b.md"), "# B\n").unwrap();
        fs::write(src.join("a.md"), "# A\n\ntext").unwrap();
        fs::write(src.join("c.md"), "").unwrap();

        let aggregator = Aggregator::new(config_in(temp.path(), &["b", "a", "c"]));
        let combined = aggregator.combine().unwrap();

        assert_eq!(
            combined,
            format!("# B\n{SEPARATOR}# A\n\ntext{SEPARATOR}{SEPARATOR}")
        );
    }

    #[test]
    fn dotted_names_keep_their_dots() {
        let config = BuildConfig::default();

        assert_eq!(
            config.document_path("writing_.d.ts_files"),
            PathBuf::from("interpretation/writing_.d.ts_files.md")
        );
        assert_eq!(
            config.document_path("typescript_1.5"),
            PathBuf::from("interpretation/typescript_1.5.md")
        );
    }

    #[test]
    fn builds_artifact() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("basics.md"), "# Basics\n\n$Hello$$你好\n").unwrap();
        fs::write(src.join("advanced.md"), "# Advanced\n\n## Generics\n").unwrap();

        let config = config_in(temp.path(), &["basics", "advanced"]);
        let result = Aggregator::new(config).build().unwrap();

        assert_eq!(result.documents, 2);
        assert_eq!(result.headings, 3);

        let html = fs::read_to_string(&result.output_path).unwrap();
        assert_eq!(html.len(), result.bytes);
        assert!(html.contains("<a name=\"Basics\" class=\"anchor\" href=\"#Basics\">"));
        assert!(html.contains("<div role=\"item\"><p>你好"));
        assert_eq!(html.matches("<hr />").count(), 2);

        let basics = html.find("Basics").unwrap();
        let advanced = html.find("Advanced").unwrap();
        assert!(basics < advanced);
    }

    #[test]
    fn overwrites_previous_artifact() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.md"), "fresh").unwrap();

        let config = config_in(temp.path(), &["a"]);
        fs::create_dir_all(config.output.parent().unwrap()).unwrap();
        fs::write(&config.output, "stale content").unwrap();

        Aggregator::new(config.clone()).build().unwrap();

        let html = fs::read_to_string(&config.output).unwrap();
        assert!(!html.contains("stale"));
        assert!(html.contains("<p>fresh</p>"));
    }

    #[test]
    fn missing_document_fails_without_writing() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.md"), "# A").unwrap();

        let config = config_in(temp.path(), &["a", "missing"]);
        let err = Aggregator::new(config.clone()).build().unwrap_err();

        match err {
            BuildError::Read { path, .. } => assert!(path.ends_with("missing.md")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!config.output.exists());
    }

    #[test]
    fn empty_document_list_is_an_error() {
        let temp = tempdir().unwrap();
        let config = config_in(temp.path(), &[]);

        assert!(matches!(
            Aggregator::new(config).combine(),
            Err(BuildError::EmptyDocumentList)
        ));
    }

    #[test]
    fn custom_toggle_label_reaches_output() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.md"), "$Hi$$嗨").unwrap();

        let mut config = config_in(temp.path(), &["a"]);
        config.toggle_label = "[original]".to_string();

        let aggregator = Aggregator::new(config);
        let html = aggregator.render(&aggregator.combine().unwrap());

        assert!(html.contains(">[original]</span>"));
    }
}
