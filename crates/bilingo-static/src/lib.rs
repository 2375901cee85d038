//! Build step for bilingual documentation.
//!
//! Concatenates an ordered list of markdown documents into one HTML artifact
//! and renders the page shell the artifact is loaded into.

pub mod builder;
pub mod templates;

pub use builder::{Aggregator, BuildConfig, BuildError, BuildResult, DEFAULT_DOCUMENTS, SEPARATOR};
pub use templates::{ShellContext, TemplateEngine};
