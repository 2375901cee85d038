//! Page-side half of bilingual documentation.
//!
//! Fetches the pre-built artifact, attaches it to a page, highlights its code
//! blocks and derives a two-level side navigation from its headings. The page
//! is held as a DOM so clicks and scrolling can be replayed against it.

pub mod dom;
pub mod error;
pub mod fetch;
pub mod highlight;
pub mod loader;
pub mod nav;
pub mod page;

pub use error::ClientError;
pub use fetch::{artifact_url, AutoFetcher, Fetcher, FileFetcher, HttpFetcher};
pub use highlight::{highlight_blocks, CodeHighlighter, SyntectHighlighter};
pub use loader::{LoadOutcome, PageLoader};
pub use nav::{Navigator, Outline, Section, DEFAULT_SCROLL_THRESHOLD};
pub use page::{ClickEffect, Page};
