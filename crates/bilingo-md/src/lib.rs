//! Markdown renderer for bilingual documentation.
//!
//! Paragraphs written as `$original$$translation` become a toggleable block
//! showing the translation with the original hidden beside it, and every
//! heading carries an anchor named after its exact text.

pub mod bilingual;
pub mod markup;
pub mod policy;
pub mod render;

pub use bilingual::{BilingualBlock, MARKER, SENTINEL};
pub use markup::{escape_html, ITEM_ROLE, ORIGINAL_ROLE, SECTION_TITLE_CLASS, TOGGLE_ROLE};
pub use policy::{BasePolicy, BilingualPolicy, RenderPolicy, DEFAULT_TOGGLE_LABEL};
pub use render::{outline, render_html, HeadingEntry};
