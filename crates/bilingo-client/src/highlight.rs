//! Syntax highlighting of code blocks.

use kuchikikiki::NodeRef;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::dom::{attr, parse_fragment, replace_children, set_class};

/// Class added to every processed `<code>` element.
pub const HIGHLIGHTED_CLASS: &str = "hljs";

/// Turns source code into highlighted HTML.
pub trait CodeHighlighter {
    /// Highlight `code`.
    ///
    /// `hint` is the language named on the code fence, if any. Returns the
    /// markup for the inside of the `<code>` element, or `None` to leave the
    /// block as it is.
    fn highlight(&self, code: &str, hint: Option<&str>) -> Option<String>;
}

/// Class-based highlighter backed by syntect's default syntaxes.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Pick a syntax: fence hint first, then the first line, then plain text.
    fn detect(&self, code: &str, hint: Option<&str>) -> &SyntaxReference {
        hint.and_then(|token| self.syntaxes.find_syntax_by_token(syntax_token(token)))
            .or_else(|| self.syntaxes.find_syntax_by_first_line(code))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, hint: Option<&str>) -> Option<String> {
        let syntax = self.detect(code, hint);
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);

        for line in LinesWithEndings::from(code) {
            if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
                tracing::warn!("Highlighting failed ({}), leaving block as is", e);
                return None;
            }
        }

        Some(generator.finalize())
    }
}

/// syntect ships no TypeScript grammar; JavaScript covers most of it.
fn syntax_token(hint: &str) -> &str {
    match hint {
        "ts" | "typescript" | "tsx" => "js",
        other => other,
    }
}

/// Language named by a `language-*` class, as pulldown-cmark emits it.
fn language_hint(code: &NodeRef) -> Option<String> {
    attr(code, "class")?
        .split_whitespace()
        .find_map(|class| class.strip_prefix("language-").map(str::to_string))
}

/// Highlight every `pre > code` block under `root`.
///
/// The highlighter is called exactly once per block. Returns the number of
/// blocks found.
pub fn highlight_blocks<H: CodeHighlighter + ?Sized>(root: &NodeRef, highlighter: &H) -> usize {
    let blocks: Vec<NodeRef> = match root.select("pre > code") {
        Ok(selection) => selection.map(|code| code.as_node().clone()).collect(),
        Err(()) => return 0,
    };

    for code in &blocks {
        let hint = language_hint(code);
        let source = code.text_contents();

        if let Some(markup) = highlighter.highlight(&source, hint.as_deref()) {
            let wrapped = format!("<pre><code>{}</code></pre>", markup);
            let spans = parse_fragment(&wrapped)
                .into_iter()
                .next()
                .and_then(|pre| pre.first_child())
                .map(|inner| inner.children().collect::<Vec<_>>())
                .unwrap_or_default();
            replace_children(code, spans);
        }

        set_class(code, HIGHLIGHTED_CLASS, true);
    }

    blocks.len()
}
