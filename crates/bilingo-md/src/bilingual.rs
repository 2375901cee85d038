//! Detection and markup of bilingual paragraphs.

use crate::markup::{escape_html, ITEM_ROLE, ORIGINAL_ROLE, TOGGLE_ROLE};

/// Leading character that marks a bilingual line.
pub const SENTINEL: char = '$';

/// Separator between the original text and its translation.
pub const MARKER: &str = "$$";

/// A paragraph holding an original-language segment and its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualBlock<'a> {
    /// Text before the first marker, without the sentinel
    pub original: &'a str,

    /// Everything after the first marker
    pub translation: &'a str,
}

impl<'a> BilingualBlock<'a> {
    /// Split already-rendered inline text into its two segments.
    ///
    /// Returns `None` when the text does not start with the sentinel or has no
    /// marker after it. Only the first marker is a boundary; any later marker
    /// stays inside the translation.
    pub fn parse(text: &'a str) -> Option<Self> {
        let rest = text.strip_prefix(SENTINEL)?;
        let (original, translation) = rest.split_once(MARKER)?;

        Some(Self {
            original,
            translation,
        })
    }

    /// Render the block. The original paragraph starts out hidden.
    pub fn to_html(&self, toggle_label: &str) -> String {
        format!(
            concat!(
                "<div role=\"{item}\">",
                "<p>{translation}<span class=\"{toggle}\" role=\"{toggle}\">{label}</span></p>",
                "<p role=\"{ori}\" class=\"{ori}\" hidden>{original}</p>",
                "</div>\n"
            ),
            item = ITEM_ROLE,
            toggle = TOGGLE_ROLE,
            ori = ORIGINAL_ROLE,
            translation = self.translation,
            label = escape_html(toggle_label),
            original = self.original,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rejoin(block: &BilingualBlock<'_>) -> String {
        format!("{}{}{}{}", SENTINEL, block.original, MARKER, block.translation)
    }

    #[test]
    fn splits_on_first_marker() {
        let block = BilingualBlock::parse("$Hello world$$你好世界").unwrap();

        assert_eq!(block.original, "Hello world");
        assert_eq!(block.translation, "你好世界");
    }

    #[test]
    fn keeps_later_markers_in_translation() {
        let source = "$cost: $5$$价格：$$5";
        let block = BilingualBlock::parse(source).unwrap();

        assert_eq!(block.original, "cost: $5");
        assert_eq!(block.translation, "价格：$$5");
        assert_eq!(rejoin(&block), source);
    }

    #[test]
    fn rejects_text_without_sentinel() {
        assert!(BilingualBlock::parse("Hello$$你好").is_none());
        assert!(BilingualBlock::parse(" $Hello$$你好").is_none());
    }

    #[test]
    fn rejects_sentinel_without_marker() {
        assert!(BilingualBlock::parse("$5 is the price").is_none());
        assert!(BilingualBlock::parse("$").is_none());
    }

    #[test]
    fn empty_segments_are_allowed() {
        let block = BilingualBlock::parse("$$$").unwrap();

        assert_eq!(block.original, "");
        assert_eq!(block.translation, "");
        assert_eq!(rejoin(&block), "$$$");
    }

    #[test]
    fn round_trips_through_source() {
        for source in [
            "$a$$b",
            "$The <code>any</code> type$$<code>any</code> 类型",
            "$$$$$",
            "$x $$ y $$ z",
        ] {
            let block = BilingualBlock::parse(source).unwrap();
            assert_eq!(rejoin(&block), source);
        }
    }

    #[test]
    fn renders_hidden_original() {
        let html = BilingualBlock::parse("$Hi$$嗨").unwrap().to_html("[原文]");

        assert_eq!(
            html,
            "<div role=\"item\"><p>嗨<span class=\"check-ori\" role=\"check-ori\">[原文]</span></p>\
             <p role=\"ori\" class=\"ori\" hidden>Hi</p></div>\n"
        );
    }
}
