//! Names shared between the rendered artifact and the page script.

/// `role` of a bilingual block container.
pub const ITEM_ROLE: &str = "item";

/// `role` of the "view original" affordance.
pub const TOGGLE_ROLE: &str = "check-ori";

/// `role` of the hidden original-text paragraph.
pub const ORIGINAL_ROLE: &str = "ori";

/// Class carried by every anchored heading.
pub const SECTION_TITLE_CLASS: &str = "section-title";

/// Escape text for HTML content or a double-quoted attribute value.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
