//! Formatting of the model reply into typed content blocks.
//!
//! The model is asked to follow a fixed template (see [`crate::client`]), but
//! its reply is untrusted free text. Formatting is a single line-oriented
//! classification pass: it never fails, never reorders, and never discards a
//! line. Replies that ignore the template simply degrade to paragraphs.

/// Line prefixes that mark a section heading in the requested template.
const HEADING_PREFIXES: [&str; 4] = ["Source:", "Summary:", "Key Takeaways:", "Key Insight:"];

/// One classified line of the model reply.
///
/// A reply of `n` lines always formats to exactly `n` blocks, in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// A section heading, stored with its prefix intact (e.g. `"Summary:"`).
    Heading(String),
    /// A numbered takeaway, stored with the `"1. "` prefix stripped.
    ListItem(String),
    /// An empty or whitespace-only line.
    Blank,
    /// Any other line, kept verbatim.
    Paragraph(String),
}

/// Classify the raw model reply into an ordered block sequence.
///
/// Empty input yields an empty sequence. Otherwise every line maps to one
/// block, first matching rule wins: heading prefix, numbered item,
/// blank, paragraph.
pub fn format_content(raw: &str) -> Vec<ContentBlock> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('\n').map(classify_line).collect()
}

fn classify_line(line: &str) -> ContentBlock {
    if HEADING_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
        return ContentBlock::Heading(line.to_string());
    }
    if is_numbered_item(line) {
        // Strip the digit, the period and the following character.
        return ContentBlock::ListItem(line.chars().skip(3).collect());
    }
    if line.trim().is_empty() {
        return ContentBlock::Blank;
    }
    ContentBlock::Paragraph(line.to_string())
}

/// A line that starts with a single digit followed by a period, e.g. `"3. ..."`.
///
/// Items numbered 10 and above are deliberately not matched; they fall
/// through to the paragraph rule.
fn is_numbered_item(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_digit() && bytes[1] == b'.'
}
