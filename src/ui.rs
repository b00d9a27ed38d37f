//! Terminal rendering of the formatted summary.
//!
//! Block-by-block rendering keyed on [`ContentBlock`]; list numbering is
//! restored from block positions so takeaways print as the model numbered
//! them.

use crate::format::ContentBlock;
use colored::Colorize;

/// Print the application banner
pub fn banner() {
    println!("{}", "Article Summarizer".bold());
    println!("{}", "Powered by Google Gemini".dimmed());
    println!();
}

/// Print the loading line shown while the request is in flight
pub fn loading(url: &str) {
    println!("{} {}", "Analyzing:".dimmed(), url);
    println!();
}

/// Print the formatted block sequence
pub fn render_blocks(blocks: &[ContentBlock]) {
    for line in render_lines(blocks) {
        println!("{}", line);
    }
}

/// Print an error banner
pub fn render_error(message: &str) {
    eprintln!("{}", message.red());
}

fn render_lines(blocks: &[ContentBlock]) -> Vec<String> {
    let mut lines = Vec::with_capacity(blocks.len());
    let mut item_number = 0;

    for block in blocks {
        match block {
            ContentBlock::Heading(text) => {
                item_number = 0;
                lines.push(text.bold().cyan().to_string());
            }
            ContentBlock::ListItem(text) => {
                item_number += 1;
                lines.push(format!("  {}. {}", item_number, text));
            }
            ContentBlock::Blank => {
                item_number = 0;
                lines.push(String::new());
            }
            ContentBlock::Paragraph(text) => {
                item_number = 0;
                lines.push(text.clone());
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(blocks: &[ContentBlock]) -> Vec<String> {
        colored::control::set_override(false);
        render_lines(blocks)
    }

    #[test]
    fn one_rendered_line_per_block() {
        let blocks = vec![
            ContentBlock::Heading("Summary:".to_string()),
            ContentBlock::Paragraph("Text.".to_string()),
            ContentBlock::Blank,
        ];
        assert_eq!(plain(&blocks).len(), blocks.len());
    }

    #[test]
    fn list_numbering_restarts_after_a_break() {
        let blocks = vec![
            ContentBlock::ListItem("one".to_string()),
            ContentBlock::ListItem("two".to_string()),
            ContentBlock::Blank,
            ContentBlock::ListItem("again".to_string()),
        ];
        let lines = plain(&blocks);
        assert_eq!(lines[0], "  1. one");
        assert_eq!(lines[1], "  2. two");
        assert_eq!(lines[3], "  1. again");
    }
}
