//! Block renderers: paragraphs, divs, blockquotes and headings.

use crate::options::{ConversionOptions, HeadingStyle};
use crate::utilities::{prefix_lines, repeat};

pub fn paragraph(content: &str) -> String {
    format!("{}\n\n", content.trim_end())
}

/// A `div` is one line of a note: trimmed text plus a newline.
pub fn div(content: &str) -> String {
    format!("{}\n", content.trim_end())
}

pub fn blockquote(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!("\n{}", prefix_lines(content, "> "))
}

/// Render `h<level>` under the configured heading style.
///
/// Setext only has underlines for levels 1 and 2; deeper levels fall back
/// to ATX.
pub fn heading(level: u8, content: &str, options: &ConversionOptions) -> String {
    let text = content.trim_end();
    let level = usize::from(level);

    match options.heading_style {
        HeadingStyle::Setext if level <= 2 => {
            let underline = if level == 1 { "=" } else { "-" };
            underline_text(text, underline)
        }
        HeadingStyle::AtxClosed => {
            let hashes = repeat("#", level);
            format!("{hashes} {text} {hashes}\n\n")
        }
        _ => format!("{} {}\n\n", repeat("#", level), text),
    }
}

/// `text` over a run of `pad` as long as it, or nothing for empty text
fn underline_text(text: &str, pad: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{}\n{}\n\n", text, repeat(pad, text.chars().count()))
}
