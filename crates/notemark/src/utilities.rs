//! Text helpers shared by the converter and the tag renderers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of HTML-insignificant whitespace inside a text leaf
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n\t ]+").unwrap());

/// Normalize a text leaf into an emittable Markdown fragment.
///
/// A leaf holding exactly one newline is the gap between two block
/// elements and renders as nothing. Anything else has its whitespace runs
/// collapsed to one space and its underscores escaped.
pub fn process_text(text: &str) -> String {
    if text == "\n" {
        return String::new();
    }
    escape(&WHITESPACE.replace_all(text, " "))
}

/// Escape markdown special characters.
///
/// Only `_` is escaped; `*`, brackets and backticks pass through untouched.
pub fn escape(text: &str) -> String {
    text.replace('_', r"\_")
}

/// Insert `prefix` at the start of every line of `text`.
///
/// A line starts at the beginning of the text and right after every `\n`,
/// including a trailing one, so `"a\n"` becomes `"<p>a\n<p>"`.
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    let mut result = String::with_capacity(text.len() + prefix.len());
    result.push_str(prefix);
    for c in text.chars() {
        result.push(c);
        if c == '\n' {
            result.push_str(prefix);
        }
    }
    result
}

/// Indent every line of `text` by `level` tab stops. Empty text stays empty.
pub fn indent(text: &str, level: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    prefix_lines(text, &repeat("\t", level))
}

/// Repeat a string n times
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}
