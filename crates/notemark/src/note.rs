//! Helpers for writing converted notes to disk.
//!
//! The converter returns bare Markdown; exporting a folder of notes also
//! needs a tag footer naming the folder each note came from.

use std::path::Path;

/// Tag for a note stored at `relative_path`: its folder, with spaces as `-`.
///
/// Notes at the top level have no folder and get no tag.
pub fn tag_for_path(relative_path: &Path) -> Option<String> {
    let folder = relative_path.parent()?.to_str()?;
    if folder.is_empty() {
        return None;
    }
    Some(folder.replace(' ', "-"))
}

/// Append the `#tag` footer to a converted note.
pub fn append_tag(body: &str, tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("{body}\n#{tag}\n"),
        None => body.to_string(),
    }
}
