use std::path::PathBuf;

use clap::Parser;
use notemark::{HeadingStyle, DEFAULT_BULLETS};

#[derive(Parser, Debug)]
#[command(
    name = "notemark",
    version,
    about = "Render HTML notes as Markdown",
    long_about = "Render HTML notes as Markdown.\n\n\
        Bare text in front of the first tag becomes the note title, lists keep \
        their nesting as tab indentation.\n\n\
        Examples:\n  \
        notemark note.html\n  \
        notemark --heading-style setext < note.html\n  \
        notemark --output-dir md --use-tags Work/*.html"
)]
pub struct Cli {
    /// HTML files to convert; `-` (or no input at all) reads stdin
    pub inputs: Vec<PathBuf>,

    #[arg(
        long,
        default_value = "atx",
        help = "Heading style: atx, atx_closed or setext"
    )]
    pub heading_style: HeadingStyle,

    #[arg(
        long,
        default_value = DEFAULT_BULLETS,
        help = "Bullet glyphs for unordered lists, cycled by nesting depth"
    )]
    pub bullets: String,

    #[arg(long, help = "Append a `#TAG` footer to every note")]
    pub tag: Option<String>,

    #[arg(
        short,
        long,
        conflicts_with = "output_dir",
        help = "Write the note to FILE instead of stdout (single input only)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Write each note under DIR, mirroring the input paths")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, default_value = ".md", help = "File extension for --output-dir")]
    pub extension: String,

    #[arg(
        long,
        requires = "output_dir",
        conflicts_with = "tag",
        help = "Tag every note with its folder"
    )]
    pub use_tags: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["notemark"]);
        assert!(cli.inputs.is_empty());
        assert_eq!(cli.heading_style, HeadingStyle::Atx);
        assert_eq!(cli.bullets, "*+-");
        assert_eq!(cli.extension, ".md");
        assert!(!cli.use_tags);
    }

    #[test]
    fn test_heading_style_flag() {
        let cli = Cli::parse_from(["notemark", "--heading-style", "atx_closed", "a.html"]);
        assert_eq!(cli.heading_style, HeadingStyle::AtxClosed);
        assert_eq!(cli.inputs, vec![PathBuf::from("a.html")]);
    }

    #[test]
    fn test_use_tags_requires_output_dir() {
        assert!(Cli::try_parse_from(["notemark", "--use-tags", "a.html"]).is_err());
    }
}
