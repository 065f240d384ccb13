mod cli;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use notemark::note::{append_tag, tag_for_path};
use notemark::{ConversionOptions, Converter};

use crate::cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let options = ConversionOptions::default()
        .with_heading_style(cli.heading_style)
        .with_bullets(&cli.bullets);
    let converter = Converter::with_options(options);

    let inputs = if cli.inputs.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.inputs.clone()
    };
    if cli.output.is_some() && inputs.len() > 1 {
        bail!("--output takes a single input, got {}", inputs.len());
    }
    if cli.output_dir.is_some() && inputs.iter().any(|input| is_stdin(input)) {
        bail!("stdin cannot be written to --output-dir, use --output instead");
    }

    let mut stdout = io::stdout().lock();
    for input in &inputs {
        let html = read_input(input)?;
        let markdown = converter
            .convert_bytes(&html)
            .with_context(|| format!("failed to convert {}", input.display()))?;

        if let Some(dir) = &cli.output_dir {
            let relative = relative_input(input);
            let tag = if cli.use_tags {
                tag_for_path(&relative)
            } else {
                cli.tag.clone()
            };
            let dst = dir
                .join(&relative)
                .with_extension(cli.extension.trim_start_matches('.'));
            write_note(input, &dst, &append_tag(&markdown, tag.as_deref()))?;
        } else if let Some(dst) = &cli.output {
            write_note(input, dst, &append_tag(&markdown, cli.tag.as_deref()))?;
        } else {
            stdout
                .write_all(append_tag(&markdown, cli.tag.as_deref()).as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

fn read_input(input: &Path) -> Result<Vec<u8>> {
    if is_stdin(input) {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read(input).with_context(|| format!("failed to read {}", input.display()))
}

/// Path of an input below the output directory.
///
/// Relative inputs keep their folders (minus `.` and `..`); absolute ones
/// keep only their file name.
fn relative_input(input: &Path) -> PathBuf {
    if input.is_absolute() {
        return input.file_name().map(PathBuf::from).unwrap_or_default();
    }
    input
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

fn write_note(src: &Path, dst: &Path, contents: &str) -> Result<()> {
    info!("{} -> {}", src.display(), dst.display());
    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(dst, contents).with_context(|| format!("failed to write {}", dst.display()))
}
