use super::read_input;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_common::TextRange;
use folio_dom::OutlinePrinter;
use folio_format::{mirror, paragraph_markers, AttributedText, ListFormatter, TextStorage};
use folio_style::ListStyle;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Input file, one paragraph per line; stdin when omitted.
    /// Each tab or pair of leading spaces nests a line one level deeper.
    pub input: Option<PathBuf>,

    /// List style (ordered, unordered); defaults to the configured one
    #[arg(short, long)]
    pub style: Option<ListStyle>,

    /// Also print the element tree mirroring the list
    #[arg(long)]
    pub tree: bool,

    /// Also print each paragraph's style as JSON
    #[arg(long)]
    pub styles: bool,
}

pub fn list(args: ListArgs, config: &Config) -> Result<()> {
    let source = read_input(args.input.as_deref())?;
    let style = args.style.unwrap_or(config.list_style);
    let text = build_list(&source, style, config.increase_depth);

    for line in render_markers(&text, &config.marker_separator) {
        println!("{}", line);
    }

    if args.tree {
        let tree = mirror::build_tree(&text);
        println!();
        println!("{}", OutlinePrinter::print(&tree, tree.root()));
    }

    if args.styles {
        println!();
        for paragraph in text.paragraph_ranges() {
            match text.attributes_at(paragraph.location).paragraph_style() {
                Some(style) => println!("{}", style.to_json()?),
                None => println!("null"),
            }
        }
    }

    Ok(())
}

/// Leading indentation level and the line without it
fn split_indent(line: &str) -> (usize, &str) {
    let mut level = 0;
    let mut rest = line;
    loop {
        if let Some(stripped) = rest.strip_prefix('\t') {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("  ") {
            rest = stripped;
        } else {
            return (level, rest);
        }
        level += 1;
    }
}

/// Every line becomes a list item, nested by its indentation
fn build_list(source: &str, style: ListStyle, increase_depth: bool) -> AttributedText {
    let (levels, lines): (Vec<usize>, Vec<&str>) = source.lines().map(split_indent).unzip();
    let mut text = AttributedText::new(&lines.join("\n"));
    if text.is_empty() {
        return text;
    }

    let mut formatter = ListFormatter::new(style);
    if increase_depth {
        formatter = formatter.increasing_depth();
    }
    let len = text.len();
    formatter.apply_attributes_to(&mut text, TextRange::new(0, len));

    let nested = ListFormatter::new(style).increasing_depth();
    for (paragraph, level) in text.paragraph_ranges().into_iter().zip(levels) {
        debug!(paragraph = %paragraph, level, "nesting paragraph");
        for _ in 0..level {
            for (run, attributes) in text.attribute_runs(paragraph) {
                text.set_attributes(&nested.apply(&attributes, None), run);
            }
        }
    }
    text
}

fn render_markers(text: &AttributedText, separator: &str) -> Vec<String> {
    text.paragraph_ranges()
        .into_iter()
        .zip(paragraph_markers(text))
        .map(|(paragraph, marker)| {
            let content = text.substring(text.without_terminator(paragraph));
            match marker {
                Some(marker) => format!(
                    "{}{}{}{}",
                    "  ".repeat(marker.depth - 1),
                    marker.text.cyan(),
                    separator,
                    content
                ),
                None => content,
            }
        })
        .collect()
}
