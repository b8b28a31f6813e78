use crate::config::Config;
use anyhow::{ensure, Result};
use clap::Args;
use folio_style::{ListStyle, TextList};

#[derive(Debug, Args)]
pub struct MarkersArgs {
    /// List style (ordered, unordered); defaults to the configured one
    #[arg(short, long)]
    pub style: Option<ListStyle>,

    /// Nesting depth, 1 for a top-level list
    #[arg(short, long, default_value_t = 1)]
    pub depth: usize,

    /// Number of items
    #[arg(short, long, default_value_t = 10)]
    pub count: usize,

    /// First item number
    #[arg(long)]
    pub start: Option<usize>,

    /// Count down instead of up
    #[arg(short, long)]
    pub reversed: bool,
}

pub fn markers(args: MarkersArgs, config: &Config) -> Result<()> {
    ensure!(args.depth > 0, "Depth starts at 1");

    let style = args.style.unwrap_or(config.list_style);
    let list = TextList::with_numbering(style, args.start, args.reversed);
    for line in marker_lines(&list, args.depth, args.count) {
        println!("{}", line);
    }
    Ok(())
}

fn marker_lines(list: &TextList, depth: usize, count: usize) -> Vec<String> {
    (0..count)
        .map(|index| list.marker_text(list.item_number(index, count), depth))
        .collect()
}
