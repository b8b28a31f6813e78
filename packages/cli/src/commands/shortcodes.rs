use super::read_input;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShortcodesArgs {
    /// Input file; stdin when omitted
    pub input: Option<PathBuf>,

    /// Only process these tags instead of the configured ones
    #[arg(short, long)]
    pub tag: Vec<String>,

    /// Print the parsed shortcodes as JSON instead of rewriting them
    #[arg(long)]
    pub parse: bool,
}

pub fn shortcodes(args: ShortcodesArgs, config: &Config) -> Result<()> {
    let source = read_input(args.input.as_deref())?;
    let config = if args.tag.is_empty() {
        config.clone()
    } else {
        Config {
            shortcodes: args.tag,
            ..config.clone()
        }
    };
    let processors = config.processors()?;

    if args.parse {
        let mut parsed = Vec::new();
        for processor in &processors {
            for (range, shortcode) in processor.parse_all(&source)? {
                parsed.push(serde_json::json!({
                    "start": range.start,
                    "end": range.end,
                    "shortcode": shortcode,
                }));
            }
        }
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    let output = processors
        .iter()
        .fold(source, |text, processor| processor.process(&text));
    print!("{}", output);
    Ok(())
}
