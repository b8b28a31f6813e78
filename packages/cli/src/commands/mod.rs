pub mod init;
pub mod list;
pub mod markers;
pub mod shortcodes;

pub use init::{init, InitArgs};
pub use list::{list, ListArgs};
pub use markers::{markers, MarkersArgs};
pub use shortcodes::{shortcodes, ShortcodesArgs};

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Contents of `input`, or of stdin when no file is given
pub(crate) fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Cannot read stdin")?;
            Ok(source)
        }
    }
}
