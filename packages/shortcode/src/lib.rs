//! # Folio Shortcode
//!
//! Finds `[tag ...]` shortcodes in plain text and rewrites them. Three forms
//! are recognised:
//!
//! ```text
//! [video src="a.mp4"]              single
//! [video src="a.mp4" /]            self-closing
//! [video src="a.mp4"]text[/video]  closed, with content
//! ```
//!
//! Attribute lists are lexed with logos; values may be double quoted,
//! single quoted or bare, with or without a name.
//!
//! ```rust
//! use folio_shortcode::video_preprocessor;
//!
//! let html = video_preprocessor().process("[video src=clip.mp4 loop]");
//! assert_eq!(html, r#"<video src="clip.mp4" loop />"#);
//! ```

mod error;
pub mod lexer;
mod processor;
mod shortcode;

pub use error::{ShortcodeError, ShortcodeResult};
pub use processor::{builtin_processor, video_preprocessor, ShortcodeProcessor};
pub use shortcode::{find_shortcodes, Shortcode, ShortcodeAttributes, ShortcodeKind, ShortcodeMatch};
