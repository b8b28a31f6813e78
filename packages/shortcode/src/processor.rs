use crate::error::ShortcodeResult;
use crate::shortcode::{find_shortcodes, Shortcode};
use std::fmt;
use std::ops::Range;
use tracing::{debug, instrument};

type Replacer = Box<dyn Fn(&Shortcode) -> String + Send + Sync>;

/// Rewrites every shortcode of one tag through a replacer function
pub struct ShortcodeProcessor {
    tag: String,
    replacer: Replacer,
}

impl ShortcodeProcessor {
    pub fn new<F>(tag: impl Into<String>, replacer: F) -> Self
    where
        F: Fn(&Shortcode) -> String + Send + Sync + 'static,
    {
        Self {
            tag: tag.into(),
            replacer: Box::new(replacer),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Replace each well-formed shortcode with the replacer's output.
    /// Malformed shortcodes stay in the text untouched.
    #[instrument(level = "debug", skip(self, text), fields(tag = %self.tag, length = text.len()))]
    pub fn process(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut copied = 0;
        for found in find_shortcodes(text, &self.tag) {
            match found.shortcode {
                Ok(shortcode) => {
                    output.push_str(&text[copied..found.range.start]);
                    output.push_str(&(self.replacer)(&shortcode));
                    copied = found.range.end;
                }
                Err(error) => debug!(%error, "leaving malformed shortcode"),
            }
        }
        output.push_str(&text[copied..]);
        output
    }

    /// Every shortcode of this tag, failing on the first malformed one
    pub fn parse_all(&self, text: &str) -> ShortcodeResult<Vec<(Range<usize>, Shortcode)>> {
        find_shortcodes(text, &self.tag)
            .into_iter()
            .map(|found| found.shortcode.map(|shortcode| (found.range, shortcode)))
            .collect()
    }
}

impl fmt::Debug for ShortcodeProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcodeProcessor")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Turns `[video ...]` shortcodes into self-closing `<video />` elements.
/// Enclosed content is dropped.
pub fn video_preprocessor() -> ShortcodeProcessor {
    ShortcodeProcessor::new("video", |shortcode| {
        let mut html = String::from("<video");
        for (name, value) in &shortcode.attributes.named {
            html.push_str(&format!(" {}=\"{}\"", name, value));
        }
        for value in &shortcode.attributes.unnamed {
            html.push(' ');
            html.push_str(value);
        }
        html.push_str(" />");
        html
    })
}

/// Processor for `tag` by name, if one is built in
pub fn builtin_processor(tag: &str) -> Option<ShortcodeProcessor> {
    match tag {
        "video" => Some(video_preprocessor()),
        _ => None,
    }
}
