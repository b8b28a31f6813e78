use crate::error::{ShortcodeError, ShortcodeResult};
use crate::lexer::{tokenize, Token};
use serde::Serialize;
use std::ops::Range;

/// How a shortcode was written in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShortcodeKind {
    /// `[tag attrs/]`
    SelfClosing,
    /// `[tag attrs]` with no matching closing tag
    Single,
    /// `[tag attrs]content[/tag]`
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShortcodeAttributes {
    /// `name=value` pairs in source order
    pub named: Vec<(String, String)>,
    /// Values without a name in source order
    pub unnamed: Vec<String>,
}

impl ShortcodeAttributes {
    /// Value of the first attribute called `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.unnamed.is_empty()
    }

    /// Read an attribute list such as `src="a.mp4" width=640 autoplay`.
    /// `offset` is added to the offsets of reported errors.
    pub fn parse(source: &str, offset: usize) -> ShortcodeResult<Self> {
        let mut tokens = Vec::new();
        for result in tokenize(source) {
            match result {
                Ok(token) => tokens.push(token),
                Err(span) => {
                    return Err(ShortcodeError::InvalidToken {
                        offset: offset + span.start,
                    })
                }
            }
        }

        let mut attributes = Self::default();
        let mut index = 0;
        while index < tokens.len() {
            let (token, span) = &tokens[index];
            match token {
                Token::Name(name) if matches!(tokens.get(index + 1), Some((Token::Equals, _))) => {
                    let value = tokens
                        .get(index + 2)
                        .and_then(|(token, _)| token.value())
                        .ok_or_else(|| ShortcodeError::MissingValue {
                            name: name.to_string(),
                            offset: offset + span.start,
                        })?;
                    attributes.named.push((name.to_string(), value.to_string()));
                    index += 3;
                }
                Token::Equals => {
                    return Err(ShortcodeError::UnexpectedToken {
                        found: token.to_string(),
                        offset: offset + span.start,
                    })
                }
                _ => {
                    if let Some(value) = token.value() {
                        attributes.unnamed.push(value.to_string());
                    }
                    index += 1;
                }
            }
        }
        Ok(attributes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortcode {
    pub tag: String,
    pub attributes: ShortcodeAttributes,
    pub kind: ShortcodeKind,
    /// Text between the opening and closing tags of a closed shortcode
    pub content: Option<String>,
}

impl Shortcode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: ShortcodeAttributes::default(),
            kind: ShortcodeKind::Single,
            content: None,
        }
    }
}

/// A shortcode candidate and the byte range it covers
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcodeMatch {
    pub range: Range<usize>,
    pub shortcode: ShortcodeResult<Shortcode>,
}

/// Find every `[tag ...]` shortcode in `text`, in source order.
///
/// Candidates that start like a shortcode but cannot be read are reported
/// with an error covering just their opening bracket.
pub fn find_shortcodes(text: &str, tag: &str) -> Vec<ShortcodeMatch> {
    let mut matches = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find('[') {
        let start = cursor + found;
        let after_tag = start + 1 + tag.len();
        if !opens_tag(text, start, tag) {
            cursor = start + 1;
            continue;
        }

        let Some(close) = closing_bracket(text, after_tag) else {
            matches.push(ShortcodeMatch {
                range: start..start + 1,
                shortcode: Err(ShortcodeError::Unterminated {
                    tag: tag.to_string(),
                    offset: start,
                }),
            });
            cursor = start + 1;
            continue;
        };

        let inner = &text[after_tag..close];
        let (inner, self_closing) = match inner.trim_end().strip_suffix('/') {
            Some(stripped) => (stripped, true),
            None => (inner, false),
        };

        let attributes = match ShortcodeAttributes::parse(inner, after_tag) {
            Ok(attributes) => attributes,
            Err(error) => {
                matches.push(ShortcodeMatch {
                    range: start..start + 1,
                    shortcode: Err(error),
                });
                cursor = start + 1;
                continue;
            }
        };

        let mut shortcode = Shortcode {
            tag: tag.to_string(),
            attributes,
            kind: ShortcodeKind::SelfClosing,
            content: None,
        };
        let mut end = close + 1;
        if !self_closing {
            let closing_tag = format!("[/{}]", tag);
            let closing = text[end..]
                .find(&closing_tag)
                .filter(|&position| !contains_opening(text, end, end + position, tag));
            match closing {
                Some(position) => {
                    shortcode.kind = ShortcodeKind::Closed;
                    shortcode.content = Some(text[end..end + position].to_string());
                    end += position + closing_tag.len();
                }
                None => shortcode.kind = ShortcodeKind::Single,
            }
        }

        matches.push(ShortcodeMatch {
            range: start..end,
            shortcode: Ok(shortcode),
        });
        cursor = end;
    }

    matches
}

/// Whether `[` at `start` is followed by `tag` and a delimiter
fn opens_tag(text: &str, start: usize, tag: &str) -> bool {
    let rest = &text[start + 1..];
    let Some(after) = rest.strip_prefix(tag) else {
        return false;
    };
    !tag.is_empty()
        && after
            .chars()
            .next()
            .is_some_and(|next| next.is_whitespace() || next == ']' || next == '/')
}

/// Whether another `[tag` opens between `from` and `to`
fn contains_opening(text: &str, from: usize, to: usize, tag: &str) -> bool {
    text[from..to]
        .match_indices('[')
        .any(|(index, _)| opens_tag(text, from + index, tag))
}

/// Byte offset of the `]` ending an opening tag, skipping quoted text
fn closing_bracket(text: &str, from: usize) -> Option<usize> {
    let mut quote = None;
    for (index, character) in text[from..].char_indices() {
        match (quote, character) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(character),
            (None, '[') => return None,
            (None, ']') => return Some(from + index),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(text: &str) -> (Range<usize>, Shortcode) {
        let mut matches = find_shortcodes(text, "video");
        assert_eq!(matches.len(), 1);
        let found = matches.remove(0);
        (found.range, found.shortcode.unwrap())
    }

    #[test]
    fn test_single_form() {
        let (range, shortcode) = only(r#"before [video src="a.mp4" autoplay] after"#);
        assert_eq!(range, 7..35);
        assert_eq!(shortcode.kind, ShortcodeKind::Single);
        assert_eq!(shortcode.attributes.get("src"), Some("a.mp4"));
        assert_eq!(shortcode.attributes.unnamed, vec!["autoplay".to_string()]);
        assert_eq!(shortcode.content, None);
    }

    #[test]
    fn test_self_closing_form() {
        let (range, shortcode) = only("[video width=640 /]");
        assert_eq!(range, 0..19);
        assert_eq!(shortcode.kind, ShortcodeKind::SelfClosing);
        assert_eq!(shortcode.attributes.get("width"), Some("640"));

        let (_, tight) = only("[video/]");
        assert_eq!(tight.kind, ShortcodeKind::SelfClosing);
        assert!(tight.attributes.is_empty());
    }

    #[test]
    fn test_closed_form_keeps_content() {
        let text = "x [video 'clip.mp4']caption[/video] y";
        let (range, shortcode) = only(text);
        assert_eq!(&text[range], "[video 'clip.mp4']caption[/video]");
        assert_eq!(shortcode.kind, ShortcodeKind::Closed);
        assert_eq!(shortcode.content.as_deref(), Some("caption"));
        assert_eq!(shortcode.attributes.unnamed, vec!["clip.mp4".to_string()]);
    }

    #[test]
    fn test_single_does_not_swallow_next_shortcode() {
        let matches = find_shortcodes("[video a] text [video b]c[/video]", "video");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].range, 0..9);
        let second = matches[1].shortcode.as_ref().unwrap();
        assert_eq!(second.kind, ShortcodeKind::Closed);
        assert_eq!(second.content.as_deref(), Some("c"));
    }

    #[test]
    fn test_brackets_inside_quotes() {
        let (_, shortcode) = only(r#"[video title="a ] b"]"#);
        assert_eq!(shortcode.attributes.get("title"), Some("a ] b"));
    }

    #[test]
    fn test_other_tags_are_ignored() {
        assert!(find_shortcodes("[videos x] [audio] [/video] [ video]", "video").is_empty());
    }

    #[test]
    fn test_malformed_candidates_report_errors() {
        let matches = find_shortcodes("[video src=] [video width=3", "video");
        assert_eq!(matches.len(), 2);
        assert!(matches!(
            matches[0].shortcode,
            Err(ShortcodeError::MissingValue { ref name, offset: 7 }) if name == "src"
        ));
        assert!(matches!(
            matches[1].shortcode,
            Err(ShortcodeError::Unterminated { offset: 13, .. })
        ));
    }

    #[test]
    fn test_stray_equals_is_unexpected() {
        assert!(matches!(
            ShortcodeAttributes::parse("= x", 10),
            Err(ShortcodeError::UnexpectedToken { offset: 10, .. })
        ));
    }
}
