use logos::Logos;
use std::fmt;

/// Tokens of the attribute list inside `[tag ...]`
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token<'src> {
    #[regex(r"[A-Za-z_][A-Za-z0-9_:.-]*", |lex| lex.slice(), priority = 5)]
    Name(&'src str),

    #[token("=")]
    Equals,

    #[regex(r#""[^"]*""#, |lex| unquote(lex.slice()))]
    DoubleQuoted(&'src str),

    #[regex(r"'[^']*'", |lex| unquote(lex.slice()))]
    SingleQuoted(&'src str),

    // Unquoted values such as 640 or https://example.com/a.mp4
    #[regex(r#"[^\s"'=\[\]]+"#, |lex| lex.slice(), priority = 1)]
    Bare(&'src str),
}

fn unquote(slice: &str) -> &str {
    &slice[1..slice.len() - 1]
}

impl<'src> Token<'src> {
    /// Text of a token usable as a value
    pub fn value(&self) -> Option<&'src str> {
        match self {
            Token::Name(text)
            | Token::DoubleQuoted(text)
            | Token::SingleQuoted(text)
            | Token::Bare(text) => Some(text),
            Token::Equals => None,
        }
    }
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Name(s) => write!(f, "name '{}'", s),
            Token::Equals => write!(f, "="),
            Token::DoubleQuoted(s) => write!(f, "string \"{}\"", s),
            Token::SingleQuoted(s) => write!(f, "string '{}'", s),
            Token::Bare(s) => write!(f, "value {}", s),
        }
    }
}

/// Tokenize attribute text. Unlexable input yields `Err` with its span.
pub fn tokenize(source: &str) -> Vec<Result<(Token<'_>, std::ops::Range<usize>), std::ops::Range<usize>>> {
    Token::lexer(source)
        .spanned()
        .map(|(result, span)| result.map(|token| (token, span.clone())).map_err(|_| span))
        .collect()
}
