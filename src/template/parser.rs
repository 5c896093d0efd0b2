use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::anychar,
    combinator::{recognize, rest},
    multi::many0,
    sequence::{delimited, pair},
};

use crate::constants::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken<'a> {
    /// Literal text, including anything that looks like a placeholder but is not one.
    Text(&'a str),
    /// Name of a well-formed `{{name}}` placeholder, without braces.
    Placeholder(&'a str),
}

/// Check if a character may appear in a placeholder name.
#[inline]
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `input` into text and placeholder tokens.
///
/// Never fails: whatever is not a well-formed placeholder ends up in a text token.
pub(super) fn tokenize(input: &str) -> Vec<TemplateToken<'_>> {
    return match many0(alt((placeholder_token, text_token))).parse(input) {
        Ok((_, tokens)) => tokens,
        Err(_) => vec![TemplateToken::Text(input)],
    };
}

fn placeholder_token(input: &str) -> IResult<&str, TemplateToken<'_>> {
    delimited(
        tag(PLACEHOLDER_OPEN),
        take_while1(is_name_char),
        tag(PLACEHOLDER_CLOSE),
    )
    .map(TemplateToken::Placeholder)
    .parse(input)
}

/// At least one character, then everything up to the next `{{`.
///
/// Always consuming the first character lets a `{{` that failed to parse as a
/// placeholder fall through as text, one brace at a time.
fn text_token(input: &str) -> IResult<&str, TemplateToken<'_>> {
    recognize(pair(anychar, alt((take_until(PLACEHOLDER_OPEN), rest))))
        .map(TemplateToken::Text)
        .parse(input)
}
