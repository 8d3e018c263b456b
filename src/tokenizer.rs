//! A lenient, non-validating markup tokenizer.
//!
//! This is deliberately not an HTML5 parser: there is no tree construction,
//! no entity decoding and no error reporting. Anything that doesn't parse
//! as a tag, comment or declaration is text; a stray `<` stays a `<`. The
//! exact source slice of every token is recorded so serialization reverses
//! tokenization byte-for-byte.
//!
//! The output may legitimately contain unmatched end tags for malformed
//! input; consumers are expected to tolerate that.

use crate::stream::TokenStream;
use crate::tokens::{Attribute, Attributes, Comment, EndTag, RawContent, StartTag, Text, Token};
use memchr::{memchr, memmem};

/// Tokenizes `input` into a [`TokenStream`] borrowing from it. Always
/// terminates, never fails.
pub fn tokenize(input: &str) -> TokenStream<'_> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'<', &bytes[pos..]) {
        let lt = pos + offset;

        match markup_at(input, lt) {
            Some((token, after)) => {
                if lt > text_start {
                    tokens.push(Text::new_token(&input[text_start..lt]));
                }

                trace!(@token token);
                tokens.push(token);

                pos = after;
                text_start = after;
            }
            None => pos = lt + 1,
        }
    }

    if text_start < input.len() {
        tokens.push(Text::new_token(&input[text_start..]));
    }

    TokenStream::from_tokens(tokens)
}

/// Tries to read one markup token starting at the `<` at byte `lt`.
/// Returns the token and the byte offset right after it, or `None` when
/// the `<` doesn't open anything.
fn markup_at(input: &str, lt: usize) -> Option<(Token<'_>, usize)> {
    let rest = &input[lt..];

    match *rest.as_bytes().get(1)? {
        b'!' if rest.starts_with("<!--") => Some(comment_at(input, lt)),
        b'!' | b'?' => Some(declaration_at(input, lt)),
        b'/' => end_tag_at(input, lt),
        ch if ch.is_ascii_alphabetic() => start_tag_at(input, lt),
        _ => None,
    }
}

fn comment_at(input: &str, lt: usize) -> (Token<'_>, usize) {
    let rest = &input[lt..];

    match memmem::find(&rest.as_bytes()[4..], b"-->") {
        Some(end) => {
            let body_end = 4 + end;

            (
                Comment::new_token(&rest[4..body_end], &rest[..body_end + 3]),
                lt + body_end + 3,
            )
        }
        // An unterminated comment swallows the rest of the input.
        None => (Comment::new_token(&rest[4..], rest), input.len()),
    }
}

fn declaration_at(input: &str, lt: usize) -> (Token<'_>, usize) {
    let rest = &input[lt..];

    match memchr(b'>', rest.as_bytes()) {
        Some(gt) => (RawContent::new_token(&rest[..=gt]), lt + gt + 1),
        None => (RawContent::new_token(rest), input.len()),
    }
}

fn end_tag_at(input: &str, lt: usize) -> Option<(Token<'_>, usize)> {
    let rest = &input[lt..];
    let bytes = rest.as_bytes();

    if !bytes.get(2)?.is_ascii_alphabetic() {
        return None;
    }

    let gt = memchr(b'>', &bytes[2..])? + 2;

    let name_end = bytes[2..gt]
        .iter()
        .position(|&b| is_whitespace(b))
        .map_or(gt, |o| o + 2);

    // Anything between the name and `>` is dropped; an end tag never
    // carries attributes.
    Some((EndTag::new_token(&rest[2..name_end], &rest[..=gt]), lt + gt + 1))
}

fn start_tag_at(input: &str, lt: usize) -> Option<(Token<'_>, usize)> {
    let rest = &input[lt..];
    let bytes = rest.as_bytes();
    let len = bytes.len();

    let mut i = 1;

    while i < len && !is_whitespace(bytes[i]) && !matches!(bytes[i], b'>' | b'/') {
        i += 1;
    }

    let name = &rest[1..i];
    let mut attributes = Vec::new();
    let mut self_closing = false;

    loop {
        while i < len && is_whitespace(bytes[i]) {
            i += 1;
        }

        // An unterminated tag doesn't tokenize; the `<` stays text.
        if i >= len {
            return None;
        }

        match bytes[i] {
            b'>' => {
                i += 1;
                break;
            }
            b'/' if bytes.get(i + 1) == Some(&b'>') => {
                self_closing = true;
                i += 2;
                break;
            }
            // A stray slash between attributes is dropped.
            b'/' => i += 1,
            _ => i = attribute_at(rest, i, &mut attributes)?,
        }
    }

    Some((
        StartTag::new_token(name, Attributes::new(attributes), self_closing, &rest[..i]),
        lt + i,
    ))
}

/// Reads one attribute starting at byte `start` of `rest`; returns the
/// offset right after it.
fn attribute_at<'i>(
    rest: &'i str,
    start: usize,
    attributes: &mut Vec<Attribute<'i>>,
) -> Option<usize> {
    let bytes = rest.as_bytes();
    let len = bytes.len();

    let mut i = start;

    while i < len && !is_whitespace(bytes[i]) && !matches!(bytes[i], b'>' | b'=' | b'/') {
        i += 1;
    }

    let name = &rest[start..i];

    let mut j = i;

    while j < len && is_whitespace(bytes[j]) {
        j += 1;
    }

    if bytes.get(j) != Some(&b'=') {
        // Bare attribute with no value.
        attributes.push(Attribute::new(name.into(), "".into(), Some(name)));

        return Some(i);
    }

    j += 1;

    while j < len && is_whitespace(bytes[j]) {
        j += 1;
    }

    match bytes.get(j) {
        Some(&quote @ (b'"' | b'\'')) => {
            let value_start = j + 1;
            // An unterminated quoted value doesn't tokenize.
            let end = memchr(quote, &bytes[value_start..])? + value_start;

            attributes.push(Attribute::new(
                name.into(),
                rest[value_start..end].into(),
                Some(&rest[start..=end]),
            ));

            Some(end + 1)
        }
        Some(_) => {
            let mut end = j;

            // An unquoted value runs to whitespace or `>`; a slash is part
            // of the value.
            while end < len && !is_whitespace(bytes[end]) && bytes[end] != b'>' {
                end += 1;
            }

            attributes.push(Attribute::new(
                name.into(),
                rest[j..end].into(),
                Some(&rest[start..end]),
            ));

            Some(end)
        }
        None => None,
    }
}

#[inline]
const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

#[cfg(test)]
mod tests {
    use super::tokenize;
    use crate::tokens::Token;

    fn kinds(input: &str) -> Vec<&'static str> {
        tokenize(input)
            .iter()
            .map(|t| match t {
                Token::Text(_) => "text",
                Token::StartTag(_) => "start",
                Token::EndTag(_) => "end",
                Token::Comment(_) => "comment",
                Token::Other(_) => "other",
            })
            .collect()
    }

    #[test]
    fn basic_structure() {
        assert_eq!(
            kinds("<p>a<!--c--><br></p><!doctype html>"),
            ["start", "text", "comment", "start", "end", "other"]
        );
    }

    #[test]
    fn stray_angle_brackets_are_text() {
        assert_eq!(kinds("2 < 3 and 4 > 1"), ["text"]);
        assert_eq!(kinds("a << b"), ["text"]);
        assert_eq!(tokenize("a < b").to_html(), "a < b");
    }

    #[test]
    fn attributes_are_parsed_leniently() {
        let stream = tokenize("<a href=\"/x\" class='y' data-n=1 download>");
        let Some(Token::StartTag(tag)) = stream.current() else {
            panic!("expected a start tag");
        };

        let attributes = tag.attributes();

        assert_eq!(attributes.len(), 4);
        assert_eq!(attributes[0].name(), "href");
        assert_eq!(attributes[0].value(), "/x");
        assert_eq!(attributes[1].value(), "y");
        assert_eq!(attributes[2].value(), "1");
        assert_eq!(attributes[3].name(), "download");
        assert_eq!(attributes[3].value(), "");
    }

    #[test]
    fn self_closing_and_void_tags_are_empty_elements() {
        let stream = tokenize("<br>");
        let Some(Token::StartTag(tag)) = stream.current() else {
            panic!("expected a start tag");
        };
        assert!(tag.is_empty_element() && !tag.self_closing());

        let stream = tokenize("<x-custom/>");
        let Some(Token::StartTag(tag)) = stream.current() else {
            panic!("expected a start tag");
        };
        assert!(tag.is_empty_element() && tag.self_closing());
    }

    #[test]
    fn unterminated_comment_swallows_to_eof() {
        let input = "a<!-- never closed";
        let stream = tokenize(input);

        assert_eq!(kinds(input), ["text", "comment"]);
        assert_eq!(stream.to_html(), input);
    }

    #[test]
    fn unterminated_tag_is_text() {
        assert_eq!(kinds("a <b"), ["text"]);
        assert_eq!(tokenize("a <b").to_html(), "a <b");
    }

    #[test]
    fn end_tag_attributes_are_dropped() {
        let stream = tokenize("</div class=x>");
        let Some(Token::EndTag(tag)) = stream.current() else {
            panic!("expected an end tag");
        };

        assert_eq!(tag.name(), "div");
        // The raw slice still round-trips.
        assert_eq!(stream.to_html(), "</div class=x>");
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }
}
