use super::ELLIPSIS;
use crate::stream::TokenStream;
use crate::tokenizer::tokenize;
use crate::tokens::{EndTag, Text, Token};
use std::borrow::Cow;

/// Truncates `input` to at most `max_words` words across at most
/// `max_paragraphs` top-level paragraphs, keeping the markup balanced.
///
/// The text that exhausts the word budget gets an `&hellip;` marker
/// appended. `max_words == 0` truncates at the first text token.
pub fn summarize(input: &str, max_words: u32, max_paragraphs: u32) -> String {
    let mut stream = tokenize(input);

    StructuralSummarizer::new(max_words, max_paragraphs).summarize(&mut stream)
}

/// The structure-preserving truncation behind [`summarize`].
///
/// Keeps an explicit stack of open tags and synthesizes a close for every
/// element still open at the truncation point, so the output is well
/// formed no matter where the budget ran out, including for input whose
/// end tags don't match what was opened.
#[derive(Debug)]
pub struct StructuralSummarizer {
    max_words: u32,
    max_paragraphs: u32,
}

impl StructuralSummarizer {
    #[inline]
    pub fn new(max_words: u32, max_paragraphs: u32) -> Self {
        StructuralSummarizer {
            max_words,
            max_paragraphs,
        }
    }

    pub fn summarize<'i>(&self, stream: &mut TokenStream<'i>) -> String {
        let mut summary = TokenStream::new();
        let mut open_tags: Vec<Cow<'i, str>> = Vec::new();
        let mut remaining_words = self.max_words;
        let mut paragraphs_closed = 0u32;
        // Once the budget is exhausted the loop only drains the stack:
        // nothing new is opened and no further words are consumed.
        let mut truncated = false;

        stream.rewind();

        while let Some(token) = stream.current().cloned() {
            if !truncated {
                match &token {
                    Token::StartTag(tag) if !tag.is_empty_element() => {
                        open_tags.push(tag.name_cow());
                        summary.push(token.clone());
                    }
                    Token::Text(text) => {
                        match take_words(text.as_str(), &mut remaining_words) {
                            Some(mut kept) => {
                                trace!(@transform "word budget exhausted");
                                kept.push_str(ELLIPSIS);
                                summary.push(Text::synthetic(kept));
                                truncated = true;
                            }
                            None => summary.push(token.clone()),
                        }
                    }
                    // Close handling is shared with the post-truncation
                    // drain below.
                    Token::EndTag(_) => {}
                    _ => summary.push(token.clone()),
                }
            }

            if let Token::EndTag(end) = &token {
                while let Some(name) = open_tags.pop() {
                    let matched = name.eq_ignore_ascii_case(end.name());

                    summary.push(EndTag::synthetic(name));

                    if !truncated && matched {
                        break;
                    }
                }

                if open_tags.is_empty() {
                    paragraphs_closed += 1;
                }

                if truncated || paragraphs_closed >= self.max_paragraphs {
                    break;
                }
            }

            if stream.next().is_none() {
                break;
            }
        }

        // Input that ends without closing what it opened still has to
        // come out balanced.
        while let Some(name) = open_tags.pop() {
            summary.push(EndTag::synthetic(name));
        }

        summary.to_html()
    }
}

/// Consumes up to `*remaining` whitespace-delimited words from `text`.
///
/// Returns `Some(kept)` with the counter zeroed when the budget is
/// exhausted by this text (even when nothing was actually dropped), `None`
/// when the whole text fits with budget to spare. Whitespace between kept
/// words is preserved exactly.
fn take_words(text: &str, remaining: &mut u32) -> Option<String> {
    if *remaining == 0 {
        return Some(String::new());
    }

    let mut kept_end = 0;
    let mut rest = text;

    while !rest.is_empty() {
        let is_word = !rest.chars().next().is_some_and(char::is_whitespace);
        let end = rest
            .find(|ch: char| ch.is_whitespace() == is_word)
            .unwrap_or(rest.len());

        if is_word {
            *remaining -= 1;
            kept_end = text.len() - rest.len() + end;

            if *remaining == 0 {
                return Some(text[..kept_end].to_owned());
            }
        }

        rest = &rest[end..];
    }

    None
}
