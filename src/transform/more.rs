use super::summarize::StructuralSummarizer;
use crate::stream::TokenStream;
use crate::tokenizer::tokenize;
use crate::tokens::{Attribute, EndTag, StartTag, Text, Token};
use memchr::memmem;
use std::borrow::Cow;

/// A missing limit means "effectively unlimited", not "no truncation".
const UNLIMITED: u32 = 9_999_999;

/// The "read more" link to splice into truncated content.
///
/// The href comes from the caller's permalink provider and the text from
/// its translation lookup; neither is interpreted here. Attribute values
/// are `"`-escaped on render; the link text is emitted as-is.
#[derive(Debug, Clone)]
pub struct AnchorSpec {
    href: String,
    text: String,
    title: Option<String>,
    class: Option<String>,
}

impl AnchorSpec {
    #[inline]
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        AnchorSpec {
            href: href.into(),
            text: text.into(),
            title: None,
            class: None,
        }
    }

    #[inline]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());

        self
    }

    #[inline]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());

        self
    }

    #[inline]
    pub fn link_text(&self) -> &str {
        &self.text
    }

    /// Builds the anchor as a three-token stream: open tag, text, close.
    fn to_stream(&self) -> TokenStream<'static> {
        let mut tag = StartTag::synthetic("a");

        for (name, value) in [
            ("title", self.title.as_deref()),
            ("class", self.class.as_deref()),
            ("href", Some(self.href.as_str())),
        ] {
            if let Some(value) = value {
                tag.push_attribute(Attribute::new(
                    Cow::Borrowed(name),
                    Cow::Owned(value.to_owned()),
                    None,
                ));
            }
        }

        let mut stream = TokenStream::new();

        stream.push(Token::StartTag(tag));
        stream.push(Text::synthetic(self.text.clone()));
        stream.push(EndTag::synthetic(Cow::Borrowed("a")));

        stream
    }

    fn to_html(&self) -> String {
        self.to_stream().to_html()
    }
}

/// Composes the truncated "read more" rendering of a piece of content.
///
/// Splits at the first explicit `<!--more-->` marker when one is present
/// and splitting is allowed; otherwise truncates via
/// [`StructuralSummarizer`] and splices the anchor into the summary at the
/// cut point. See [`compose_more`] for the one-shot form.
#[derive(Debug)]
pub struct MoreComposer<'a> {
    link: &'a AnchorSpec,
    marker_split_allowed: bool,
    max_words: Option<u32>,
    max_paragraphs: Option<u32>,
}

impl<'a> MoreComposer<'a> {
    #[inline]
    pub fn new(link: &'a AnchorSpec) -> Self {
        MoreComposer {
            link,
            marker_split_allowed: true,
            max_words: None,
            max_paragraphs: None,
        }
    }

    #[inline]
    pub fn marker_split_allowed(mut self, allowed: bool) -> Self {
        self.marker_split_allowed = allowed;

        self
    }

    #[inline]
    pub fn max_words(mut self, max_words: Option<u32>) -> Self {
        self.max_words = max_words;

        self
    }

    #[inline]
    pub fn max_paragraphs(mut self, max_paragraphs: Option<u32>) -> Self {
        self.max_paragraphs = max_paragraphs;

        self
    }

    pub fn compose(&self, content: &str) -> String {
        // An explicit marker wins over any limit, but only splits when
        // there is content on both sides of it.
        if self.marker_split_allowed {
            if let Some((prefix, suffix)) = split_at_more_marker(content) {
                if !prefix.is_empty() && !suffix.is_empty() {
                    trace!(@transform "split at explicit more marker");

                    return if self.link.link_text().is_empty() {
                        prefix.to_owned()
                    } else {
                        format!("{prefix} {}", self.link.to_html())
                    };
                }
            }
        }

        if self.max_words.is_none() && self.max_paragraphs.is_none() {
            return content.to_owned();
        }

        let max_words = self.max_words.unwrap_or(UNLIMITED);
        let max_paragraphs = self.max_paragraphs.unwrap_or(UNLIMITED);

        let mut stream = tokenize(content);
        let summary = StructuralSummarizer::new(max_words, max_paragraphs).summarize(&mut stream);

        // Truncation that didn't shorten anything gets no "more" link.
        if summary.chars().count() >= content.chars().count() {
            return content.to_owned();
        }

        if self.link.link_text().is_empty() {
            return summary;
        }

        // Splice rather than concatenate: the anchor has to land inside
        // the last open block, right where the content was cut, however
        // deep that is.
        let mut summary_stream = tokenize(&summary);

        summary_stream.end();
        let at = summary_stream.position();
        summary_stream.splice(self.link.to_stream(), at);

        summary_stream.to_html()
    }
}

/// One-shot composition; see [`MoreComposer`].
pub fn compose_more(
    content: &str,
    marker_split_allowed: bool,
    link: &AnchorSpec,
    max_words: Option<u32>,
    max_paragraphs: Option<u32>,
) -> String {
    MoreComposer::new(link)
        .marker_split_allowed(marker_split_allowed)
        .max_words(max_words)
        .max_paragraphs(max_paragraphs)
        .compose(content)
}

/// Splits `content` around the first `<!-- more -->` comment (any amount
/// of surrounding whitespace in the body, ASCII case-insensitive).
fn split_at_more_marker(content: &str) -> Option<(&str, &str)> {
    let bytes = content.as_bytes();

    for start in memmem::find_iter(bytes, b"<!--") {
        let body = &content[start + 4..];

        let rest = body.trim_start();
        let Some(rest) = strip_prefix_ignore_ascii_case(rest, "more") else {
            continue;
        };

        if let Some(rest) = rest.trim_start().strip_prefix("-->") {
            return Some((&content[..start], rest));
        }
    }

    None
}

fn strip_prefix_ignore_ascii_case<'i>(text: &'i str, prefix: &str) -> Option<&'i str> {
    text.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &text[prefix.len()..])
}
