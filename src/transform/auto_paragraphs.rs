use crate::html::{Tag, TagHash};
use crate::stream::TokenStream;
use crate::tokenizer::tokenize;
use crate::tokens::{Serialize, Token};
use memchr::memmem;

/// Converts text paragraphs separated by blank lines into `<p>` paragraphs
/// while preserving any markup already present.
///
/// Newlines within paragraphs become `<br>`; content of verbatim elements
/// (`<pre>`, `<code>`, lists, tables, headers, inline emphasis) is copied
/// through untouched; block elements break paragraphs. `\r\n` is
/// normalized to `\n` and the input is trimmed before tokenizing.
pub fn auto_paragraphs(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n");
    let mut stream = tokenize(normalized.trim());

    AutoParagraphFormatter::new().format(&mut stream)
}

/// The streaming paragraph state machine behind [`auto_paragraphs`].
///
/// One forward pass with a single bit of state: whether a generated
/// paragraph is currently open.
#[derive(Debug, Default)]
pub struct AutoParagraphFormatter {
    paragraph_open: bool,
}

impl AutoParagraphFormatter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, stream: &mut TokenStream<'_>) -> String {
        let mut out = String::new();

        // No tokens in the text being formatted.
        let Some(first) = stream.current() else {
            return out;
        };
        let mut token = first.clone();

        loop {
            if self.paragraph_open && is_block_tag(&token) {
                // A `</p>` closes the open paragraph naturally; any other
                // block tag forces a close first.
                if !is_p_end_tag(&token) {
                    out.push_str("</p>");
                }

                self.paragraph_open = false;
            }

            // Bare inline content at the very start of the input opens a
            // paragraph implicitly. The trigger is literally "no output
            // yet", not "no significant token yet".
            if let Token::StartTag(tag) = &token {
                if !tag.class().is_block() && !tag.is_empty_element() && out.is_empty() {
                    trace!(@transform "implicit leading <p>");
                    out.push_str("<p>");
                    self.paragraph_open = true;
                }
            }

            if let Token::StartTag(tag) = &token {
                if tag.class().is_verbatim() && !tag.is_empty_element() {
                    copy_verbatim_subtree(stream, &mut out);

                    match stream.next() {
                        Some(next) => {
                            token = next.clone();
                            continue;
                        }
                        None => break,
                    }
                }
            }

            match &token {
                Token::Text(text) => self.append_text(text.as_str(), &mut out),
                _ => {
                    token.serialize(&mut |part| out.push_str(part));

                    if let Token::StartTag(tag) = &token {
                        if !tag.is_empty_element() && TagHash::from(tag.name()) == Tag::P {
                            self.paragraph_open = true;
                        }
                    }
                }
            }

            match stream.next() {
                Some(next) => token = next.clone(),
                None => break,
            }
        }

        let mut out = strip_empty_paragraphs(&out);
        out = unwrap_comment_paragraphs(&out);

        if self.paragraph_open {
            out.push_str("</p>");
        }

        out
    }

    fn append_text(&mut self, text: &str, out: &mut String) {
        if text.is_empty() {
            return;
        }

        let mut rest = text;

        if !self.paragraph_open {
            out.push_str("<p>");
            rest = rest.trim_start();
            self.paragraph_open = true;
        }

        // A whitespace run containing two or more newlines is a paragraph
        // break; any remaining newline is a line break.
        while !rest.is_empty() {
            let leading_ws = rest.chars().next().is_some_and(char::is_whitespace);
            let end = rest
                .find(|ch: char| ch.is_whitespace() != leading_ws)
                .unwrap_or(rest.len());
            let run = &rest[..end];

            if leading_ws && run.matches('\n').count() >= 2 {
                out.push_str("</p><p>");
            } else if leading_ws {
                for ch in run.chars() {
                    if ch == '\n' {
                        out.push_str("<br>");
                    } else {
                        out.push(ch);
                    }
                }
            } else {
                out.push_str(run);
            }

            rest = &rest[end..];
        }
    }
}

/// Copies the subtree of the verbatim element under the cursor through to
/// its first matching end tag, with no paragraph logic applied inside.
/// Leaves the cursor on the end tag (or at the stream end when the element
/// never closes).
fn copy_verbatim_subtree(stream: &mut TokenStream<'_>, out: &mut String) {
    let name = match stream.current() {
        Some(Token::StartTag(tag)) => tag.name().to_owned(),
        _ => return,
    };

    loop {
        let Some(nested) = stream.current() else {
            return;
        };

        nested.serialize(&mut |part| out.push_str(part));

        let closed = matches!(nested, Token::EndTag(end) if end.name().eq_ignore_ascii_case(&name));

        if closed || stream.next().is_none() {
            return;
        }
    }
}

fn is_block_tag(token: &Token<'_>) -> bool {
    match token {
        Token::StartTag(tag) => tag.class().is_block(),
        Token::EndTag(tag) => tag.class().is_block(),
        _ => false,
    }
}

fn is_p_end_tag(token: &Token<'_>) -> bool {
    matches!(token, Token::EndTag(tag) if TagHash::from(tag.name()) == Tag::P)
}

/// Removes every generated `<p></p>` along with surrounding whitespace.
fn strip_empty_paragraphs(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = memmem::find(rest.as_bytes(), b"<p></p>") {
        out.push_str(rest[..pos].trim_end());
        rest = rest[pos + "<p></p>".len()..].trim_start();
    }

    out.push_str(rest);

    out
}

/// Rewrites `<p><!--X--></p>` back to a bare `<!--X-->`: paragraph
/// wrapping must never hide a comment inside a spurious paragraph. Only
/// single-line comment bodies qualify.
fn unwrap_comment_paragraphs(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = memmem::find(rest.as_bytes(), b"<p><!--") {
        let body_start = pos + "<p><!--".len();

        match memmem::find(rest[body_start..].as_bytes(), b"--></p>") {
            Some(len) if !rest[body_start..body_start + len].contains('\n') => {
                out.push_str(&rest[..pos]);
                out.push_str("<!--");
                out.push_str(&rest[body_start..body_start + len]);
                out.push_str("-->");
                rest = &rest[body_start + len + "--></p>".len()..];
            }
            _ => {
                out.push_str(&rest[..body_start]);
                rest = &rest[body_start..];
            }
        }
    }

    out.push_str(rest);

    out
}

#[cfg(test)]
mod tests {
    use super::auto_paragraphs;

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(auto_paragraphs(""), "");
    }

    #[test]
    fn plain_text_is_wrapped() {
        assert_eq!(auto_paragraphs("hello"), "<p>hello</p>");
    }

    #[test]
    fn double_newline_is_a_paragraph_break() {
        assert_eq!(auto_paragraphs("a\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn single_newline_is_a_line_break() {
        assert_eq!(auto_paragraphs("a\nb"), "<p>a<br>b</p>");
    }

    #[test]
    fn crlf_is_normalized() {
        assert_eq!(auto_paragraphs("a\r\n\r\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn whitespace_between_newlines_still_breaks() {
        assert_eq!(auto_paragraphs("a\n \t\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn leading_inline_tag_opens_a_paragraph() {
        assert_eq!(auto_paragraphs("<span>x</span>"), "<p><span>x</span></p>");
    }

    #[test]
    fn verbatim_subtree_is_untouched() {
        let pre = "<pre>line one\n\nline two</pre>";
        assert_eq!(auto_paragraphs(pre), pre);

        let list = "<ul><li>one\n\ntwo</li><li>three</li></ul>";
        assert_eq!(auto_paragraphs(list), list);
    }

    #[test]
    fn nested_verbatim_stops_at_first_matching_close() {
        let html = "<ul><li>a<ul><li>b</li></ul></li></ul>";
        assert_eq!(auto_paragraphs(html), html);
    }

    #[test]
    fn block_element_closes_open_paragraph() {
        assert_eq!(
            auto_paragraphs("text<div>inner</div>"),
            "<p>text</p><div><p>inner</p></div>"
        );
    }

    #[test]
    fn existing_paragraphs_are_respected() {
        assert_eq!(auto_paragraphs("<p>a</p><p>b</p>"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn comment_is_not_wrapped() {
        assert_eq!(auto_paragraphs("<!--hello-->"), "<!--hello-->");
    }

    #[test]
    fn comment_between_paragraphs_stays_bare() {
        assert_eq!(
            auto_paragraphs("a\n\n<!--c-->\n\nb"),
            "<p>a</p><!--c--><p>b</p>"
        );
    }

    #[test]
    fn no_empty_paragraphs() {
        let out = auto_paragraphs("a\n\n\n\nb");
        assert!(!out.contains("<p></p>"));
        assert_eq!(out, "<p>a</p><p>b</p>");
    }

    #[test]
    fn hr_breaks_a_paragraph() {
        assert_eq!(auto_paragraphs("a<hr>b"), "<p>a</p><hr><p>b</p>");
    }

    #[test]
    fn text_after_block_close_reopens_a_paragraph() {
        assert_eq!(
            auto_paragraphs("<div>a</div>\nafter"),
            "<div><p>a</p></div><p>after</p>"
        );
    }
}
