use super::{Serialize, Token};
use crate::errors::CommentTextError;
use std::borrow::Cow;
use std::fmt::{self, Debug};

/// An HTML comment.
#[derive(Clone)]
pub struct Comment<'i> {
    text: Cow<'i, str>,
    raw: Option<&'i str>,
}

impl<'i> Comment<'i> {
    pub(crate) fn new_token(text: &'i str, raw: &'i str) -> Token<'i> {
        Token::Comment(Comment {
            text: text.into(),
            raw: Some(raw),
        })
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn set_text(&mut self, text: &str) -> Result<(), CommentTextError> {
        if text.contains("-->") {
            return Err(CommentTextError::ClosingSequence);
        }

        self.text = Cow::Owned(text.to_owned());
        self.raw = None;

        Ok(())
    }
}

impl Serialize for Comment<'_> {
    #[inline]
    fn raw(&self) -> Option<&str> {
        self.raw
    }

    fn serialize_from_parts(&self, handler: &mut dyn FnMut(&str)) {
        handler("<!--");
        handler(&self.text);
        handler("-->");
    }
}

impl Debug for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comment").field("text", &self.text()).finish()
    }
}
