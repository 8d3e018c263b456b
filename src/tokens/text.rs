use super::{Serialize, Token};
use std::borrow::Cow;
use std::fmt::{self, Debug};

/// A run of character data. The payload is raw source text, not
/// entity-decoded, and serializes verbatim.
#[derive(Clone)]
pub struct Text<'i> {
    text: Cow<'i, str>,
}

impl<'i> Text<'i> {
    pub(crate) fn new_token(text: &'i str) -> Token<'i> {
        Token::Text(Text { text: text.into() })
    }

    pub(crate) fn synthetic(text: String) -> Token<'i> {
        Token::Text(Text {
            text: Cow::Owned(text),
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Serialize for Text<'_> {
    #[inline]
    fn raw(&self) -> Option<&str> {
        None
    }

    #[inline]
    fn serialize_from_parts(&self, handler: &mut dyn FnMut(&str)) {
        if !self.text.is_empty() {
            handler(&self.text);
        }
    }
}

impl Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text").field("text", &self.as_str()).finish()
    }
}
