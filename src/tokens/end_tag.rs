use super::{Serialize, Token};
use crate::html::ElementClass;
use std::borrow::Cow;
use std::fmt::{self, Debug};

/// A closing element tag. Never carries attributes or text.
#[derive(Clone)]
pub struct EndTag<'i> {
    name: Cow<'i, str>,
    raw: Option<&'i str>,
}

impl<'i> EndTag<'i> {
    pub(crate) fn new_token(name: &'i str, raw: &'i str) -> Token<'i> {
        Token::EndTag(EndTag {
            name: name.into(),
            raw: Some(raw),
        })
    }

    /// A close synthesized for a still-open element; serializes from the
    /// name alone, with the opening tag's original case.
    pub(crate) fn synthetic(name: Cow<'i, str>) -> Token<'i> {
        Token::EndTag(EndTag { name, raw: None })
    }

    /// The tag name with its original case preserved. Compare
    /// case-insensitively.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn class(&self) -> ElementClass {
        ElementClass::of(&self.name)
    }
}

impl Serialize for EndTag<'_> {
    #[inline]
    fn raw(&self) -> Option<&str> {
        self.raw
    }

    fn serialize_from_parts(&self, handler: &mut dyn FnMut(&str)) {
        handler("</");
        handler(&self.name);
        handler(">");
    }
}

impl Debug for EndTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndTag").field("name", &self.name()).finish()
    }
}
