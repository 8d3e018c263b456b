use super::{Serialize, Token};
use std::fmt::{self, Debug};

/// Markup the transforms never interpret: doctype declarations, processing
/// instructions, CDATA sections. Carried as the raw source slice and
/// serialized verbatim.
#[derive(Clone)]
pub struct RawContent<'i> {
    raw: &'i str,
}

impl<'i> RawContent<'i> {
    pub(crate) const fn new_token(raw: &'i str) -> Token<'i> {
        Token::Other(RawContent { raw })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.raw
    }
}

impl Serialize for RawContent<'_> {
    #[inline]
    fn raw(&self) -> Option<&str> {
        Some(self.raw)
    }

    #[inline]
    fn serialize_from_parts(&self, handler: &mut dyn FnMut(&str)) {
        handler(self.raw);
    }
}

impl Debug for RawContent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawContent").field("raw", &self.raw).finish()
    }
}
