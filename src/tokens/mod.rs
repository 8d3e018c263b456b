use std::fmt::{self, Debug};

mod attributes;
mod comment;
mod end_tag;
mod raw_content;
mod serialize;
mod start_tag;
mod text;

pub use self::attributes::{Attribute, Attributes};
pub use self::comment::Comment;
pub use self::end_tag::EndTag;
pub use self::raw_content::RawContent;
pub use self::serialize::Serialize;
pub use self::start_tag::StartTag;
pub use self::text::Text;

/// One structural or textual event from a markup stream.
///
/// A self-closing or void start tag is still a [`StartTag`]; it reports
/// itself through [`StartTag::is_empty_element`].
#[derive(Clone)]
pub enum Token<'i> {
    Text(Text<'i>),
    StartTag(StartTag<'i>),
    EndTag(EndTag<'i>),
    Comment(Comment<'i>),
    /// Doctype declarations, processing instructions and other markup the
    /// transforms only ever pass through.
    Other(RawContent<'i>),
}

impl Serialize for Token<'_> {
    #[inline]
    fn raw(&self) -> Option<&str> {
        match self {
            Token::Text(t) => t.raw(),
            Token::StartTag(t) => t.raw(),
            Token::EndTag(t) => t.raw(),
            Token::Comment(t) => t.raw(),
            Token::Other(t) => t.raw(),
        }
    }

    #[inline]
    fn serialize_from_parts(&self, handler: &mut dyn FnMut(&str)) {
        match self {
            Token::Text(t) => t.serialize_from_parts(handler),
            Token::StartTag(t) => t.serialize_from_parts(handler),
            Token::EndTag(t) => t.serialize_from_parts(handler),
            Token::Comment(t) => t.serialize_from_parts(handler),
            Token::Other(t) => t.serialize_from_parts(handler),
        }
    }
}

impl Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(t) => t.fmt(f),
            Token::StartTag(t) => t.fmt(f),
            Token::EndTag(t) => t.fmt(f),
            Token::Comment(t) => t.fmt(f),
            Token::Other(t) => t.fmt(f),
        }
    }
}
