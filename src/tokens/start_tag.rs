use super::{Attribute, Attributes, Serialize, Token};
use crate::errors::AttributeNameError;
use crate::html::ElementClass;
use std::borrow::Cow;
use std::fmt::{self, Debug};

/// An opening (or self-closing) element tag.
#[derive(Clone)]
pub struct StartTag<'i> {
    name: Cow<'i, str>,
    attributes: Attributes<'i>,
    self_closing: bool,
    raw: Option<&'i str>,
}

impl<'i> StartTag<'i> {
    pub(crate) fn new_token(
        name: &'i str,
        attributes: Attributes<'i>,
        self_closing: bool,
        raw: &'i str,
    ) -> Token<'i> {
        Token::StartTag(StartTag {
            name: name.into(),
            attributes,
            self_closing,
            raw: Some(raw),
        })
    }

    /// A tag created from scratch rather than parsed from text.
    pub(crate) fn synthetic(name: &str) -> Self {
        StartTag {
            name: Cow::Owned(name.to_owned()),
            attributes: Attributes::default(),
            self_closing: false,
            raw: None,
        }
    }

    /// The tag name with its original case preserved. Compare
    /// case-insensitively.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_cow(&self) -> Cow<'i, str> {
        self.name.clone()
    }

    #[inline]
    pub fn class(&self) -> ElementClass {
        ElementClass::of(&self.name)
    }

    #[inline]
    pub fn self_closing(&self) -> bool {
        self.self_closing
    }

    /// `true` when the element can't have content: either the tag used
    /// self-closing syntax or the name is a void element (`<br>`, `<hr>`,
    /// `<img>`, ...).
    #[inline]
    pub fn is_empty_element(&self) -> bool {
        self.self_closing || self.class().is_void()
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes<'i> {
        &self.attributes
    }

    #[inline]
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeNameError> {
        self.attributes.set_attribute(name, value)?;
        self.raw = None;

        Ok(())
    }

    pub(crate) fn push_attribute(&mut self, attribute: Attribute<'i>) {
        self.attributes.push(attribute);
        self.raw = None;
    }

    #[inline]
    pub fn remove_attribute(&mut self, name: &str) {
        if self.attributes.remove_attribute(name) {
            self.raw = None;
        }
    }
}

impl Serialize for StartTag<'_> {
    #[inline]
    fn raw(&self) -> Option<&str> {
        self.raw
    }

    fn serialize_from_parts(&self, handler: &mut dyn FnMut(&str)) {
        handler("<");
        handler(&self.name);

        for attribute in self.attributes.iter() {
            handler(" ");
            attribute.serialize(handler);
        }

        if self.self_closing {
            handler("/>");
        } else {
            handler(">");
        }
    }
}

impl Debug for StartTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartTag")
            .field("name", &self.name())
            .field("attributes", &self.attributes)
            .field("self_closing", &self.self_closing)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::StartTag;
    use crate::tokenize;
    use crate::tokens::{Serialize, Token};

    fn parse(html: &str) -> StartTag<'_> {
        let stream = tokenize(html);
        let Some(Token::StartTag(tag)) = stream.current() else {
            panic!("expected a start tag");
        };

        tag.clone()
    }

    #[test]
    fn set_attribute_drops_the_raw_slice() {
        let mut tag = parse("<a href='/x' data-n=1>");

        tag.set_attribute("class", "more").unwrap();

        // Untouched attributes keep their source quoting; only the tag
        // itself and the new attribute are re-rendered.
        assert_eq!(tag.to_html(), "<a href='/x' data-n=1 class=\"more\">");
    }

    #[test]
    fn set_attribute_replaces_case_insensitively() {
        let mut tag = parse("<a HREF='/x'>");

        tag.set_attribute("href", "/y").unwrap();

        assert_eq!(tag.to_html(), "<a HREF=\"/y\">");
    }

    #[test]
    fn remove_attribute_drops_the_raw_slice() {
        let mut tag = parse("<a href='/x' class=old>");

        tag.remove_attribute("CLASS");

        assert_eq!(tag.to_html(), "<a href='/x'>");
    }

    #[test]
    fn removing_a_missing_attribute_keeps_raw() {
        let mut tag = parse("<a  href = '/x' >");

        tag.remove_attribute("class");

        assert_eq!(tag.to_html(), "<a  href = '/x' >");
    }
}
