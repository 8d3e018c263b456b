use super::Serialize;
use crate::errors::AttributeNameError;
use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::ops::Deref;

/// A single attribute of a start tag.
///
/// Order and quoting from the source are preserved: an attribute parsed
/// from text keeps its raw slice and serializes to it unchanged, whatever
/// the original quoting style was. Synthesized and mutated attributes are
/// rendered double-quoted with `"` escaped in the value.
#[derive(Clone)]
pub struct Attribute<'i> {
    name: Cow<'i, str>,
    value: Cow<'i, str>,
    raw: Option<&'i str>,
}

impl<'i> Attribute<'i> {
    pub(crate) fn new(name: Cow<'i, str>, value: Cow<'i, str>, raw: Option<&'i str>) -> Self {
        Attribute { name, value, raw }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn validated_name(name: &str) -> Result<Cow<'static, str>, AttributeNameError> {
        if name.is_empty() {
            return Err(AttributeNameError::EmptyName);
        }

        if let Some(ch) = name
            .chars()
            .find(|&ch| ch.is_ascii_whitespace() || "=\"'<>/".contains(ch))
        {
            return Err(AttributeNameError::ForbiddenCharacter(ch));
        }

        Ok(Cow::Owned(name.to_owned()))
    }
}

impl Serialize for Attribute<'_> {
    #[inline]
    fn raw(&self) -> Option<&str> {
        self.raw
    }

    fn serialize_from_parts(&self, handler: &mut dyn FnMut(&str)) {
        handler(&self.name);
        handler("=\"");

        let mut rest = self.value.as_ref();

        while let Some(quote) = rest.find('"') {
            handler(&rest[..quote]);
            handler("&quot;");
            rest = &rest[quote + 1..];
        }

        handler(rest);
        handler("\"");
    }
}

impl Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

/// The ordered attribute list of a start tag.
#[derive(Clone, Default)]
pub struct Attributes<'i>(Vec<Attribute<'i>>);

impl<'i> Attributes<'i> {
    pub(crate) fn new(attributes: Vec<Attribute<'i>>) -> Self {
        Attributes(attributes)
    }

    /// Updates the value of the attribute named `name` (matched
    /// case-insensitively) or appends a new attribute.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeNameError> {
        let validated = Attribute::validated_name(name)?;
        let value = Cow::Owned(value.to_owned());

        match self
            .0
            .iter_mut()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
        {
            Some(attr) => {
                attr.value = value;
                attr.raw = None;
            }
            None => self.0.push(Attribute::new(validated, value, None)),
        }

        Ok(())
    }

    // For building synthesized tags where the caller controls the names.
    pub(crate) fn push(&mut self, attribute: Attribute<'i>) {
        self.0.push(attribute);
    }

    /// Removes the attribute named `name`; returns whether it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.0.len();

        self.0.retain(|attr| !attr.name.eq_ignore_ascii_case(name));

        before != self.0.len()
    }
}

impl<'i> Deref for Attributes<'i> {
    type Target = [Attribute<'i>];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for Attributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
