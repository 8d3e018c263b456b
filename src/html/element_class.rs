use super::{Tag, TagHash};
use bitflags::bitflags;

/// Elements whose content must never be paragraph-wrapped: their whole
/// subtree is copied through verbatim.
const VERBATIM_ELEMENTS: &[Tag] = &[
    Tag::Pre,
    Tag::Code,
    Tag::Ul,
    Tag::Ol,
    Tag::Li,
    Tag::Table,
    Tag::H1,
    Tag::H2,
    Tag::H3,
    Tag::H4,
    Tag::H5,
    Tag::H6,
    Tag::I,
    Tag::B,
    Tag::Em,
    Tag::Strong,
];

/// Elements treated as paragraph-breaking.
const BLOCK_ELEMENTS: &[Tag] = &[
    Tag::Address,
    Tag::Blockquote,
    Tag::Center,
    Tag::Dir,
    Tag::Div,
    Tag::Dl,
    Tag::Fieldset,
    Tag::Form,
    Tag::H1,
    Tag::H2,
    Tag::H3,
    Tag::H4,
    Tag::H5,
    Tag::H6,
    Tag::Hr,
    Tag::Isindex,
    Tag::Menu,
    Tag::Noframes,
    Tag::Noscript,
    Tag::Ol,
    Tag::P,
    Tag::Pre,
    Tag::Table,
    Tag::Ul,
];

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[Tag] = &[
    Tag::Area,
    Tag::Base,
    Tag::Br,
    Tag::Col,
    Tag::Embed,
    Tag::Hr,
    Tag::Img,
    Tag::Input,
    Tag::Link,
    Tag::Meta,
    Tag::Param,
    Tag::Source,
    Tag::Track,
    Tag::Wbr,
];

bitflags! {
    /// The transform-relevant classification of an element name.
    ///
    /// Membership checks are case-insensitive and cost one tag name hash
    /// plus a handful of integer comparisons.
    #[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
    pub struct ElementClass: u8 {
        const BLOCK = 1;
        const VERBATIM = 1 << 1;
        const VOID = 1 << 2;
    }
}

impl ElementClass {
    pub fn of(name: &str) -> Self {
        let hash = TagHash::from(name);
        let mut class = Self::empty();

        if hash.is_empty() {
            return class;
        }

        if BLOCK_ELEMENTS.iter().any(|t| hash == *t) {
            class |= Self::BLOCK;
        }

        if VERBATIM_ELEMENTS.iter().any(|t| hash == *t) {
            class |= Self::VERBATIM;
        }

        if VOID_ELEMENTS.iter().any(|t| hash == *t) {
            class |= Self::VOID;
        }

        class
    }

    #[inline]
    pub fn is_block(self) -> bool {
        self.contains(Self::BLOCK)
    }

    #[inline]
    pub fn is_verbatim(self) -> bool {
        self.contains(Self::VERBATIM)
    }

    #[inline]
    pub fn is_void(self) -> bool {
        self.contains(Self::VOID)
    }
}
