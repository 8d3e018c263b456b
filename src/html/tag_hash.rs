//! Tag names that matter to the transforms are ASCII alphas plus the digits
//! 1-6 (for `<h1>` - `<h6>`), i.e. 32 distinct characters once case is
//! folded. Each character therefore fits in 5 bits and a 64-bit integer
//! holds up to 12 of them, which covers every name in the block, verbatim
//! and void element sets. Packing names this way turns the per-token set
//! membership checks into integer comparisons instead of string
//! comparisons.
//!
//! Digits get the codes 0-5 and alphas the codes 6-31. Putting alphas first
//! would make runs of `a` ambiguous with the empty name (all-zero hash);
//! digits can't start a tag name, so giving them the low codes avoids the
//! ambiguity.

use super::Tag;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub struct TagHash(Option<u64>);

impl TagHash {
    #[inline]
    pub const fn new() -> Self {
        TagHash(Some(0))
    }

    /// A hash that compares equal to no tag. Produced for names that are
    /// too long or contain characters outside the packable set.
    #[inline]
    pub const fn empty() -> Self {
        TagHash(None)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn update(&mut self, ch: u8) {
        if let Some(h) = self.0 {
            // Out of room for another 5 bits means the name is a long
            // non-standard one and the hash is invalidated. `1` (code 0)
            // can't start a tag name, so leading zero bits are unambiguous.
            self.0 = if h >> (64 - 5) == 0 {
                match ch {
                    // The 0x1F mask folds case and maps the alpha to 1-26;
                    // shifting by the 6 reserved digit codes yields 6-31.
                    b'a'..=b'z' | b'A'..=b'Z' => Some((h << 5) | ((u64::from(ch) & 0x1F) + 5)),
                    // The 0x0F mask maps '1'-'6' to 1-6; made zero-based.
                    b'1'..=b'6' => Some((h << 5) | ((u64::from(ch) & 0x0F) - 1)),
                    _ => None,
                }
            } else {
                None
            };
        }
    }
}

impl From<&str> for TagHash {
    #[inline]
    fn from(name: &str) -> Self {
        let mut hash = TagHash::new();

        for ch in name.bytes() {
            hash.update(ch);
        }

        hash
    }
}

impl PartialEq<Tag> for TagHash {
    #[inline]
    fn eq(&self, tag: &Tag) -> bool {
        match self.0 {
            Some(h) => *tag as u64 == h,
            None => false,
        }
    }
}
