/// Serialization of a token back to markup text.
///
/// Tokens produced by the tokenizer keep a slice of the source text and
/// serialize to it byte-for-byte, so a tokenize/serialize round trip
/// preserves attribute order, attribute quoting and verbatim text exactly.
/// Mutated and synthesized tokens lose the raw slice and are rendered from
/// their parts.
pub trait Serialize {
    fn raw(&self) -> Option<&str>;
    fn serialize_from_parts(&self, handler: &mut dyn FnMut(&str));

    #[inline]
    fn serialize(&self, handler: &mut dyn FnMut(&str)) {
        match self.raw() {
            Some(raw) => handler(raw),
            None => self.serialize_from_parts(handler),
        }
    }

    #[inline]
    fn to_html(&self) -> String {
        let mut output = String::new();

        self.serialize(&mut |part| output.push_str(part));

        output
    }
}

impl<T: Serialize> Serialize for [T] {
    #[inline]
    fn raw(&self) -> Option<&str> {
        None
    }

    #[inline]
    fn serialize_from_parts(&self, handler: &mut dyn FnMut(&str)) {
        for item in self {
            item.serialize(handler);
        }
    }
}
