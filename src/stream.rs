use crate::tokens::{Serialize, Token};

/// An opaque, stable key addressing one cursor slot of a [`TokenStream`].
///
/// Positions are only meaningful for the stream that produced them.
/// Splicing reassigns the slots of tokens *after* the insertion point;
/// positions at or before it stay valid.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub struct StreamPos(usize);

/// A position-addressable sequence of [`Token`]s with a single cursor.
///
/// Produced by [`tokenize`](crate::tokenize) and consumed exactly once per
/// transform invocation; a transform that needs a second pass rewinds
/// explicitly. The cursor is not safe to share; each call owns its stream
/// for the duration.
#[derive(Debug, Default)]
pub struct TokenStream<'i> {
    tokens: Vec<Token<'i>>,
    cursor: usize,
}

impl<'i> TokenStream<'i> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_tokens(tokens: Vec<Token<'i>>) -> Self {
        TokenStream { tokens, cursor: 0 }
    }

    /// The token under the cursor, or `None` once the stream is exhausted.
    #[inline]
    pub fn current(&self) -> Option<&Token<'i>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor and returns the next token.
    #[inline]
    pub fn next(&mut self) -> Option<&Token<'i>> {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }

        self.current()
    }

    /// Resets the cursor to the first token.
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the last token and returns it.
    pub fn end(&mut self) -> Option<&Token<'i>> {
        self.cursor = self.tokens.len().saturating_sub(1);

        self.current()
    }

    #[inline]
    pub fn position(&self) -> StreamPos {
        StreamPos(self.cursor)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Appends a token. Used when a transform builds an output stream.
    #[inline]
    pub fn push(&mut self, token: Token<'i>) {
        self.tokens.push(token);
    }

    /// Inserts all tokens of `other`, in order, immediately before the
    /// token addressed by `at`. Tokens before `at` keep their positions.
    pub fn splice(&mut self, other: TokenStream<'i>, at: StreamPos) {
        let at = at.0.min(self.tokens.len());

        self.tokens.splice(at..at, other.tokens);
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'i>> {
        self.tokens.iter()
    }

    /// Serializes the whole token sequence back to markup text. Exactly
    /// reverses tokenization for unmodified tokens.
    #[inline]
    pub fn to_html(&self) -> String {
        self.tokens.as_slice().to_html()
    }
}

#[cfg(test)]
mod tests {
    use crate::tokenize;

    #[test]
    fn cursor_contract() {
        let mut stream = tokenize("<p>one</p>");

        assert_eq!(stream.len(), 3);
        assert!(!stream.is_at_end());

        let first = stream.position();

        stream.next();
        stream.next();
        assert_ne!(stream.position(), first);
        assert!(stream.current().is_some());

        assert!(stream.next().is_none());
        assert!(stream.is_at_end());
        // Advancing past the end stays at the end marker.
        assert!(stream.next().is_none());

        stream.rewind();
        assert_eq!(stream.position(), first);
    }

    #[test]
    fn end_addresses_last_token() {
        let mut stream = tokenize("a<b>c</b>");

        let last = stream.end().map(|t| format!("{t:?}"));

        assert!(last.unwrap().contains("EndTag"));
        assert!(!stream.is_at_end());
    }

    #[test]
    fn splice_inserts_before_position() {
        let mut stream = tokenize("<p>start &hellip;</p>");
        let link = tokenize("<a href=\"/x\">more</a>");

        stream.end();
        let at = stream.position();
        stream.splice(link, at);

        assert_eq!(
            stream.to_html(),
            "<p>start &hellip;<a href=\"/x\">more</a></p>"
        );
    }

    #[test]
    fn splice_into_empty_stream() {
        let mut stream = tokenize("");
        let link = tokenize("<a>x</a>");

        let at = stream.position();
        stream.splice(link, at);

        assert_eq!(stream.to_html(), "<a>x</a>");
    }

    #[test]
    fn round_trip_preserves_raw_markup() {
        let html = "<DIV class='a'  data-x=1><!-- c --><br/>text &amp; more</div>";

        assert_eq!(tokenize(html).to_html(), html);
    }
}
