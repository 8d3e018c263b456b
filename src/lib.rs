//! HTML-aware prose transforms.
//!
//! The crate operates on a markup token stream rather than on raw strings,
//! which is what lets every transform emit well-formed markup for arbitrary
//! input while respecting block boundaries, verbatim subtrees and comments:
//!
//! - [`auto_paragraphs`]: wraps runs of bare text and inline content in
//!   `<p>…</p>`, converting blank lines into paragraph breaks and single
//!   newlines into `<br>`.
//! - [`summarize`]: truncates content to a word and top-level paragraph
//!   budget, closing every still-open tag so the result is always balanced.
//! - [`compose_more`]: the "read more" behavior: splits at an explicit
//!   `<!--more-->` marker, or summarizes and splices a link into the
//!   truncated tree at the exact cut point.
//!
//! The tokenizer is lenient by design: it never fails and never validates.
//! Malformed markup flows through and the transforms recover (unmatched end
//! tags are tolerated, truncation drains the open-tag stack). None of this
//! is a sanitizer; content is trusted.
//!
//! # Example
//!
//! ```rust
//! use prose_html::{auto_paragraphs, summarize};
//!
//! assert_eq!(auto_paragraphs("one\n\ntwo"), "<p>one</p><p>two</p>");
//! assert_eq!(
//!     summarize("<p>alpha beta gamma</p>", 2, 1),
//!     "<p>alpha beta&hellip;</p>"
//! );
//! ```

#[macro_use]
mod debug_trace;

mod errors;
mod stream;
mod tokenizer;
mod tokens;
mod transform;

pub mod html;

pub use self::errors::{AttributeNameError, CommentTextError};
pub use self::stream::{StreamPos, TokenStream};
pub use self::tokenizer::tokenize;
pub use self::tokens::{
    Attribute, Attributes, Comment, EndTag, RawContent, Serialize, StartTag, Text, Token,
};
pub use self::transform::{
    auto_paragraphs, compose_more, summarize, AnchorSpec, AutoParagraphFormatter, MoreComposer,
    StructuralSummarizer,
};
