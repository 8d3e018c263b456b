mod auto_paragraphs;
mod more;
mod summarize;

pub use self::auto_paragraphs::{auto_paragraphs, AutoParagraphFormatter};
pub use self::more::{compose_more, AnchorSpec, MoreComposer};
pub use self::summarize::{summarize, StructuralSummarizer};

/// The marker appended to text truncated by the summarizer. Serialized
/// literally; never counted as a word.
pub(crate) const ELLIPSIS: &str = "&hellip;";
