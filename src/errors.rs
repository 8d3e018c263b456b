use thiserror::Error;

/// An error that occurs when an invalid value is provided for an attribute
/// name.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum AttributeNameError {
    /// The provided value is an empty string.
    #[error("Attribute name can't be empty.")]
    EmptyName,
    /// The provided value contains a character that is forbidden in an
    /// attribute name (whitespace, `=`, `"`, `'`, `<`, `>`, `/`).
    #[error("{0:?} character is forbidden in the attribute name.")]
    ForbiddenCharacter(char),
}

/// An error that occurs when invalid text is provided for a comment body.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum CommentTextError {
    /// The provided value contains the comment closing sequence (`-->`).
    #[error("Comment text shouldn't contain comment closing sequence (`-->`).")]
    ClosingSequence,
}
