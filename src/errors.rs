//! Error types returned by the validator.

use crate::base::Position;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The kind of structural defect found in a document.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DefectKind {
    /// A start tag was never closed, or the closing tag that discharged it
    /// has a different name. Reported for the innermost open element.
    UnclosedTag,
    /// The input ended inside a comment.
    UnterminatedComment,
    /// A void element was written without the self-closing slash while
    /// [`strict_self_closing_tags`] was enabled.
    ///
    /// [`strict_self_closing_tags`]: crate::Settings::strict_self_closing_tags
    MissingSelfClosingSlash,
    /// A closing tag was found while no element was open.
    UnexpectedEndTag,
}

impl Display for DefectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DefectKind::UnclosedTag => "Ending tag not found",
            DefectKind::UnterminatedComment => "Comment ending not found",
            DefectKind::MissingSelfClosingSlash => "Ending `/` not found",
            DefectKind::UnexpectedEndTag => "Starting tag not found",
        })
    }
}

/// The first structural defect of a document.
///
/// `line` is 1-based, `column` is the 0-based index of the character within
/// its line. Both point at the `<` that starts the offending tag or comment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} for: `{name}` at line: {line} char: {column}")]
pub struct Defect {
    pub kind: DefectKind,
    /// Name of the offending tag as written in the source, or `comment` for
    /// unterminated comments.
    pub name: String,
    pub line: usize,
    pub column: usize,
}

impl Defect {
    pub(crate) fn new(kind: DefectKind, name: impl Into<String>, position: Position) -> Self {
        Defect {
            kind,
            name: name.into(),
            line: position.line + 1,
            column: position.column,
        }
    }

    #[inline]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// An error that occurred while validating raw bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown character encoding has been provided: `{0}`.")]
    UnknownEncoding(String),

    #[error(transparent)]
    Defect(#[from] Defect),
}
