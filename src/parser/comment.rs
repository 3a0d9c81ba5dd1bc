use crate::base::Position;
use crate::errors::{Defect, DefectKind};

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// A comment that has been opened but not yet terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub content: String,
    pub position: Position,
}

impl CommentRecord {
    #[inline]
    pub fn new(position: Position) -> Self {
        CommentRecord {
            content: String::new(),
            position,
        }
    }

    #[inline]
    pub fn push(&mut self, ch: char) {
        self.content.push(ch);
    }

    /// Whether the content is `<!--`, followed by anything, followed by
    /// `-->`.
    ///
    /// The check only looks at the end of the content, which is enough as
    /// it runs after every appended character: the first `-->` found
    /// terminates the comment.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.content.len() >= COMMENT_START.len() + COMMENT_END.len()
            && self.content.starts_with(COMMENT_START)
            && self.content.ends_with(COMMENT_END)
    }

    #[inline]
    pub fn into_unterminated_defect(self) -> Defect {
        Defect::new(DefectKind::UnterminatedComment, "comment", self.position)
    }
}
