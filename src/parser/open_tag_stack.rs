use crate::base::Position;
use crate::errors::{Defect, DefectKind};

/// An element whose start tag has been read and which waits for its end tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub name: String,
    pub position: Position,
}

impl TagRecord {
    #[inline]
    pub fn into_unclosed_defect(self) -> Defect {
        Defect::new(DefectKind::UnclosedTag, self.name, self.position)
    }
}

/// Chain of currently open elements, outermost first.
///
/// Only the innermost element is ever inspected or removed.
#[derive(Debug, Default)]
pub struct OpenTagStack(Vec<TagRecord>);

impl OpenTagStack {
    #[inline]
    pub fn push(&mut self, name: String, position: Position) {
        trace!(@stack "push", &name, self.0.len() + 1);

        self.0.push(TagRecord { name, position });
    }

    #[inline]
    pub fn pop(&mut self) -> Option<TagRecord> {
        let open_tag = self.0.pop();

        trace!(@stack "pop", open_tag.as_ref().map_or("", |t| t.name.as_str()), self.0.len());

        open_tag
    }

    #[inline]
    pub fn current(&self) -> Option<&TagRecord> {
        self.0.last()
    }
}
