use super::state::State;
use super::TagScanner;
use crate::base::Position;
use crate::errors::{Defect, DefectKind};
use crate::html::TagNameHash;
use crate::parser::CommentRecord;
use std::mem;

impl TagScanner {
    #[inline]
    pub(super) fn switch_state(&mut self, state: State) {
        trace!(@state state);

        self.state = state;
    }

    #[inline]
    pub(super) fn start_tag(&mut self, pos: Position) {
        self.tag_start = pos;
        self.clear_tag_name();
    }

    #[inline]
    pub(super) fn append_to_tag_name(&mut self, ch: char) {
        self.tag_name.push(ch);
        self.tag_name_hash.update(ch);
    }

    #[inline]
    pub(super) fn clear_tag_name(&mut self) {
        self.tag_name.clear();
        self.tag_name_hash = TagNameHash::new();
    }

    #[inline]
    pub(super) fn take_tag_name(&mut self) -> String {
        self.tag_name_hash = TagNameHash::new();

        mem::take(&mut self.tag_name)
    }

    pub(super) fn push_open_tag(&mut self) {
        let name = self.take_tag_name();

        self.open_tags.push(name, self.tag_start);
    }

    /// Discharges the innermost open element with the end tag that has just
    /// been read. The element is popped even if the names disagree.
    pub(super) fn pop_open_tag(&mut self) -> Result<(), Defect> {
        let end_tag_name = self.take_tag_name();

        match self.open_tags.pop() {
            Some(open_tag) if open_tag.name.eq_ignore_ascii_case(&end_tag_name) => Ok(()),
            Some(open_tag) => Err(open_tag.into_unclosed_defect()),
            None => Err(Defect::new(
                DefectKind::UnexpectedEndTag,
                end_tag_name,
                self.tag_start,
            )),
        }
    }

    /// Returns `true` once the comment has been terminated.
    pub(super) fn append_to_comment(&mut self, ch: char, pos: Position) -> bool {
        let comment = self.comment.get_or_insert_with(|| CommentRecord::new(pos));

        comment.push(ch);

        if comment.is_terminated() {
            self.comment = None;

            true
        } else {
            false
        }
    }
}
