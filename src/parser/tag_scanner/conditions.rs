use super::TagScanner;
use crate::html::{is_raw_text_element, is_void_element};

pub const TAG_OPEN: char = '<';
pub const TAG_CLOSE: char = '>';
pub const END_TAG_MARKER: char = '/';
pub const SELF_CLOSING_MARKER: char = '/';
pub const MARKUP_DECLARATION_MARKER: char = '!';

/// Number of characters handed back when `<!` turns out to open a comment:
/// the `<`, the `!` and the character that ruled out a doctype.
pub const COMMENT_OPEN_LOOKBEHIND: usize = 3;

#[inline]
pub fn is_tag_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-'
}

#[inline]
pub fn is_doctype_marker(ch: char) -> bool {
    ch.eq_ignore_ascii_case(&'d')
}

impl TagScanner {
    #[inline]
    pub(super) fn is_void_element(&self) -> bool {
        is_void_element(self.tag_name_hash)
    }

    #[inline]
    pub(super) fn is_raw_text_element(&self) -> bool {
        is_raw_text_element(self.tag_name_hash)
    }

    /// Whether the end tag name read so far closes the innermost open
    /// element.
    #[inline]
    pub(super) fn is_appropriate_end_tag(&self) -> bool {
        self.open_tags
            .current()
            .is_some_and(|open_tag| open_tag.name.eq_ignore_ascii_case(&self.tag_name))
    }
}
