use super::conditions::*;
use super::{ParsingLoopDirective, StateResult, TagScanner};
use crate::base::Position;
use crate::errors::{Defect, DefectKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// Text outside of any tag, waiting for `<`.
    Data,
    TagName,
    /// Strict mode only: a void element name has been read and its `/` is due.
    SelfClosingSlash,
    StartTagEnd { raw_text: bool },
    /// Content of an open element, waiting for `<`.
    EndTagOpen,
    EndTagSlash,
    EndTagName,
    RawTextEndTagOpen,
    RawTextEndTagSlash,
    RawTextEndTagName,
    /// `<!` has been consumed: either a comment or a doctype follows.
    MarkupDeclarationOpen,
    Comment,
}

impl State {
    /// States that drop every character except `<`.
    #[inline]
    pub fn ignores_text(self) -> bool {
        matches!(
            self,
            State::Data | State::EndTagOpen | State::RawTextEndTagOpen
        )
    }
}

impl TagScanner {
    pub(super) fn data_state(&mut self, ch: char, pos: Position) -> StateResult {
        if ch == TAG_OPEN {
            self.start_tag(pos);
            self.switch_state(State::TagName);
        }

        Ok(ParsingLoopDirective::None)
    }

    pub(super) fn tag_name_state(&mut self, ch: char) -> StateResult {
        if is_tag_name_char(ch) {
            self.append_to_tag_name(ch);

            return Ok(ParsingLoopDirective::None);
        }

        Ok(match ch {
            END_TAG_MARKER if self.tag_name.is_empty() => {
                self.switch_state(State::EndTagName);
                ParsingLoopDirective::None
            }
            SELF_CLOSING_MARKER if self.is_void_element() => {
                self.clear_tag_name();
                self.switch_state(State::EndTagOpen);
                ParsingLoopDirective::None
            }
            MARKUP_DECLARATION_MARKER => {
                self.clear_tag_name();
                self.switch_state(State::MarkupDeclarationOpen);
                ParsingLoopDirective::None
            }
            _ if self.is_void_element() => {
                if self.settings.strict_self_closing_tags {
                    self.switch_state(State::SelfClosingSlash);
                    ParsingLoopDirective::Unconsume(1)
                } else {
                    self.clear_tag_name();
                    self.switch_state(State::Data);
                    ParsingLoopDirective::None
                }
            }
            // NOTE: the name can be empty here, e.g. for `1 < 2` in text.
            // Such an element is opened like any other and can't be closed.
            _ => {
                let raw_text = self.is_raw_text_element();

                self.push_open_tag();
                self.switch_state(State::StartTagEnd { raw_text });
                ParsingLoopDirective::Unconsume(1)
            }
        })
    }

    pub(super) fn self_closing_slash_state(&mut self, ch: char) -> StateResult {
        match ch {
            SELF_CLOSING_MARKER => {
                self.clear_tag_name();
                self.switch_state(State::EndTagOpen);
            }
            TAG_CLOSE => {
                return Err(Defect::new(
                    DefectKind::MissingSelfClosingSlash,
                    self.take_tag_name(),
                    self.tag_start,
                ));
            }
            _ => (),
        }

        Ok(ParsingLoopDirective::None)
    }

    pub(super) fn start_tag_end_state(&mut self, ch: char, raw_text: bool) -> StateResult {
        if ch == TAG_CLOSE {
            self.switch_state(if raw_text {
                State::RawTextEndTagOpen
            } else {
                State::EndTagOpen
            });
        }

        Ok(ParsingLoopDirective::None)
    }

    pub(super) fn end_tag_open_state(&mut self, ch: char, pos: Position) -> StateResult {
        if ch == TAG_OPEN {
            self.start_tag(pos);
            self.switch_state(State::EndTagSlash);
        }

        Ok(ParsingLoopDirective::None)
    }

    pub(super) fn end_tag_slash_state(&mut self, ch: char) -> StateResult {
        Ok(if ch == END_TAG_MARKER {
            self.switch_state(State::EndTagName);
            ParsingLoopDirective::None
        } else {
            self.switch_state(State::TagName);
            ParsingLoopDirective::Unconsume(1)
        })
    }

    pub(super) fn end_tag_name_state(&mut self, ch: char) -> StateResult {
        if is_tag_name_char(ch) {
            self.append_to_tag_name(ch);
        } else {
            self.pop_open_tag()?;
            self.switch_state(State::Data);
        }

        Ok(ParsingLoopDirective::None)
    }

    pub(super) fn raw_text_end_tag_open_state(&mut self, ch: char, pos: Position) -> StateResult {
        if ch == TAG_OPEN {
            self.start_tag(pos);
            self.switch_state(State::RawTextEndTagSlash);
        }

        Ok(ParsingLoopDirective::None)
    }

    pub(super) fn raw_text_end_tag_slash_state(&mut self, ch: char) -> StateResult {
        Ok(if ch == END_TAG_MARKER {
            self.switch_state(State::RawTextEndTagName);
            ParsingLoopDirective::None
        } else {
            self.switch_state(State::RawTextEndTagOpen);
            ParsingLoopDirective::Unconsume(1)
        })
    }

    pub(super) fn raw_text_end_tag_name_state(&mut self, ch: char) -> StateResult {
        if is_tag_name_char(ch) {
            self.append_to_tag_name(ch);

            return Ok(ParsingLoopDirective::None);
        }

        Ok(if self.is_appropriate_end_tag() {
            self.pop_open_tag()?;
            self.switch_state(State::Data);
            ParsingLoopDirective::None
        } else {
            // NOTE: end tags of other elements are part of the raw text.
            self.clear_tag_name();
            self.switch_state(State::RawTextEndTagOpen);
            ParsingLoopDirective::Unconsume(1)
        })
    }

    pub(super) fn markup_declaration_open_state(&mut self, ch: char) -> StateResult {
        self.clear_tag_name();

        Ok(if is_doctype_marker(ch) {
            self.switch_state(State::Data);
            ParsingLoopDirective::None
        } else {
            self.switch_state(State::Comment);
            ParsingLoopDirective::Unconsume(COMMENT_OPEN_LOOKBEHIND)
        })
    }

    pub(super) fn comment_state(&mut self, ch: char, pos: Position) -> StateResult {
        if self.append_to_comment(ch, pos) {
            self.switch_state(State::Data);
        }

        Ok(ParsingLoopDirective::None)
    }
}
