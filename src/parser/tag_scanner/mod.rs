mod actions;
mod conditions;
mod state;

use self::state::State;
use super::{CommentRecord, OpenTagStack};
use crate::base::{Input, Position};
use crate::errors::Defect;
use crate::html::TagNameHash;
use crate::Settings;

use self::conditions::TAG_OPEN;

pub enum ParsingLoopDirective {
    None,
    /// Hand the given number of already consumed characters back to the
    /// input, so they are fed to the next state again.
    Unconsume(usize),
}

pub type StateResult = Result<ParsingLoopDirective, Defect>;

// Tag scanner doesn't produce any tokens. It only tracks which elements are
// currently open and bails out on the first structural defect it encounters.
//
// All the scanning state is owned by the scanner and the scanner is consumed
// by `run`, so one instance never serves two documents.
pub struct TagScanner {
    settings: Settings,
    state: State,
    tag_name: String,
    tag_name_hash: TagNameHash,
    tag_start: Position,
    open_tags: OpenTagStack,
    comment: Option<CommentRecord>,
}

impl TagScanner {
    pub fn new(settings: Settings) -> Self {
        TagScanner {
            settings,
            state: State::Data,
            tag_name: String::new(),
            tag_name_hash: TagNameHash::new(),
            tag_start: Position::default(),
            open_tags: OpenTagStack::default(),
            comment: None,
        }
    }

    pub fn run(mut self, input: &mut Input<'_>) -> Result<(), Defect> {
        loop {
            if self.state.ignores_text() {
                input.skip_until(TAG_OPEN as u8);
            }

            let Some((ch, pos)) = input.consume_ch() else {
                break;
            };

            if let ParsingLoopDirective::Unconsume(count) = self.feed(ch, pos)? {
                input.unconsume_ch(count);
            }
        }

        self.finish()
    }

    fn feed(&mut self, ch: char, pos: Position) -> StateResult {
        match self.state {
            State::Data => self.data_state(ch, pos),
            State::TagName => self.tag_name_state(ch),
            State::SelfClosingSlash => self.self_closing_slash_state(ch),
            State::StartTagEnd { raw_text } => self.start_tag_end_state(ch, raw_text),
            State::EndTagOpen => self.end_tag_open_state(ch, pos),
            State::EndTagSlash => self.end_tag_slash_state(ch),
            State::EndTagName => self.end_tag_name_state(ch),
            State::RawTextEndTagOpen => self.raw_text_end_tag_open_state(ch, pos),
            State::RawTextEndTagSlash => self.raw_text_end_tag_slash_state(ch),
            State::RawTextEndTagName => self.raw_text_end_tag_name_state(ch),
            State::MarkupDeclarationOpen => self.markup_declaration_open_state(ch),
            State::Comment => self.comment_state(ch, pos),
        }
    }

    fn finish(mut self) -> Result<(), Defect> {
        if let Some(comment) = self.comment.take() {
            return Err(comment.into_unterminated_defect());
        }

        match self.open_tags.pop() {
            Some(open_tag) => Err(open_tag.into_unclosed_defect()),
            None => Ok(()),
        }
    }
}
