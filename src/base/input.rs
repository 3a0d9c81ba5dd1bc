use super::Position;
use memchr::memchr;
use std::collections::VecDeque;
use std::str::Split;

/// The longest lookback any scanning state performs: `<!` plus the character
/// that disambiguates a comment from a doctype.
const MAX_UNCONSUMED_CHARS: usize = 3;

type PositionedChar = (char, Position);

/// Character cursor over a document split into `\n`-separated lines.
///
/// Line breaks themselves are never yielded. Consumed characters can be handed
/// back with [`Input::unconsume_ch`], in which case they are yielded again, with
/// their original positions, before the cursor moves further.
pub struct Input<'i> {
    lines: Split<'i, char>,
    line: &'i str,
    next_pos: Position,
    next_line_idx: usize,
    consumed: VecDeque<PositionedChar>,
    unconsumed: Vec<PositionedChar>,
}

impl<'i> Input<'i> {
    pub fn new(text: &'i str) -> Self {
        Input {
            lines: text.split('\n'),
            line: "",
            next_pos: Position::default(),
            next_line_idx: 0,
            consumed: VecDeque::with_capacity(MAX_UNCONSUMED_CHARS),
            unconsumed: Vec::with_capacity(MAX_UNCONSUMED_CHARS),
        }
    }

    pub fn consume_ch(&mut self) -> Option<PositionedChar> {
        let positioned = match self.unconsumed.pop() {
            Some(positioned) => positioned,
            None => self.next_from_lines()?,
        };

        if self.consumed.len() == MAX_UNCONSUMED_CHARS {
            self.consumed.pop_front();
        }

        self.consumed.push_back(positioned);

        trace!(@chars "consume", positioned.0);

        Some(positioned)
    }

    /// Hands the last `count` consumed characters back to the cursor.
    pub fn unconsume_ch(&mut self, count: usize) {
        debug_assert!(count <= MAX_UNCONSUMED_CHARS);

        for _ in 0..count {
            match self.consumed.pop_back() {
                Some(positioned) => self.unconsumed.push(positioned),
                None => break,
            }
        }

        trace!(@chars "unconsume");
    }

    /// Moves the cursor right before the next occurrence of the ASCII `byte`,
    /// or to the end of input if there is none.
    ///
    /// Characters handed back with [`Input::unconsume_ch`] are never skipped:
    /// if there are any the call does nothing.
    pub fn skip_until(&mut self, byte: u8) {
        debug_assert!(byte.is_ascii());

        if !self.unconsumed.is_empty() {
            return;
        }

        loop {
            if let Some(idx) = memchr(byte, self.line.as_bytes()) {
                if idx > 0 {
                    // NOTE: `byte` is ASCII, so `idx` is always a char boundary.
                    let (skipped, rest) = self.line.split_at(idx);

                    self.next_pos.column += skipped.chars().count();
                    self.line = rest;
                    self.consumed.clear();

                    trace!(@chars "skip");
                }

                return;
            }

            if !self.line.is_empty() {
                self.line = "";
                self.consumed.clear();
            }

            if !self.next_line() {
                return;
            }
        }
    }

    fn next_line(&mut self) -> bool {
        match self.lines.next() {
            Some(line) => {
                self.line = line;
                self.next_pos = Position::new(self.next_line_idx, 0);
                self.next_line_idx += 1;

                true
            }
            None => false,
        }
    }

    fn next_from_lines(&mut self) -> Option<PositionedChar> {
        loop {
            let mut chars = self.line.chars();

            if let Some(ch) = chars.next() {
                let pos = self.next_pos;

                self.line = chars.as_str();
                self.next_pos.column += 1;

                return Some((ch, pos));
            }

            if !self.next_line() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &mut Input<'_>) -> Vec<PositionedChar> {
        std::iter::from_fn(|| input.consume_ch()).collect()
    }

    #[test]
    fn positions_across_lines() {
        let mut input = Input::new("ab\n\nc");

        assert_eq!(
            collect(&mut input),
            vec![
                ('a', Position::new(0, 0)),
                ('b', Position::new(0, 1)),
                ('c', Position::new(2, 0)),
            ]
        );
    }

    #[test]
    fn columns_count_chars_not_bytes() {
        let mut input = Input::new("ø<");

        assert_eq!(
            collect(&mut input),
            vec![('ø', Position::new(0, 0)), ('<', Position::new(0, 1))]
        );
    }

    #[test]
    fn unconsume_replays_chars_in_order() {
        let mut input = Input::new("<!-x");

        for _ in 0..3 {
            input.consume_ch();
        }

        input.unconsume_ch(3);

        assert_eq!(
            collect(&mut input),
            vec![
                ('<', Position::new(0, 0)),
                ('!', Position::new(0, 1)),
                ('-', Position::new(0, 2)),
                ('x', Position::new(0, 3)),
            ]
        );
    }

    #[test]
    fn unconsume_across_line_break() {
        let mut input = Input::new("<!\n-");

        for _ in 0..3 {
            input.consume_ch();
        }

        input.unconsume_ch(3);

        assert_eq!(input.consume_ch(), Some(('<', Position::new(0, 0))));
        assert_eq!(input.consume_ch(), Some(('!', Position::new(0, 1))));
        assert_eq!(input.consume_ch(), Some(('-', Position::new(1, 0))));
        assert_eq!(input.consume_ch(), None);
    }

    #[test]
    fn unconsume_is_bounded_by_history() {
        let mut input = Input::new("abcde");

        for _ in 0..5 {
            input.consume_ch();
        }

        input.unconsume_ch(3);

        assert_eq!(input.consume_ch(), Some(('c', Position::new(0, 2))));
    }

    #[test]
    fn skip_until_tag_open() {
        let mut input = Input::new("héllo\nworld <a>");

        input.skip_until(b'<');

        assert_eq!(input.consume_ch(), Some(('<', Position::new(1, 6))));
        assert_eq!(input.consume_ch(), Some(('a', Position::new(1, 7))));
    }

    #[test]
    fn skip_until_without_match_exhausts_input() {
        let mut input = Input::new("no\ntags\nhere");

        input.skip_until(b'<');

        assert_eq!(input.consume_ch(), None);
    }

    #[test]
    fn skip_until_keeps_unconsumed_chars() {
        let mut input = Input::new("ab<");

        input.consume_ch();
        input.unconsume_ch(1);
        input.skip_until(b'<');

        assert_eq!(input.consume_ch(), Some(('a', Position::new(0, 0))));
    }
}
