/// Location of a character in the validated text.
///
/// Both fields are 0-based. `column` counts characters (Unicode scalar
/// values), not bytes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}
