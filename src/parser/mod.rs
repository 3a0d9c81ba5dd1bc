mod comment;
mod open_tag_stack;
mod tag_scanner;

pub use self::comment::CommentRecord;
pub use self::open_tag_stack::OpenTagStack;
pub use self::tag_scanner::TagScanner;
