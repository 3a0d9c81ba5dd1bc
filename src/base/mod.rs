mod input;
mod position;

pub use self::input::Input;
pub use self::position::Position;
