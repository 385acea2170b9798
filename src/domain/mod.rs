pub mod board;
pub mod card;
pub mod drag;
pub mod list;

pub use board::Board;
pub use card::{Card, CardId};
pub use drag::{DragEnd, DragItem};
pub use list::{List, ListId};
