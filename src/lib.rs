//! # Tessera Core
//!
//! Core board state and reconciliation logic for Tessera kanban boards.
//!
//! This crate provides the board, list, and card types together with the
//! pure reconciliation operations that turn drag gestures and edit intents
//! into new board values, without any dependency on specific UI
//! implementations or storage backends.

pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::Board,
    card::{Card, CardId},
    drag::{DragEnd, DragItem},
    list::{List, ListId},
};
pub use error::{Result, TesseraError};
pub use storage::Storage;
pub use store::BoardStore;
