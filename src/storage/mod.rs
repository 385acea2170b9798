use crate::{domain::Board, error::Result};
use async_trait::async_trait;

pub mod file_storage;

/// Storage backend for board state.
///
/// A backend keeps at most one board under a single well-known key.
/// Loading when nothing was saved yields an empty board, and callers only
/// ever hand a backend a fully reconciled board value.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the saved board, or an empty board when none exists
    async fn load_board(&self) -> Result<Board>;

    /// Saves the board, replacing any previous state
    async fn save_board(&self, board: &Board) -> Result<()>;

    /// Removes any saved state
    async fn clear_board(&self) -> Result<()>;
}
