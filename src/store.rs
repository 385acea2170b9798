use crate::{
    domain::{Board, Card, CardId, DragEnd, ListId},
    error::Result,
    storage::Storage,
};
use tracing::debug;

/// Top-level controller owning the live board and its persistence backend.
///
/// Mutations are applied strictly in call order against the latest board
/// value; the post-image is persisted before the call returns. Calls that
/// cannot change the board never write. Each mutating method reports
/// whether the board actually changed.
pub struct BoardStore<S: Storage> {
    board: Board,
    storage: S,
}

impl<S: Storage> BoardStore<S> {
    /// Loads the saved board, falling back to an empty one
    pub async fn open(storage: S) -> Result<Self> {
        let board = storage.load_board().await?;
        Ok(Self { board, storage })
    }

    /// The current board value
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Applies a completed drag gesture
    pub async fn on_drag_end(&mut self, drag: &DragEnd) -> Result<bool> {
        if drag.is_noop() {
            debug!("drag ended where it started, nothing to reconcile");
            return Ok(false);
        }
        let next = self.board.apply_drag(drag);
        self.commit(next).await
    }

    pub async fn add_list(&mut self, title: &str) -> Result<bool> {
        let next = self.board.add_list(title);
        self.commit(next).await
    }

    pub async fn delete_list(&mut self, id: &ListId) -> Result<bool> {
        let next = self.board.delete_list(id);
        self.commit(next).await
    }

    pub async fn update_list_title(&mut self, id: &ListId, title: &str) -> Result<bool> {
        let next = self.board.update_list_title(id, title);
        self.commit(next).await
    }

    pub async fn add_card(&mut self, list_id: &ListId) -> Result<bool> {
        let next = self.board.add_card(list_id);
        self.commit(next).await
    }

    pub async fn add_card_titled(&mut self, list_id: &ListId, title: &str) -> Result<bool> {
        let next = self.board.add_card_titled(list_id, title);
        self.commit(next).await
    }

    pub async fn update_card(&mut self, card: Card) -> Result<bool> {
        let next = self.board.update_card(card);
        self.commit(next).await
    }

    pub async fn delete_card(&mut self, id: &CardId) -> Result<bool> {
        let next = self.board.delete_card(id);
        self.commit(next).await
    }

    /// Empties the board and removes the saved state
    pub async fn reset(&mut self) -> Result<()> {
        self.board = Board::new();
        self.storage.clear_board().await
    }

    async fn commit(&mut self, next: Board) -> Result<bool> {
        if next == self.board {
            return Ok(false);
        }
        self.board = next;
        self.storage.save_board(&self.board).await?;
        Ok(true)
    }
}
