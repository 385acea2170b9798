use crate::{domain::Board, error::Result, storage::Storage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// File-based storage keeping the whole board as one JSON document
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const TESSERA_DIR: &'static str = ".tessera";
    const BOARD_FILE: &'static str = "board.json";

    /// Creates a new FileStorage instance for the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::TESSERA_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load_board(&self) -> Result<Board> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Ok(Board::new());
        }

        let contents = fs::read_to_string(&board_file).await?;
        match serde_json::from_str(&contents) {
            Ok(board) => Ok(board),
            Err(err) => {
                // Unreadable state counts as no saved state
                warn!("discarding malformed board state: {err}");
                Ok(Board::new())
            }
        }
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(board)?;
        fs::write(self.board_file(), json).await?;

        debug!(lists = board.lists.len(), "board saved");
        Ok(())
    }

    async fn clear_board(&self) -> Result<()> {
        let board_file = self.board_file();

        if board_file.exists() {
            fs::remove_file(board_file).await?;
        }
        Ok(())
    }
}
