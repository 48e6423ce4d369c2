//! BoardService trait definition

use async_trait::async_trait;

use super::{Board, List, TrelloError};

/// Port to the remote board service
///
/// Everything the planners need from Trello, behind a trait so the planning
/// and execution logic can be exercised against an in-memory board in tests.
/// Implementations take logical list indices; translating an index into
/// Trello's floating-point `pos` sort key is the implementation's concern.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// All boards visible to the authenticated member
    async fn get_boards(&self) -> Result<Vec<Board>, TrelloError>;

    /// Lists on a board, sorted by position ascending
    async fn get_lists(&self, board_id: &str) -> Result<Vec<List>, TrelloError>;

    /// Create a list at the given logical index
    async fn create_list(&self, board_id: &str, name: &str, index: usize) -> Result<(), TrelloError>;

    /// Move an existing list to the given logical index
    async fn move_list(&self, list_id: &str, board_id: &str, index: usize) -> Result<(), TrelloError>;

    /// Rename a list
    async fn update_list_name(&self, list_id: &str, name: &str) -> Result<(), TrelloError>;

    /// Move every card from one list to another
    async fn move_all_cards(
        &self,
        from_list_id: &str,
        to_list_id: &str,
        to_board_id: &str,
    ) -> Result<(), TrelloError>;

    /// Archive (close) a list
    async fn archive_list(&self, list_id: &str) -> Result<(), TrelloError>;
}
