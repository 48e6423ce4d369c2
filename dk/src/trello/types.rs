//! Trello REST resource types

use serde::Deserialize;

/// A board visible to the authenticated member
#[derive(Debug, Clone, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}

/// A list on a board
///
/// `pos` is Trello's floating-point sort key; `get_lists` returns lists
/// ordered by it ascending, so the index of a list in a snapshot reflects its
/// left-to-right position on the board.
#[derive(Debug, Clone, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pos: f64,
}

impl List {
    /// Convenience constructor, mainly for tests and mock services
    pub fn new(id: impl Into<String>, name: impl Into<String>, pos: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pos,
        }
    }
}
