//! Weekly rotation planner
//!
//! Decides what the weekly maintenance pass has to do with the current board
//! snapshot, then carries it out. The decision itself ([`plan`]) is pure;
//! [`run`] wraps it with the interactive confirmation and the board
//! mutations.

use std::time::Duration;

use chrono::NaiveDate;
use eyre::Result;
use tracing::{debug, info};

use super::roles::{self, ListRole};
use super::week;
use crate::prompt::Interactive;
use crate::trello::{BoardService, List, TrelloError};

/// What the rotation pass should do for the current period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAction {
    /// Rotation already happened: both the current and last-week lists exist
    NoOp,
    /// No current-week list at all; one must be created at a chosen index
    CreateOnly,
    /// Rename and relocate the current list, then recreate it
    ///
    /// `to_index` is the index of the first old done list, `None` when no
    /// list matches the heuristic and the placement must be chosen
    /// interactively.
    Rotate {
        from_index: usize,
        to_index: Option<usize>,
    },
}

/// Decide the rotation action for a board snapshot
pub fn plan(lists: &[List], today: NaiveDate) -> RotationAction {
    let this_week = lists
        .iter()
        .position(|list| roles::classify(&list.name, today) == ListRole::CurrentWeekDone);
    let last_week = lists
        .iter()
        .position(|list| roles::classify(&list.name, today) == ListRole::LastWeekDone);

    match (this_week, last_week) {
        (Some(from_index), None) => RotationAction::Rotate {
            from_index,
            to_index: lists.iter().position(|list| roles::is_old_done_list(&list.name)),
        },
        (None, _) => RotationAction::CreateOnly,
        (Some(_), Some(_)) => RotationAction::NoOp,
    }
}

/// How long to wait for a created list to show up in fresh snapshots
#[derive(Debug, Clone, Copy)]
pub struct PropagationPoll {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for PropagationPoll {
    fn default() -> Self {
        Self {
            attempts: 10,
            delay: Duration::from_millis(500),
        }
    }
}

/// What a rotation pass ended up doing
#[derive(Debug, Default)]
pub struct RotationOutcome {
    pub moved_done_week_list: bool,
    pub created_this_week_list: bool,
    /// Post-rotation snapshot for display, present after a full rotate
    pub board_view: Option<BoardView>,
}

/// A refreshed snapshot with the lists the rotation touched
#[derive(Debug)]
pub struct BoardView {
    pub lists: Vec<List>,
    /// Id of the list that was renamed and relocated
    pub moved_list_id: String,
    /// Index where the fresh current-week list was created
    pub created_index: usize,
}

/// Run the weekly rotation against a board
///
/// Fetches a snapshot, plans, and executes. A declined confirmation leaves
/// the board untouched and reports nothing done; confirmation gates the whole
/// rename + move + create sequence as one decision.
pub async fn run(
    service: &dyn BoardService,
    interactive: &dyn Interactive,
    board_id: &str,
    today: NaiveDate,
    poll: PropagationPoll,
) -> Result<RotationOutcome> {
    let lists = service.get_lists(board_id).await?;
    let action = plan(&lists, today);
    debug!(?action, list_count = lists.len(), "rotation: planned");

    match action {
        RotationAction::NoOp => Ok(RotationOutcome::default()),

        RotationAction::CreateOnly => {
            let index = interactive
                .choose_list_placement("No current week done list", &lists)
                .await?;
            if !confirm_at(interactive, &lists, index).await? {
                info!("rotation: placement declined, nothing created");
                return Ok(RotationOutcome::default());
            }
            service
                .create_list(board_id, week::CURRENT_DONE_LIST_NAME, index)
                .await?;
            info!(index, "rotation: created current-week list");
            Ok(RotationOutcome {
                created_this_week_list: true,
                ..Default::default()
            })
        }

        RotationAction::Rotate { from_index, to_index } => {
            let to_index = match to_index {
                Some(index) => index,
                None => {
                    interactive
                        .choose_list_placement("Can't find first old done list", &lists)
                        .await?
                }
            };
            if !confirm_at(interactive, &lists, to_index).await? {
                info!("rotation: placement declined, board untouched");
                return Ok(RotationOutcome::default());
            }

            let moved = &lists[from_index];
            let archive_name = week::last_week_list_name(today);

            service.update_list_name(&moved.id, &archive_name).await?;
            service.move_list(&moved.id, board_id, to_index).await?;
            service
                .create_list(board_id, week::CURRENT_DONE_LIST_NAME, from_index)
                .await?;
            info!(from_index, to_index, %archive_name, "rotation: rotated");

            let refreshed =
                wait_for_list(service, board_id, week::CURRENT_DONE_LIST_NAME, poll).await?;

            Ok(RotationOutcome {
                moved_done_week_list: true,
                created_this_week_list: true,
                board_view: Some(BoardView {
                    lists: refreshed,
                    moved_list_id: moved.id.clone(),
                    created_index: from_index,
                }),
            })
        }
    }
}

/// Confirm an insertion index with up to two lists of context on each side
async fn confirm_at(interactive: &dyn Interactive, lists: &[List], index: usize) -> Result<bool> {
    let at = index.min(lists.len());
    let before = &lists[at.saturating_sub(2)..at];
    let after = &lists[at..(at + 2).min(lists.len())];
    interactive.confirm_list_placement(before, after).await
}

/// Re-fetch until a list with `name` is visible, bounded by the poll settings
///
/// The service is eventually consistent after a create; rather than a flat
/// sleep, poll a few times and fall through with the latest snapshot if the
/// list never appears.
async fn wait_for_list(
    service: &dyn BoardService,
    board_id: &str,
    name: &str,
    poll: PropagationPoll,
) -> Result<Vec<List>, TrelloError> {
    let mut lists = service.get_lists(board_id).await?;
    for attempt in 0..poll.attempts {
        if lists.iter().any(|list| list.name == name) {
            return Ok(lists);
        }
        debug!(attempt, name, "wait_for_list: not visible yet");
        tokio::time::sleep(poll.delay).await;
        lists = service.get_lists(board_id).await?;
    }
    Ok(lists)
}
