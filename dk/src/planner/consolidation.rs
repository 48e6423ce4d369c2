//! Monthly consolidation planner
//!
//! Folds weekly archive lists into the monthly list that owns them: every
//! `Done - week of M/D/YY` whose month and two-digit year match an existing
//! `Done - M/YYYY` list has its cards moved there and is archived. Runs
//! without confirmation, and is idempotent: a second pass finds nothing left
//! to fold.

use eyre::Result;
use futures::future::try_join_all;
use tracing::{debug, info};

use super::roles;
use crate::trello::{BoardService, List, TrelloError};

/// One merge: empty a weekly list into its monthly bucket, then archive it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidationAction {
    pub weekly_id: String,
    pub weekly_name: String,
    pub monthly_id: String,
}

/// Find every weekly archive that belongs to a monthly bucket on the board
///
/// Buckets appear in snapshot order, weeklies in snapshot order within each
/// bucket. Years are compared by their last two digits, the only year the
/// weekly name carries.
pub fn plan(lists: &[List]) -> Vec<ConsolidationAction> {
    let mut actions = Vec::new();

    for monthly in lists {
        let Some((month, year)) = roles::parse_monthly_archive(&monthly.name) else {
            continue;
        };
        for weekly in lists {
            let Some((weekly_month, _day, weekly_year2)) = roles::parse_weekly_archive(&weekly.name)
            else {
                continue;
            };
            if weekly_month == month && weekly_year2 == year.rem_euclid(100) as u32 {
                actions.push(ConsolidationAction {
                    weekly_id: weekly.id.clone(),
                    weekly_name: weekly.name.clone(),
                    monthly_id: monthly.id.clone(),
                });
            }
        }
    }

    debug!(action_count = actions.len(), "consolidation: planned");
    actions
}

/// Execute consolidation actions, fanned out concurrently
///
/// Each action moves the weekly list's cards into the monthly list and then
/// archives the weekly list; actions run with no ordering guarantee between
/// them. Returns the names of the consolidated weekly lists.
pub async fn execute(
    service: &dyn BoardService,
    board_id: &str,
    actions: Vec<ConsolidationAction>,
) -> Result<Vec<String>, TrelloError> {
    let merges = actions.into_iter().map(|action| async move {
        service
            .move_all_cards(&action.weekly_id, &action.monthly_id, board_id)
            .await?;
        service.archive_list(&action.weekly_id).await?;
        info!(
            weekly = %action.weekly_name,
            monthly_id = %action.monthly_id,
            "consolidation: merged"
        );
        Ok::<String, TrelloError>(action.weekly_name)
    });
    try_join_all(merges).await
}

/// Fetch a snapshot, plan, and execute in one go
pub async fn run(service: &dyn BoardService, board_id: &str) -> Result<Vec<String>> {
    let lists = service.get_lists(board_id).await?;
    let actions = plan(&lists);
    Ok(execute(service, board_id, actions).await?)
}
