//! Planning core
//!
//! Pure decisions over board snapshots, plus the execution wrappers that
//! apply them through the [`crate::trello::BoardService`] port.
//!
//! - [`week`] - Monday anchoring and done-list naming
//! - [`roles`] - name-based list role classification
//! - [`rotation`] - weekly rotate/create decision and execution
//! - [`consolidation`] - weekly-into-monthly merge decision and execution

pub mod consolidation;
pub mod roles;
pub mod rotation;
pub mod week;

pub use consolidation::ConsolidationAction;
pub use roles::ListRole;
pub use rotation::{BoardView, PropagationPoll, RotationAction, RotationOutcome};
pub use week::{CURRENT_DONE_LIST_NAME, WeekBucket};
