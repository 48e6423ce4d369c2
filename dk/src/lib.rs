//! Donekeeper - weekly done-list maintenance for Trello boards
//!
//! Keeps a board's "Done" lists tidy over time:
//!
//! - **Rotation**: once a week the fixed `Done - this week` list is renamed
//!   to the dated name of the week that just ended, parked next to the other
//!   archived weeks, and a fresh current-week list takes its place.
//! - **Consolidation**: weekly archives whose month already has a
//!   `Done - M/YYYY` list are emptied into it and archived away.
//!
//! The decisions live in [`planner`] as pure functions over board snapshots;
//! I/O goes through two ports, [`trello::BoardService`] for the remote board
//! and [`prompt::Interactive`] for the human placement choices, so the core
//! is testable without a terminal or network.
//!
//! # Modules
//!
//! - [`planner`] - rotation and consolidation decisions plus execution
//! - [`trello`] - board service port and REST client
//! - [`prompt`] - interactive placement/confirmation prompts
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod planner;
pub mod prompt;
pub mod trello;

pub use config::Config;
pub use planner::{
    BoardView, ConsolidationAction, ListRole, PropagationPoll, RotationAction, RotationOutcome,
};
pub use prompt::{Interactive, TerminalPrompt};
pub use trello::{Board, BoardService, List, TrelloClient, TrelloError};
