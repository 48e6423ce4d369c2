//! Trello board service module
//!
//! The [`BoardService`] trait is the port the planners talk through;
//! [`TrelloClient`] is its reqwest-backed implementation against the Trello
//! v1 REST API.

mod client;
mod error;
mod service;
mod types;

pub use client::TrelloClient;
pub use error::TrelloError;
pub use service::BoardService;
pub use types::{Board, List};
