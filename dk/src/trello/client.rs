//! Trello REST API client
//!
//! Implements the BoardService trait against the Trello v1 API. Every request
//! carries the application key and member auth token as query parameters.
//! There is no retry policy: transport and API failures propagate to the
//! caller and end the run.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::{Board, BoardService, List, TrelloError};
use crate::config::TrelloConfig;

/// Position Trello assigns to the first list on an empty board
const FIRST_LIST_POS: f64 = 65536.0;

/// Gap left after the last list when appending
const LIST_POS_GAP: f64 = 32768.0;

/// Authenticated Trello API client
pub struct TrelloClient {
    app_key: String,
    auth_token: String,
    base_url: String,
    http: Client,
}

impl TrelloClient {
    /// Create a client from credentials and the Trello section of the config
    pub fn new(
        app_key: impl Into<String>,
        auth_token: impl Into<String>,
        config: &TrelloConfig,
    ) -> Result<Self, TrelloError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(TrelloError::Network)?;

        Ok(Self {
            app_key: app_key.into(),
            auth_token: auth_token.into(),
            base_url: config.base_url.clone(),
            http,
        })
    }

    /// Issue an authenticated request and fail on non-2xx responses
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<reqwest::Response, TrelloError> {
        debug!(%method, path, ?params, "request: called");
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .request(method, &url)
            .query(&[
                ("key", self.app_key.as_str()),
                ("token", self.auth_token.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TrelloError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, TrelloError> {
        let response = self.request(method, path, params).await?;
        Ok(response.json().await?)
    }

    /// Lists of a board sorted by their position key
    async fn fetch_lists_sorted(&self, board_id: &str) -> Result<Vec<List>, TrelloError> {
        let mut lists: Vec<List> = self
            .request_json(Method::GET, &format!("/boards/{}/lists", board_id), &[])
            .await?;
        lists.sort_by(|a, b| a.pos.total_cmp(&b.pos));
        Ok(lists)
    }

    /// Compute the position key for inserting at a logical index
    ///
    /// Re-fetches the board's lists so the computation reflects current
    /// neighbor positions, then picks a key strictly between them.
    async fn calculate_pos(&self, board_id: &str, index: usize) -> Result<f64, TrelloError> {
        let lists = self.fetch_lists_sorted(board_id).await?;
        let positions: Vec<f64> = lists.iter().map(|list| list.pos).collect();
        position_for_index(&positions, index)
    }
}

/// Position key for inserting at `index` between existing sorted positions
///
/// An empty board gets a fixed default. Inserting past the last list places
/// the new key half a gap beyond it; anywhere else the key is the midpoint of
/// the two neighbors. Indices outside `[0, len]` are rejected.
pub(crate) fn position_for_index(positions: &[f64], index: usize) -> Result<f64, TrelloError> {
    if index > positions.len() {
        return Err(TrelloError::InvalidIndex {
            index,
            len: positions.len(),
        });
    }
    if positions.is_empty() {
        return Ok(FIRST_LIST_POS);
    }
    let before = if index == 0 { 0.0 } else { positions[index - 1] };
    let after = match positions.get(index) {
        Some(pos) => *pos,
        None => before + LIST_POS_GAP,
    };
    Ok((before + after) / 2.0)
}

#[async_trait]
impl BoardService for TrelloClient {
    async fn get_boards(&self) -> Result<Vec<Board>, TrelloError> {
        self.request_json(
            Method::GET,
            "/members/me/boards",
            &[("fields", "name".to_string())],
        )
        .await
    }

    async fn get_lists(&self, board_id: &str) -> Result<Vec<List>, TrelloError> {
        self.fetch_lists_sorted(board_id).await
    }

    async fn create_list(&self, board_id: &str, name: &str, index: usize) -> Result<(), TrelloError> {
        let pos = self.calculate_pos(board_id, index).await?;
        self.request(
            Method::POST,
            "/lists",
            &[
                ("name", name.to_string()),
                ("idBoard", board_id.to_string()),
                ("pos", pos.to_string()),
            ],
        )
        .await?;
        Ok(())
    }

    async fn move_list(&self, list_id: &str, board_id: &str, index: usize) -> Result<(), TrelloError> {
        let pos = self.calculate_pos(board_id, index).await?;
        self.request(
            Method::PUT,
            &format!("/lists/{}", list_id),
            &[("pos", pos.to_string())],
        )
        .await?;
        Ok(())
    }

    async fn update_list_name(&self, list_id: &str, name: &str) -> Result<(), TrelloError> {
        self.request(
            Method::PUT,
            &format!("/lists/{}", list_id),
            &[("name", name.to_string())],
        )
        .await?;
        Ok(())
    }

    async fn move_all_cards(
        &self,
        from_list_id: &str,
        to_list_id: &str,
        to_board_id: &str,
    ) -> Result<(), TrelloError> {
        self.request(
            Method::POST,
            &format!("/lists/{}/moveAllCards", from_list_id),
            &[
                ("idBoard", to_board_id.to_string()),
                ("idList", to_list_id.to_string()),
            ],
        )
        .await?;
        Ok(())
    }

    async fn archive_list(&self, list_id: &str) -> Result<(), TrelloError> {
        self.request(
            Method::PUT,
            &format!("/lists/{}/closed", list_id),
            &[("value", "true".to_string())],
        )
        .await?;
        Ok(())
    }
}
