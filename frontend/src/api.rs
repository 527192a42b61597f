//! POST/JSON client for the game server. Every endpoint answers with a full
//! `GameState` document.

use gloo_net::http::Request;
use serde::Serialize;
use std::fmt;

use shared::game::{EndTurnRequest, GameState, GameStateRequest, GuessRequest, NextGameRequest};

use crate::config::get_api_base_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(_) => write!(f, "Network error. Please check your connection."),
            ApiError::Status(status) => write!(f, "Server error (status {}).", status),
            ApiError::Decode(_) => write!(f, "Failed to parse server response."),
        }
    }
}

async fn post<B: Serialize>(path: &str, body: &B) -> Result<GameState, ApiError> {
    let url = format!("{}{}", get_api_base_url(), path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if response.status() != 200 {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<GameState>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// `state_id` is the last known change token, empty string if none.
pub async fn fetch_game_state(game_id: &str, state_id: &str) -> Result<GameState, ApiError> {
    post("/game-state", &GameStateRequest { game_id, state_id }).await
}

pub async fn submit_guess(game_id: &str, index: usize) -> Result<GameState, ApiError> {
    post("/guess", &GuessRequest { game_id, index }).await
}

pub async fn end_turn(game_id: &str, current_round: u32) -> Result<GameState, ApiError> {
    post("/end-turn", &EndTurnRequest { game_id, current_round }).await
}

pub async fn next_game(request: &NextGameRequest<'_>) -> Result<GameState, ApiError> {
    post("/next-game", request).await
}
