use thiserror::Error;

use crate::models::{ScoresResponse, StatsUpdate, UpdateData};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user not found")]
    NotFound,
    #[error("rate limited")]
    RateLimited,
    #[error("server error")]
    ServerFault,
    #[error("unexpected status {0}")]
    Unknown(u16),
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ApiError::NotFound,
            429 => ApiError::RateLimited,
            500 => ApiError::ServerFault,
            other => ApiError::Unknown(other),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::RateLimited => Some(429),
            ApiError::ServerFault => Some(500),
            ApiError::Unknown(status) => Some(*status),
            ApiError::Parse(_) => None,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::NotFound => "User not found",
            ApiError::RateLimited => "You're updating too quickly; wait a few seconds and try again",
            ApiError::ServerFault => "Error updating user; internal server error",
            ApiError::Unknown(_) | ApiError::Parse(_) => "Unknown error while updating user",
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Stats history endpoint: a 404 means the user doesn't exist and is not an error.
pub fn stats_history_from_response(
    status: u16,
    body: &str,
) -> Result<Option<Vec<StatsUpdate>>, ApiError> {
    if status == 404 {
        log::debug!("stats history: user not found");
        return Ok(None);
    }
    if !is_success(status) {
        return Err(ApiError::from_status(status));
    }
    let mut history: Vec<StatsUpdate> = serde_json::from_str(body.trim())?;
    history.sort_by_key(|u| u.recorded_at);
    Ok(Some(history))
}

pub fn scores_from_response(status: u16, body: &str) -> Result<Option<ScoresResponse>, ApiError> {
    if status == 404 {
        log::debug!("scores: user not found");
        return Ok(None);
    }
    if !is_success(status) {
        return Err(ApiError::from_status(status));
    }
    Ok(Some(serde_json::from_str(body.trim())?))
}

/// Update endpoint: every non-success status, 404 included, is an error the panel reports.
pub fn update_from_response(status: u16, body: &str) -> Result<UpdateData, ApiError> {
    if !is_success(status) {
        let err = ApiError::from_status(status);
        log::debug!("update failed: {err}");
        return Err(err);
    }
    Ok(serde_json::from_str(body.trim())?)
}
