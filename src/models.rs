use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::grade::Grade;
use crate::time_series::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Keys4,
    Keys7,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Keys4, Mode::Keys7];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "4" | "4k" | "k4" => Some(Mode::Keys4),
            "2" | "7" | "7k" | "k7" => Some(Mode::Keys7),
            _ => None,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Mode::Keys4),
            2 => Some(Mode::Keys7),
            _ => None,
        }
    }

    pub fn id(self) -> i64 {
        match self {
            Mode::Keys4 => 1,
            Mode::Keys7 => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Keys4 => "4k",
            Mode::Keys7 => "7k",
        }
    }
}

/// One point-in-time snapshot of a player's aggregate stats for a single mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsUpdate {
    pub id: i64,
    pub user_id: i64,
    pub recorded_at: NaiveDateTime,
    pub mode: i64,
    pub total_score: i64,
    pub ranked_score: i64,
    pub overall_accuracy: f64,
    pub overall_performance_rating: f64,
    pub play_count: i64,
    pub fail_count: i64,
    pub max_combo: i64,
    #[serde(default)]
    pub replays_watched: i64,
    #[serde(default)]
    pub total_marv: i64,
    #[serde(default)]
    pub total_perf: i64,
    #[serde(default)]
    pub total_great: i64,
    #[serde(default)]
    pub total_good: i64,
    #[serde(default)]
    pub total_okay: i64,
    #[serde(default)]
    pub total_miss: i64,
    #[serde(default)]
    pub total_pauses: i64,
    #[serde(default)]
    pub multiplayer_wins: i64,
    #[serde(default)]
    pub multiplayer_losses: i64,
    #[serde(default)]
    pub multiplayer_ties: i64,
    pub global_rank: i64,
    pub country_rank: i64,
    pub multiplayer_win_rank: i64,
}

impl StatsUpdate {
    pub fn timestamp_ms(&self) -> Timestamp {
        self.recorded_at.and_utc().timestamp_millis()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub time: NaiveDateTime,
    pub mode: i64,
    #[serde(default)]
    pub mods: i64,
    #[serde(default)]
    pub mods_string: String,
    pub performance_rating: f64,
    #[serde(default)]
    pub personal_best: bool,
    #[serde(default)]
    pub is_donator_score: bool,
    #[serde(default)]
    pub total_score: i64,
    #[serde(default)]
    pub accuracy: f64,
    // Kept as the raw label so unrecognised grades survive parsing.
    pub grade: String,
    #[serde(default)]
    pub max_combo: i64,
    #[serde(default)]
    pub total_marv: i64,
    #[serde(default)]
    pub total_perf: i64,
    #[serde(default)]
    pub total_great: i64,
    #[serde(default)]
    pub total_good: i64,
    #[serde(default)]
    pub total_okay: i64,
    #[serde(default)]
    pub total_miss: i64,
    #[serde(default)]
    pub scroll_speed: i64,
    #[serde(default)]
    pub ratio: f64,
    pub map_id: i64,
}

impl Score {
    pub fn grade(&self) -> Option<Grade> {
        Grade::parse(&self.grade)
    }

    pub fn timestamp_ms(&self) -> Timestamp {
        self.time.and_utc().timestamp_millis()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub id: i64,
    #[serde(default)]
    pub mapset_id: i64,
    #[serde(default)]
    pub md5: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub difficulty_name: String,
    #[serde(default)]
    pub creator_id: i64,
    #[serde(default)]
    pub creator_username: String,
    #[serde(default)]
    pub ranked_status: i64,
}

impl Map {
    pub fn display_name(&self) -> String {
        format!("{} - {} [{}]", self.artist, self.title, self.difficulty_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoresResponse {
    #[serde(default)]
    pub maps: HashMap<i64, Map>,
    #[serde(default)]
    pub scores: Vec<Score>,
}

/// Result of triggering an update: fresh snapshots for both modes plus the scores that were
/// recorded by this update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateData {
    pub stats_4k: StatsUpdate,
    pub stats_7k: StatsUpdate,
    #[serde(default)]
    pub maps: HashMap<i64, Map>,
    #[serde(default)]
    pub new_scores: Vec<Score>,
}

impl UpdateData {
    pub fn for_mode(&self, mode: Mode) -> &StatsUpdate {
        match mode {
            Mode::Keys4 => &self.stats_4k,
            Mode::Keys7 => &self.stats_7k,
        }
    }
}

pub fn parse_stats_history_json(raw: &str) -> Result<Vec<StatsUpdate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let mut history: Vec<StatsUpdate> =
        serde_json::from_str(trimmed).context("invalid stats history json")?;
    // Charts expect ascending time; the backend usually already sends it that way.
    history.sort_by_key(|u| u.recorded_at);
    Ok(history)
}

pub fn parse_scores_json(raw: &str) -> Result<ScoresResponse> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(ScoresResponse::default());
    }
    serde_json::from_str(trimmed).context("invalid scores json")
}

pub fn parse_update_json(raw: &str) -> Result<UpdateData> {
    serde_json::from_str(raw.trim()).context("invalid update json")
}
