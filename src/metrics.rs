use crate::models::StatsUpdate;
use crate::time_series::{TimePoint, WindowAnalysis, ZoomWindow, analyze_time_series};

/// Snapshot fields that get their own trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    GlobalRank,
    CountryRank,
    MultiplayerWinRank,
    PerformanceRating,
    Accuracy,
    TotalScore,
    RankedScore,
    PlayCount,
    FailCount,
    MaxCombo,
    MultiplayerWins,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Metric::GlobalRank,
        Metric::CountryRank,
        Metric::MultiplayerWinRank,
        Metric::PerformanceRating,
        Metric::Accuracy,
        Metric::TotalScore,
        Metric::RankedScore,
        Metric::PlayCount,
        Metric::FailCount,
        Metric::MaxCombo,
        Metric::MultiplayerWins,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::GlobalRank => "Global Rank",
            Metric::CountryRank => "Country Rank",
            Metric::MultiplayerWinRank => "Multiplayer Win Rank",
            Metric::PerformanceRating => "Overall Performance Rating",
            Metric::Accuracy => "Overall Accuracy",
            Metric::TotalScore => "Total Score",
            Metric::RankedScore => "Ranked Score",
            Metric::PlayCount => "Playcount",
            Metric::FailCount => "Fail Count",
            Metric::MaxCombo => "Max Combo",
            Metric::MultiplayerWins => "Multiplayer Wins",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Metric::GlobalRank => "global_rank",
            Metric::CountryRank => "country_rank",
            Metric::MultiplayerWinRank => "multiplayer_win_rank",
            Metric::PerformanceRating => "overall_performance_rating",
            Metric::Accuracy => "overall_accuracy",
            Metric::TotalScore => "total_score",
            Metric::RankedScore => "ranked_score",
            Metric::PlayCount => "play_count",
            Metric::FailCount => "fail_count",
            Metric::MaxCombo => "max_combo",
            Metric::MultiplayerWins => "multiplayer_wins",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Metric::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(raw))
    }

    /// Lower is better for ranks, so their axis is drawn upside down.
    pub fn inverse(self) -> bool {
        matches!(
            self,
            Metric::GlobalRank | Metric::CountryRank | Metric::MultiplayerWinRank
        )
    }

    pub fn value(self, update: &StatsUpdate) -> f64 {
        match self {
            Metric::GlobalRank => update.global_rank as f64,
            Metric::CountryRank => update.country_rank as f64,
            Metric::MultiplayerWinRank => update.multiplayer_win_rank as f64,
            Metric::PerformanceRating => update.overall_performance_rating,
            Metric::Accuracy => update.overall_accuracy,
            Metric::TotalScore => update.total_score as f64,
            Metric::RankedScore => update.ranked_score as f64,
            Metric::PlayCount => update.play_count as f64,
            Metric::FailCount => update.fail_count as f64,
            Metric::MaxCombo => update.max_combo as f64,
            Metric::MultiplayerWins => update.multiplayer_wins as f64,
        }
    }
}

pub fn metric_series(history: &[StatsUpdate], metric: Metric) -> Vec<TimePoint> {
    history
        .iter()
        .map(|u| TimePoint::new(u.timestamp_ms(), metric.value(u)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAxis {
    pub metric: Metric,
    pub min: f64,
    pub max: f64,
    pub inverse: bool,
    pub window: WindowAnalysis,
}

pub fn trend_axis(history: &[StatsUpdate], metric: Metric, zoom: ZoomWindow) -> TrendAxis {
    let series = metric_series(history, metric);
    let window = analyze_time_series(&series, zoom);
    let (min, max) = window.axis_bounds();
    TrendAxis {
        metric,
        min,
        max,
        inverse: metric.inverse(),
        window,
    }
}
