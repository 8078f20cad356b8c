use crate::api::ApiError;
use crate::metrics::Metric;
use crate::models::{Mode, StatsUpdate, UpdateData};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Cells shown in the "changes since last update" panel, in display order.
pub const CHANGE_METRICS: [Metric; 8] = [
    Metric::GlobalRank,
    Metric::PerformanceRating,
    Metric::CountryRank,
    Metric::MultiplayerWinRank,
    Metric::PlayCount,
    Metric::Accuracy,
    Metric::TotalScore,
    Metric::RankedScore,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Same,
    Better,
    Worse,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeCell {
    pub metric: Metric,
    pub before: f64,
    pub after: f64,
    pub diff: f64,
    pub change: Change,
}

impl ChangeCell {
    pub fn new(metric: Metric, before: f64, after: f64) -> Self {
        let change = if after == before {
            Change::Same
        } else if metric.inverse() == (after < before) {
            Change::Better
        } else {
            Change::Worse
        };
        Self {
            metric,
            before,
            after,
            diff: after - before,
            change,
        }
    }

    /// Signed diff, with an explicit `+` for non-negative values.
    pub fn diff_label(&self) -> String {
        if self.diff >= 0.0 {
            format!("+{}", format_number(self.diff))
        } else {
            format_number(self.diff)
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

pub fn last_update_changes(last: &StatsUpdate, new: &StatsUpdate) -> Vec<ChangeCell> {
    CHANGE_METRICS
        .iter()
        .map(|&metric| ChangeCell::new(metric, metric.value(last), metric.value(new)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeTime {
    // Negative amounts are in the past.
    pub amount: f64,
    pub unit: TimeUnit,
}

impl RelativeTime {
    pub fn label(&self) -> String {
        let unit = match self.unit {
            TimeUnit::Seconds => "sec.",
            TimeUnit::Minutes => "min.",
            TimeUnit::Hours => "hr.",
            TimeUnit::Days => "days",
        };
        let magnitude = self.amount.abs();
        let amount = if magnitude.fract() == 0.0 {
            format!("{}", magnitude as i64)
        } else {
            format!("{magnitude:.1}")
        };
        if self.amount < 0.0 {
            format!("{amount} {unit} ago")
        } else {
            format!("in {amount} {unit}")
        }
    }
}

pub fn relative_time(seconds: i64) -> RelativeTime {
    let magnitude = seconds.unsigned_abs() as f64;
    let secs = seconds as f64;
    if magnitude > SECS_PER_DAY as f64 * 1.5 {
        RelativeTime {
            amount: secs / SECS_PER_DAY as f64,
            unit: TimeUnit::Days,
        }
    } else if magnitude > SECS_PER_HOUR as f64 * 1.5 {
        RelativeTime {
            amount: secs / SECS_PER_HOUR as f64,
            unit: TimeUnit::Hours,
        }
    } else if magnitude > (SECS_PER_MINUTE * 2) as f64 {
        RelativeTime {
            amount: secs / SECS_PER_MINUTE as f64,
            unit: TimeUnit::Minutes,
        }
    } else {
        RelativeTime {
            amount: secs,
            unit: TimeUnit::Seconds,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateStatus {
    Loading,
    Failed(String),
    FirstUpdate,
    Changes {
        since: RelativeTime,
        cells: Vec<ChangeCell>,
    },
}

/// What the last-update panel should show for `mode`, given the outcome of the update request
/// (`None` while it is still in flight) and the newest snapshot from before the update.
pub fn update_status(
    update: Option<&Result<UpdateData, ApiError>>,
    last: Option<&StatsUpdate>,
    mode: Mode,
) -> UpdateStatus {
    let Some(update) = update else {
        return UpdateStatus::Loading;
    };
    let update = match update {
        Ok(update) => update,
        Err(err) => return UpdateStatus::Failed(err.user_message().to_string()),
    };
    let Some(last) = last else {
        return UpdateStatus::FirstUpdate;
    };

    let new = update.for_mode(mode);
    let since = relative_time((last.recorded_at - new.recorded_at).num_seconds());
    UpdateStatus::Changes {
        since,
        cells: last_update_changes(last, new),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_time_buckets() {
        assert_eq!(relative_time(-30).unit, TimeUnit::Seconds);
        assert_eq!(relative_time(-120).unit, TimeUnit::Seconds);
        assert_eq!(relative_time(-121).unit, TimeUnit::Minutes);
        assert_eq!(relative_time(-3 * SECS_PER_HOUR).unit, TimeUnit::Hours);
        let days = relative_time(-3 * SECS_PER_DAY);
        assert_eq!(days.unit, TimeUnit::Days);
        assert_eq!(days.amount, -3.0);
        assert_eq!(days.label(), "3 days ago");
    }

    #[test]
    fn relative_time_handles_extreme_seconds() {
        let past = relative_time(i64::MIN);
        assert_eq!(past.unit, TimeUnit::Days);
        assert!(past.amount < 0.0 && past.amount.is_finite());
        assert_eq!(relative_time(i64::MAX).unit, TimeUnit::Days);
    }

    #[test]
    fn rank_drop_is_better() {
        let cell = ChangeCell::new(Metric::GlobalRank, 120.0, 100.0);
        assert_eq!(cell.change, Change::Better);
        assert_eq!(cell.diff_label(), "-20");

        let cell = ChangeCell::new(Metric::PlayCount, 10.0, 12.0);
        assert_eq!(cell.change, Change::Better);
        assert_eq!(cell.diff_label(), "+2");

        let cell = ChangeCell::new(Metric::Accuracy, 95.5, 95.25);
        assert_eq!(cell.change, Change::Worse);

        let cell = ChangeCell::new(Metric::TotalScore, 5.0, 5.0);
        assert_eq!(cell.change, Change::Same);
        assert_eq!(cell.diff_label(), "+0");
    }
}
