use serde::{Deserialize, Serialize};

/// Milliseconds since Unix epoch.
pub type Timestamp = i64;

pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

// 3000-04-20T00:00:00Z and 1900-04-20T00:00:00Z. An empty series reports these as its
// first/last points so that `last < first` holds without a separate "no data" flag.
pub const FUTURE_SENTINEL_MS: Timestamp = 32_513_097_600_000;
pub const PAST_SENTINEL_MS: Timestamp = -2_199_571_200_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub ts: Timestamp,
    pub value: f64,
}

impl TimePoint {
    pub fn new(ts: Timestamp, value: f64) -> Self {
        Self { ts, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomWindow {
    pub start_pct: f64,
    pub end_pct: f64,
}

impl Default for ZoomWindow {
    fn default() -> Self {
        Self::FULL
    }
}

impl ZoomWindow {
    pub const FULL: ZoomWindow = ZoomWindow {
        start_pct: 0.0,
        end_pct: 100.0,
    };

    /// Clamps both bounds into `[0, 100]` and swaps them if they arrive reversed.
    /// NaN bounds fall back to the full range.
    pub fn new(start_pct: f64, end_pct: f64) -> Self {
        let start = if start_pct.is_nan() { 0.0 } else { start_pct.clamp(0.0, 100.0) };
        let end = if end_pct.is_nan() { 100.0 } else { end_pct.clamp(0.0, 100.0) };
        if start <= end {
            Self {
                start_pct: start,
                end_pct: end,
            }
        } else {
            Self {
                start_pct: end,
                end_pct: start,
            }
        }
    }
}

/// Absolute timestamps a zoom window covered after padding. `Unbounded` means the series had
/// zero time range, so every point was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleRange {
    Bounded { start: Timestamp, end: Timestamp },
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowAnalysis {
    pub min: f64,
    pub max: f64,
    pub first: TimePoint,
    pub last: TimePoint,
    pub offset: f64,
    pub visible: VisibleRange,
}

impl WindowAnalysis {
    /// Axis bounds with the 5% offset applied on both sides.
    pub fn axis_bounds(&self) -> (f64, f64) {
        (self.min - self.offset, self.max + self.offset)
    }

    pub fn has_data(&self) -> bool {
        self.last.ts >= self.first.ts
    }
}

pub fn analyze_full(series: &[TimePoint]) -> WindowAnalysis {
    analyze_time_series(series, ZoomWindow::FULL)
}

/// Computes the value range of the points that fall inside `zoom` (widened by one day on each
/// side), for sizing a chart's value axis.
pub fn analyze_time_series(series: &[TimePoint], zoom: ZoomWindow) -> WindowAnalysis {
    let zoom = ZoomWindow::new(zoom.start_pct, zoom.end_pct);
    let first = series
        .first()
        .copied()
        .unwrap_or(TimePoint::new(FUTURE_SENTINEL_MS, 0.0));
    let last = series
        .last()
        .copied()
        .unwrap_or(TimePoint::new(PAST_SENTINEL_MS, 0.0));

    // Widened so spans past i64::MAX (extreme or unsorted timestamps) can't overflow.
    let time_range_ms = i128::from(last.ts) - i128::from(first.ts);
    let visible = visible_range(first.ts, time_range_ms, zoom);

    let mut values = series
        .iter()
        .filter(|p| match visible {
            VisibleRange::Bounded { start, end } => p.ts >= start && p.ts <= end,
            VisibleRange::Unbounded => true,
        })
        .map(|p| p.value);

    let (min, max) = match values.next() {
        Some(seed) => values.fold((seed, seed), |(lo, hi), v| (lo.min(v), hi.max(v))),
        None => (0.0, 0.0),
    };
    let offset = 0.05 * (max - min);

    WindowAnalysis {
        min,
        max,
        first,
        last,
        offset,
        visible,
    }
}

/// Padding, as a percentage of the full range, equal to one day of time.
pub fn window_padding_pct(time_range_ms: i64) -> Option<f64> {
    padding_pct(i128::from(time_range_ms))
}

fn padding_pct(time_range_ms: i128) -> Option<f64> {
    if time_range_ms == 0 {
        return None;
    }
    Some((MS_PER_DAY as f64 / time_range_ms as f64).abs() * 100.0)
}

fn visible_range(first_ts: Timestamp, time_range_ms: i128, zoom: ZoomWindow) -> VisibleRange {
    let Some(padding) = padding_pct(time_range_ms) else {
        log::debug!("zero time range; skipping zoom filtering");
        return VisibleRange::Unbounded;
    };

    let start_pct = (zoom.start_pct - padding).max(0.0);
    let end_pct = (zoom.end_pct + padding).min(100.0);
    let start = offset_ts(first_ts, start_pct, time_range_ms);
    let end = offset_ts(first_ts, end_pct, time_range_ms);
    VisibleRange::Bounded { start, end }
}

/// `first_ts` moved by `pct` percent of the range, saturated into the `Timestamp` domain.
fn offset_ts(first_ts: Timestamp, pct: f64, time_range_ms: i128) -> Timestamp {
    // The endpoints are exact; f64 can't hold every i64-scale range.
    let offset = if pct <= 0.0 {
        0
    } else if pct >= 100.0 {
        time_range_ms
    } else {
        // Whole milliseconds, truncated toward zero like a JS Date.
        (pct * time_range_ms as f64 / 100.0).trunc() as i128
    };
    let ts = i128::from(first_ts) + offset;
    ts.clamp(i128::from(Timestamp::MIN), i128::from(Timestamp::MAX)) as Timestamp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_window_clamps_and_orders() {
        assert_eq!(ZoomWindow::new(-5.0, 120.0), ZoomWindow::FULL);
        let swapped = ZoomWindow::new(70.0, 30.0);
        assert_eq!(swapped.start_pct, 30.0);
        assert_eq!(swapped.end_pct, 70.0);
        assert_eq!(ZoomWindow::new(f64::NAN, f64::NAN), ZoomWindow::FULL);
    }

    #[test]
    fn padding_is_one_day_of_range() {
        assert_eq!(window_padding_pct(MS_PER_DAY), Some(100.0));
        assert_eq!(window_padding_pct(10 * MS_PER_DAY), Some(10.0));
        assert_eq!(window_padding_pct(0), None);
    }

    #[test]
    fn offset_ts_saturates_and_keeps_endpoints_exact() {
        let range = i128::from(i64::MAX) * 2;
        assert_eq!(offset_ts(0, 0.0, range), 0);
        assert_eq!(offset_ts(0, 100.0, range), i64::MAX);
        assert_eq!(offset_ts(i64::MIN, 100.0, range), i64::MAX - 1);
        assert_eq!(offset_ts(-10, 100.0, 25), 15);
    }

    #[test]
    fn sentinels_order_past_before_future() {
        assert!(PAST_SENTINEL_MS < 0);
        assert!(PAST_SENTINEL_MS < FUTURE_SENTINEL_MS);
    }
}
