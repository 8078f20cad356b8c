use quavertrack_charts::time_series::{
    FUTURE_SENTINEL_MS, MS_PER_DAY, PAST_SENTINEL_MS, TimePoint, VisibleRange, ZoomWindow,
    analyze_full, analyze_time_series, window_padding_pct,
};

fn daily(values: &[f64]) -> Vec<TimePoint> {
    values
        .iter()
        .enumerate()
        .map(|(day, v)| TimePoint::new(day as i64 * MS_PER_DAY, *v))
        .collect()
}

#[test]
fn empty_series_is_zeroed_and_reports_no_data() {
    let out = analyze_full(&[]);
    assert_eq!(out.min, 0.0);
    assert_eq!(out.max, 0.0);
    assert_eq!(out.offset, 0.0);
    assert_eq!(out.first.ts, FUTURE_SENTINEL_MS);
    assert_eq!(out.last.ts, PAST_SENTINEL_MS);
    assert!(out.last.ts < out.first.ts);
    assert!(!out.has_data());
}

#[test]
fn full_zoom_returns_true_extremes() {
    let series = daily(&[5.0, -2.0, 9.5, 3.0, 7.25]);
    let out = analyze_full(&series);
    assert_eq!(out.min, -2.0);
    assert_eq!(out.max, 9.5);
    assert!((out.offset - 0.575).abs() < 1e-12);
    assert_eq!(out.first, series[0]);
    assert_eq!(out.last, series[4]);
    assert_eq!(out.axis_bounds(), (out.min - out.offset, out.max + out.offset));
}

#[test]
fn one_day_range_ignores_zoom() {
    let series = vec![TimePoint::new(0, 10.0), TimePoint::new(MS_PER_DAY, 20.0)];
    assert_eq!(window_padding_pct(MS_PER_DAY), Some(100.0));

    let out = analyze_time_series(&series, ZoomWindow::new(40.0, 60.0));
    assert_eq!(out.min, 10.0);
    assert_eq!(out.max, 20.0);
    assert_eq!(
        out.visible,
        VisibleRange::Bounded {
            start: 0,
            end: MS_PER_DAY
        }
    );
}

#[test]
fn zoom_keeps_points_within_one_day_of_the_window() {
    let values: Vec<f64> = (0..100).map(|d| d as f64).collect();
    let series = daily(&values);

    let out = analyze_time_series(&series, ZoomWindow::new(50.0, 60.0));
    assert_eq!(out.min, 49.0);
    assert_eq!(out.max, 60.0);
    assert!((out.offset - 0.55).abs() < 1e-9);
}

#[test]
fn zoom_over_a_gap_yields_zero_range() {
    let series = vec![TimePoint::new(0, 4.0), TimePoint::new(100 * MS_PER_DAY, 8.0)];
    let out = analyze_time_series(&series, ZoomWindow::new(40.0, 60.0));
    assert_eq!(out.min, 0.0);
    assert_eq!(out.max, 0.0);
    assert_eq!(out.offset, 0.0);
    assert!(out.has_data());
}

#[test]
fn zero_time_range_includes_every_point() {
    let single = vec![TimePoint::new(1_600_000_000_000, 42.0)];
    let out = analyze_time_series(&single, ZoomWindow::new(10.0, 20.0));
    assert_eq!(out.visible, VisibleRange::Unbounded);
    assert_eq!((out.min, out.max, out.offset), (42.0, 42.0, 0.0));

    let same_instant = vec![
        TimePoint::new(1_600_000_000_000, 7.0),
        TimePoint::new(1_600_000_000_000, 3.0),
    ];
    let out = analyze_time_series(&same_instant, ZoomWindow::new(90.0, 95.0));
    assert_eq!((out.min, out.max), (3.0, 7.0));
    assert!(out.offset.is_finite());
}

#[test]
fn reversed_zoom_is_normalized() {
    let values: Vec<f64> = (0..100).map(|d| d as f64).collect();
    let series = daily(&values);
    let forward = analyze_time_series(&series, ZoomWindow::new(50.0, 60.0));
    let reversed = analyze_time_series(
        &series,
        ZoomWindow {
            start_pct: 60.0,
            end_pct: 50.0,
        },
    );
    assert_eq!(forward, reversed);
}

#[test]
fn range_wider_than_i64_does_not_overflow() {
    let first = i64::MIN / 2 - 10;
    let last = i64::MAX / 2 + 10;
    let series = [TimePoint::new(first, 1.0), TimePoint::new(last, 2.0)];

    let out = analyze_time_series(&series, ZoomWindow::new(0.0, 100.0));
    assert_eq!(out.min, 1.0);
    assert_eq!(out.max, 2.0);
    assert!((out.offset - 0.05).abs() < 1e-12);
    assert_eq!(
        out.visible,
        VisibleRange::Bounded {
            start: first,
            end: last
        }
    );
}

#[test]
fn zoom_over_extreme_timestamps_stays_in_range() {
    let series = [TimePoint::new(i64::MIN, 1.0), TimePoint::new(i64::MAX, 2.0)];

    let out = analyze_time_series(&series, ZoomWindow::new(10.0, 20.0));
    let VisibleRange::Bounded { start, end } = out.visible else {
        panic!("expected a bounded window, got {:?}", out.visible);
    };
    assert!(i64::MIN < start && start < end && end < i64::MAX);
    assert_eq!((out.min, out.max, out.offset), (0.0, 0.0, 0.0));

    let out = analyze_full(&series);
    assert_eq!((out.min, out.max), (1.0, 2.0));
    assert!(out.offset.is_finite());
}
