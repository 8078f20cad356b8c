use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chrono::NaiveDate;

use quavertrack_charts::fake_history;
use quavertrack_charts::hiscores::{NewScores, build_hiscores_series};
use quavertrack_charts::metrics::{Metric, metric_series, trend_axis};
use quavertrack_charts::models::{Mode, parse_scores_json, parse_stats_history_json};
use quavertrack_charts::time_series::{ZoomWindow, analyze_time_series};

fn demo() -> fake_history::DemoData {
    let end = NaiveDate::from_ymd_opt(2021, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date");
    fake_history::generate(Mode::Keys4, 365, 7, end)
}

fn bench_analyze_time_series(c: &mut Criterion) {
    let data = demo();
    let series = metric_series(&data.history, Metric::PerformanceRating);
    c.bench_function("analyze_time_series_zoomed", |b| {
        b.iter(|| {
            let out = analyze_time_series(black_box(&series), ZoomWindow::new(25.0, 75.0));
            black_box(out.offset);
        })
    });
}

fn bench_trend_axes(c: &mut Criterion) {
    let data = demo();
    c.bench_function("trend_axes_all_metrics", |b| {
        b.iter(|| {
            for metric in Metric::ALL {
                let axis = trend_axis(black_box(&data.history), metric, ZoomWindow::FULL);
                black_box(axis.max);
            }
        })
    });
}

fn bench_hiscores_merge(c: &mut Criterion) {
    let data = demo();
    c.bench_function("build_hiscores_series", |b| {
        b.iter(|| {
            let out = build_hiscores_series(
                black_box(&data.scores.scores),
                Some(NewScores {
                    scores: &data.update.new_scores,
                    mode: Mode::Keys4,
                }),
            );
            black_box(out.len());
        })
    });
}

fn bench_fixture_parse(c: &mut Criterion) {
    c.bench_function("stats_history_and_scores_parse", |b| {
        b.iter(|| {
            let history = parse_stats_history_json(black_box(STATS_HISTORY_JSON)).unwrap();
            let scores = parse_scores_json(black_box(SCORES_JSON)).unwrap();
            black_box((history.len(), scores.scores.len()));
        })
    });
}

criterion_group!(
    perf,
    bench_analyze_time_series,
    bench_trend_axes,
    bench_hiscores_merge,
    bench_fixture_parse
);
criterion_main!(perf);

static STATS_HISTORY_JSON: &str = include_str!("../tests/fixtures/stats_history.json");
static SCORES_JSON: &str = include_str!("../tests/fixtures/scores.json");
