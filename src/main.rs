use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use quavertrack_charts::changes::{Change, UpdateStatus, update_status};
use quavertrack_charts::config::ChartConfig;
use quavertrack_charts::fake_history;
use quavertrack_charts::hiscores::{NewScores, build_hiscores_series};
use quavertrack_charts::metrics::{Metric, trend_axis};
use quavertrack_charts::models::{
    ScoresResponse, StatsUpdate, UpdateData, parse_scores_json, parse_stats_history_json,
    parse_update_json,
};

struct Inputs {
    history: Vec<StatsUpdate>,
    scores: ScoresResponse,
    update: Option<UpdateData>,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::init();

    let cfg = ChartConfig::from_env();
    let paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    let inputs = if paths.is_empty() {
        log::info!(
            "no input files; generating {} days of demo data (seed {})",
            cfg.demo_days,
            cfg.demo_seed
        );
        let demo = fake_history::generate(
            cfg.mode,
            cfg.demo_days,
            cfg.demo_seed,
            Utc::now().naive_utc(),
        );
        Inputs {
            history: demo.history,
            scores: demo.scores,
            update: Some(demo.update),
        }
    } else {
        load_inputs(&paths)?
    };

    println!(
        "Mode: {} | Zoom: {:.0}%-{:.0}% | Snapshots: {}",
        cfg.mode.label(),
        cfg.zoom.start_pct,
        cfg.zoom.end_pct,
        inputs.history.len()
    );

    println!();
    println!("Trend axes");
    for metric in Metric::ALL {
        let axis = trend_axis(&inputs.history, metric, cfg.zoom);
        let dir = if axis.inverse { " (inverted)" } else { "" };
        println!(
            "  {:<28} {:>14.2} .. {:<14.2}{}",
            metric.label(),
            axis.min,
            axis.max,
            dir
        );
    }

    let delta = inputs.update.as_ref().map(|u| NewScores {
        scores: &u.new_scores,
        mode: cfg.mode,
    });
    let series = build_hiscores_series(&inputs.scores.scores, delta);
    println!();
    println!("Hiscores by grade");
    for grade_series in &series {
        println!(
            "  {:<3} {:>4} points ({} new)",
            grade_series.grade.label(),
            grade_series.data.len(),
            grade_series.new_result_count()
        );
    }

    let update_result = inputs.update.map(Ok);
    let last = inputs.history.last();
    println!();
    match update_status(update_result.as_ref(), last, cfg.mode) {
        UpdateStatus::Loading => println!("No update data"),
        UpdateStatus::Failed(message) => println!("{message}"),
        UpdateStatus::FirstUpdate => println!("First update for this player"),
        UpdateStatus::Changes { since, cells } => {
            println!("Changes since last update ({})", since.label());
            for cell in cells {
                let mark = match cell.change {
                    Change::Same => "=",
                    Change::Better => "^",
                    Change::Worse => "v",
                };
                println!(
                    "  {mark} {:<28} {} -> {} ({})",
                    cell.metric.label(),
                    cell.before,
                    cell.after,
                    cell.diff_label()
                );
            }
        }
    }

    Ok(())
}

fn load_inputs(paths: &[PathBuf]) -> Result<Inputs> {
    let read = |path: &PathBuf| {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    };

    let history = parse_stats_history_json(&read(&paths[0])?)
        .with_context(|| format!("parse {}", paths[0].display()))?;
    let scores = match paths.get(1) {
        Some(path) => parse_scores_json(&read(path)?)
            .with_context(|| format!("parse {}", path.display()))?,
        None => ScoresResponse::default(),
    };
    let update = match paths.get(2) {
        Some(path) => Some(
            parse_update_json(&read(path)?)
                .with_context(|| format!("parse {}", path.display()))?,
        ),
        None => None,
    };
    log::info!(
        "loaded {} snapshots, {} scores, update: {}",
        history.len(),
        scores.scores.len(),
        update.is_some()
    );

    Ok(Inputs {
        history,
        scores,
        update,
    })
}
