use std::collections::HashMap;

use chrono::{Duration as ChronoDuration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grade::Grade;
use crate::models::{Map, Mode, Score, ScoresResponse, StatsUpdate, UpdateData};

const FAKE_USER_ID: i64 = 19250;
const MAP_POOL: usize = 12;

#[derive(Debug, Clone)]
pub struct DemoData {
    pub history: Vec<StatsUpdate>,
    pub scores: ScoresResponse,
    pub update: UpdateData,
}

/// Synthetic history for `days` daily snapshots ending at `end`, plus an update that lands one
/// hour after the last snapshot. Same seed, same data.
pub fn generate(mode: Mode, days: u32, seed: u64, end: NaiveDateTime) -> DemoData {
    let mut rng = StdRng::seed_from_u64(seed);
    let days = days.max(2);
    let start = end - ChronoDuration::days(i64::from(days - 1));

    let maps = fake_maps();
    let mut history = Vec::with_capacity(days as usize);
    let mut prev = seed_snapshot(mode, start);
    for day in 0..days {
        let recorded_at = start + ChronoDuration::days(i64::from(day));
        let next = step_snapshot(&mut rng, &prev, recorded_at, i64::from(day) + 1);
        history.push(next.clone());
        prev = next;
    }

    let mut scores = Vec::new();
    for (idx, snapshot) in history.iter().enumerate() {
        let plays = rng.gen_range(0..4);
        for play in 0..plays {
            let time = snapshot.recorded_at - ChronoDuration::minutes(rng.gen_range(5..600));
            scores.push(fake_score(
                &mut rng,
                (idx * 4 + play) as i64 + 1,
                mode,
                time,
                snapshot.overall_performance_rating,
            ));
        }
    }

    let update_at = end + ChronoDuration::hours(1);
    let last = history.last().cloned().unwrap_or_else(|| seed_snapshot(mode, end));
    let other_mode = match mode {
        Mode::Keys4 => Mode::Keys7,
        Mode::Keys7 => Mode::Keys4,
    };
    let fresh = step_snapshot(&mut rng, &last, update_at, history.len() as i64 + 1);
    let other = seed_snapshot(other_mode, update_at);
    let (stats_4k, stats_7k) = match mode {
        Mode::Keys4 => (fresh, other),
        Mode::Keys7 => (other, fresh),
    };

    let base_id = scores.len() as i64 + 1000;
    let new_scores = (0..rng.gen_range(1..4))
        .map(|i| {
            let time = update_at - ChronoDuration::minutes(5 * (i + 1));
            fake_score(&mut rng, base_id + i, mode, time, last.overall_performance_rating)
        })
        .collect();

    DemoData {
        history,
        scores: ScoresResponse {
            maps: maps.clone(),
            scores,
        },
        update: UpdateData {
            stats_4k,
            stats_7k,
            maps,
            new_scores,
        },
    }
}

fn fake_maps() -> HashMap<i64, Map> {
    (0..MAP_POOL as i64)
        .map(|id| {
            let map = Map {
                id: id + 1,
                mapset_id: id / 3 + 1,
                md5: format!("{:032x}", id + 1),
                artist: format!("Artist {}", id / 3 + 1),
                title: format!("Song {}", id + 1),
                difficulty_name: ["Easy", "Normal", "Hard"][(id % 3) as usize].to_string(),
                creator_id: 1,
                creator_username: "mapper".to_string(),
                ranked_status: 2,
            };
            (map.id, map)
        })
        .collect()
}

fn seed_snapshot(mode: Mode, recorded_at: NaiveDateTime) -> StatsUpdate {
    StatsUpdate {
        id: 0,
        user_id: FAKE_USER_ID,
        recorded_at,
        mode: mode.id(),
        total_score: 1_000_000,
        ranked_score: 500_000,
        overall_accuracy: 88.0,
        overall_performance_rating: 40.0,
        play_count: 100,
        fail_count: 30,
        max_combo: 400,
        replays_watched: 0,
        total_marv: 20_000,
        total_perf: 12_000,
        total_great: 3_000,
        total_good: 1_000,
        total_okay: 400,
        total_miss: 2_500,
        total_pauses: 0,
        multiplayer_wins: 0,
        multiplayer_losses: 0,
        multiplayer_ties: 0,
        global_rank: 9_000,
        country_rank: 2_000,
        multiplayer_win_rank: 5_000,
    }
}

fn step_snapshot(
    rng: &mut StdRng,
    prev: &StatsUpdate,
    recorded_at: NaiveDateTime,
    id: i64,
) -> StatsUpdate {
    let plays = rng.gen_range(0..8);
    let fails = rng.gen_range(0..=plays / 2);
    let score_gain = plays * rng.gen_range(50_000..400_000);
    let rating_gain = f64::from(plays as u32) * rng.gen_range(0.0..0.4);
    let rank_gain = (rating_gain * 40.0) as i64;
    StatsUpdate {
        id,
        recorded_at,
        total_score: prev.total_score + score_gain,
        ranked_score: prev.ranked_score + score_gain / 2,
        overall_accuracy: (prev.overall_accuracy + rng.gen_range(-0.3..0.35)).clamp(0.0, 100.0),
        overall_performance_rating: prev.overall_performance_rating + rating_gain,
        play_count: prev.play_count + plays,
        fail_count: prev.fail_count + fails,
        max_combo: prev.max_combo.max(rng.gen_range(100..900)),
        global_rank: (prev.global_rank - rank_gain).max(1),
        country_rank: (prev.country_rank - rank_gain / 4).max(1),
        multiplayer_win_rank: prev.multiplayer_win_rank,
        ..prev.clone()
    }
}

fn fake_score(
    rng: &mut StdRng,
    id: i64,
    mode: Mode,
    time: NaiveDateTime,
    base_rating: f64,
) -> Score {
    let accuracy: f64 = rng.gen_range(70.0..100.0);
    let grade = grade_for_accuracy(accuracy);
    Score {
        id,
        user_id: FAKE_USER_ID,
        time,
        mode: mode.id(),
        mods: 0,
        mods_string: "None".to_string(),
        performance_rating: (base_rating / 2.0 * accuracy / 100.0).max(0.0),
        personal_best: rng.gen_bool(0.3),
        is_donator_score: false,
        total_score: (accuracy * 10_000.0) as i64,
        accuracy,
        grade: grade.label().to_string(),
        max_combo: rng.gen_range(50..1500),
        total_marv: 0,
        total_perf: 0,
        total_great: 0,
        total_good: 0,
        total_okay: 0,
        total_miss: rng.gen_range(0..40),
        scroll_speed: 20,
        ratio: 1.0,
        map_id: rng.gen_range(1..=MAP_POOL as i64),
    }
}

fn grade_for_accuracy(accuracy: f64) -> Grade {
    match accuracy {
        a if a >= 99.0 => Grade::SS,
        a if a >= 95.0 => Grade::S,
        a if a >= 90.0 => Grade::A,
        a if a >= 80.0 => Grade::B,
        a if a >= 70.0 => Grade::C,
        a if a >= 60.0 => Grade::D,
        _ => Grade::F,
    }
}
