use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grade::Grade;
use crate::models::{Mode, Score};
use crate::time_series::Timestamp;

/// Position of a plotted score in the array it came from. Non-negative values index the
/// historical scores, negative values encode `-(delta_position + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OriginIndex(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrigin {
    Historical(usize),
    Delta(usize),
}

impl OriginIndex {
    pub fn historical(position: usize) -> Self {
        Self(position as i64)
    }

    pub fn delta(position: usize) -> Self {
        Self(-(position as i64 + 1))
    }

    pub fn decode(self) -> RecordOrigin {
        if self.0 >= 0 {
            RecordOrigin::Historical(self.0 as usize)
        } else {
            RecordOrigin::Delta((-(self.0 + 1)) as usize)
        }
    }
}

impl From<RecordOrigin> for OriginIndex {
    fn from(origin: RecordOrigin) -> Self {
        match origin {
            RecordOrigin::Historical(pos) => OriginIndex::historical(pos),
            RecordOrigin::Delta(pos) => OriginIndex::delta(pos),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    Plain,
    // Result from the update that just ran, in a grade the player already had scores in.
    NewResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub ts: Timestamp,
    pub rating: f64,
    pub origin: OriginIndex,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSeries {
    pub grade: Grade,
    pub data: Vec<PlotPoint>,
}

impl GradeSeries {
    pub fn new_result_count(&self) -> usize {
        self.data
            .iter()
            .filter(|p| matches!(p.origin.decode(), RecordOrigin::Delta(_)))
            .count()
    }
}

/// Scores produced by an update that has not been merged into the historical set yet.
#[derive(Debug, Clone, Copy)]
pub struct NewScores<'a> {
    pub scores: &'a [Score],
    pub mode: Mode,
}

type GradeBuckets<'a> = HashMap<Grade, Vec<(&'a Score, OriginIndex)>>;

fn bucket_historical(historical: &[Score]) -> GradeBuckets<'_> {
    let mut buckets: GradeBuckets<'_> = HashMap::new();
    for (idx, score) in historical.iter().enumerate() {
        let Some(grade) = score.grade() else {
            log::debug!(
                "dropping historical score id={} with unknown grade {:?}",
                score.id,
                score.grade
            );
            continue;
        };
        buckets
            .entry(grade)
            .or_default()
            .push((score, OriginIndex::historical(idx)));
    }
    buckets
}

fn plot_point(score: &Score, origin: OriginIndex, marker: Marker) -> PlotPoint {
    PlotPoint {
        ts: score.timestamp_ms(),
        rating: score.performance_rating,
        origin,
        marker,
    }
}

/// Builds one scatter series per grade, always in `Grade::ALL` order. Delta scores are appended
/// after the historical ones and tagged with negative origin indices.
pub fn build_hiscores_series(historical: &[Score], delta: Option<NewScores<'_>>) -> Vec<GradeSeries> {
    let buckets = bucket_historical(historical);

    Grade::ALL
        .iter()
        .map(|&grade| {
            let mut data: Vec<PlotPoint> = buckets
                .get(&grade)
                .map(|entries| {
                    entries
                        .iter()
                        .map(|(score, origin)| plot_point(score, *origin, Marker::Plain))
                        .collect()
                })
                .unwrap_or_default();

            if let Some(delta) = delta {
                let marker = if data.is_empty() {
                    Marker::Plain
                } else {
                    Marker::NewResult
                };
                let mode_id = delta.mode.id();
                data.extend(
                    delta
                        .scores
                        .iter()
                        .enumerate()
                        .filter(|(_, s)| s.mode == mode_id && s.grade() == Some(grade))
                        .map(|(idx, s)| plot_point(s, OriginIndex::delta(idx), marker)),
                );
            }

            GradeSeries { grade, data }
        })
        .collect()
}

/// Looks a plotted point back up in the set it was built from.
pub fn resolve_origin<'a>(
    origin: OriginIndex,
    historical: &'a [Score],
    delta: &'a [Score],
) -> Option<&'a Score> {
    match origin.decode() {
        RecordOrigin::Historical(pos) => historical.get(pos),
        RecordOrigin::Delta(pos) => delta.get(pos),
    }
}
