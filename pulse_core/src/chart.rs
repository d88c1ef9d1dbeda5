//! Emotion chart series derived from the journal.
//!
//! Recomputed in full from the entry list every time it changes. Each
//! entry contributes one point whose confidence and wellbeing values are
//! the mood's base value plus independent jitter, clamped to 0..=100.

use crate::mood::chart_value;
use crate::types::JournalEntry;
use rand::Rng;
use serde::Serialize;

/// Maximum number of points kept (most recent)
pub const SERIES_WINDOW: usize = 14;

/// Jitter half-width applied to each value
pub const JITTER: f64 = 5.0;

const SEED_POINTS: [(&str, f64, f64); 4] = [
    ("Apr 24", 65.0, 70.0),
    ("Apr 25", 60.0, 65.0),
    ("Apr 26", 70.0, 60.0),
    ("Apr 27", 75.0, 75.0),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmotionSample {
    pub date: String,
    pub confidence: f64,
    pub wellbeing: f64,
}

/// Seed points followed by one point per entry, in input order, trimmed to
/// the last [`SERIES_WINDOW`] points.
pub fn emotion_series<R: Rng + ?Sized>(journal: &[JournalEntry], rng: &mut R) -> Vec<EmotionSample> {
    let seeds = SEED_POINTS.iter().map(|(date, confidence, wellbeing)| EmotionSample {
        date: date.to_string(),
        confidence: *confidence,
        wellbeing: *wellbeing,
    });

    let total = SEED_POINTS.len() + journal.len();
    let mut series: Vec<EmotionSample> = seeds
        .chain(journal.iter().map(|entry| {
            let base = chart_value(entry.mood);
            EmotionSample {
                date: entry.date.format("%m-%d").to_string(),
                confidence: jittered(base, rng),
                wellbeing: jittered(base, rng),
            }
        }))
        .collect();

    if total > SERIES_WINDOW {
        series.drain(..total - SERIES_WINDOW);
    }
    series
}

/// Convenience wrapper using the thread-local generator
pub fn emotion_series_random(journal: &[JournalEntry]) -> Vec<EmotionSample> {
    emotion_series(journal, &mut rand::thread_rng())
}

fn jittered<R: Rng + ?Sized>(base: f64, rng: &mut R) -> f64 {
    (base + rng.gen_range(-JITTER..=JITTER)).clamp(0.0, 100.0)
}
