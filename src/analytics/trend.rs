//! Monthly sentiment trend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::temporal::month_bucket_key;
use crate::error::EngineResult;
use crate::models::RecordStore;

/// Mean vibe score for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// The `"{year}-{month}"` bucket key.
    pub bucket_key: String,
    /// Mean vibe score of the responses in the bucket.
    pub average: f64,
    /// Number of responses in the bucket.
    pub responses: usize,
}

/// Groups every sentiment entry by calendar month and averages each group.
///
/// Points are ordered by ascending lexical comparison of their bucket keys,
/// so `"2023-11"` sorts before `"2023-4"`. Keys are unique.
///
/// # Errors
///
/// Returns `MalformedDate` if any response date cannot be parsed.
pub fn sentiment_trend(store: &RecordStore) -> EngineResult<Vec<TrendPoint>> {
    let mut buckets: BTreeMap<String, (i128, usize)> = BTreeMap::new();

    for employee in store.iter() {
        for sentiment in &employee.sentiment {
            let key = month_bucket_key(sentiment.date(&employee.id)?);
            let (total, count) = buckets.entry(key).or_default();
            *total += i128::from(sentiment.vibe_score);
            *count += 1;
        }
    }

    Ok(buckets
        .into_iter()
        .map(|(bucket_key, (total, responses))| TrendPoint {
            bucket_key,
            average: total as f64 / responses as f64,
            responses,
        })
        .collect())
}
