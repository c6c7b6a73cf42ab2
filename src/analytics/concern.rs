//! Detection of employees whose latest sentiment needs attention.

use crate::error::EngineResult;
use crate::models::{Employee, RecordStore, Sentiment};

/// Emotion-zone substrings that flag a response (case-sensitive).
pub const CONCERN_ZONE_MARKERS: [&str; 2] = ["Frustrated", "Sad"];

/// Returns the employee's most recent sentiment response.
///
/// Among responses sharing the latest date the earliest inserted wins.
///
/// # Errors
///
/// Returns `MalformedDate` if any response date cannot be parsed.
pub fn latest_sentiment(employee: &Employee) -> EngineResult<Option<&Sentiment>> {
    let mut latest = None;
    for sentiment in &employee.sentiment {
        let date = sentiment.date(&employee.id)?;
        match latest {
            Some((best, _)) if date <= best => {}
            _ => latest = Some((date, sentiment)),
        }
    }
    Ok(latest.map(|(_, sentiment)| sentiment))
}

/// Returns true if an emotion zone label contains a concern marker.
///
/// # Example
///
/// ```
/// use workforce_analytics::analytics::needs_attention;
///
/// assert!(needs_attention("Frustrated Zone"));
/// assert!(needs_attention("Sad Zone"));
/// assert!(!needs_attention("Leaning to Happy Zone"));
/// assert!(!needs_attention("sad zone"));
/// ```
pub fn needs_attention(emotion_zone: &str) -> bool {
    CONCERN_ZONE_MARKERS
        .iter()
        .any(|marker| emotion_zone.contains(*marker))
}

/// Returns true if the employee's latest sentiment needs attention.
///
/// Employees with no sentiment responses never do.
pub fn employee_needs_attention(employee: &Employee) -> EngineResult<bool> {
    Ok(latest_sentiment(employee)?.is_some_and(|s| needs_attention(&s.emotion_zone)))
}

/// Lists the ids of employees needing attention, in store order.
///
/// # Errors
///
/// Propagates the first `MalformedDate` encountered.
pub fn list_concern_employees(store: &RecordStore) -> EngineResult<Vec<String>> {
    let mut concerns = Vec::new();
    for employee in store.iter() {
        if employee_needs_attention(employee)? {
            concerns.push(employee.id.clone());
        }
    }
    Ok(concerns)
}
