//! Date parsing, overlap testing and calendar-month bucketing.
//!
//! Every aggregator goes through these helpers. Dates are compared at day
//! granularity.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, EngineResult};

/// Date formats found in HR data files, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Date-time formats whose date part is used.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a date field from the source data.
///
/// Accepts ISO dates (`2024-04-14`), US dates (`2/17/2024`) and ISO or
/// RFC 3339 date-times, whose date part is kept. Years must have four digits.
///
/// # Errors
///
/// Returns [`EngineError::MalformedDate`] naming the employee, record kind,
/// field and raw value when no format matches. There is no fallback date.
///
/// # Example
///
/// ```
/// use workforce_analytics::analytics::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("EMP0125", "Leave", "Leave_Start_Date", "2/17/2024").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 17).unwrap());
///
/// assert!(parse_date("EMP0125", "Leave", "Leave_Start_Date", "soon").is_err());
/// ```
pub fn parse_date(
    employee_id: &str,
    entity: &str,
    field: &str,
    raw: &str,
) -> EngineResult<NaiveDate> {
    let value = raw.trim();

    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
        // `%Y` accepts any digit count, so "2/17/24" would otherwise be year 24.
        .filter(|date| (1000..=9999).contains(&date.year()));

    parsed.ok_or_else(|| EngineError::MalformedDate {
        employee_id: employee_id.to_string(),
        entity: entity.to_string(),
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// Returns true iff `instant` falls within `[start, end]`, inclusive on both ends.
///
/// # Example
///
/// ```
/// use workforce_analytics::analytics::overlaps;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 2, 17).unwrap();
/// assert!(overlaps(day, day, day));
/// ```
pub fn overlaps(start: NaiveDate, end: NaiveDate, instant: NaiveDate) -> bool {
    start <= instant && instant <= end
}

/// Maps a date to its `"{year}-{month}"` bucket key. The month is not zero-padded.
///
/// # Example
///
/// ```
/// use workforce_analytics::analytics::month_bucket_key;
/// use chrono::NaiveDate;
///
/// assert_eq!(month_bucket_key(NaiveDate::from_ymd_opt(2024, 4, 14).unwrap()), "2024-4");
/// assert_eq!(month_bucket_key(NaiveDate::from_ymd_opt(2023, 11, 4).unwrap()), "2023-11");
/// ```
pub fn month_bucket_key(date: NaiveDate) -> String {
    format!("{}-{}", date.year(), date.month())
}

/// Subtracts whole calendar months, clamping to the last day of the target month.
///
/// Returns [`NaiveDate::MIN`] if the result would fall before the supported range.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(NaiveDate::MIN)
}
