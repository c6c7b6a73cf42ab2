//! Per-employee HR event records.
//!
//! Field names follow the wire format of the HR data files exactly. Dates are
//! kept as the raw strings found in the data and parsed on access, so a
//! malformed value is reported with the employee, record kind and field it
//! came from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::parse_date;
use crate::error::EngineResult;

/// A leave taken by an employee. The date range is inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    /// The kind of leave (e.g. "Casual Leave").
    #[serde(rename = "Leave_Type")]
    pub leave_type: String,
    /// Number of days taken.
    #[serde(rename = "Leave_Days")]
    pub days: u32,
    /// First day of leave, as written in the source data.
    #[serde(rename = "Leave_Start_Date")]
    pub start_date: String,
    /// Last day of leave, as written in the source data.
    #[serde(rename = "Leave_End_Date")]
    pub end_date: String,
}

impl Leave {
    /// Parses the first day of leave.
    pub fn start(&self, employee_id: &str) -> EngineResult<NaiveDate> {
        parse_date(employee_id, "Leave", "Leave_Start_Date", &self.start_date)
    }

    /// Parses the last day of leave.
    pub fn end(&self, employee_id: &str) -> EngineResult<NaiveDate> {
        parse_date(employee_id, "Leave", "Leave_End_Date", &self.end_date)
    }
}

/// A performance review.
///
/// `review_period` is free text such as "H1 2023" or "Annual 2023". It is
/// ordered lexically wherever "latest" or "history" order is needed, which
/// only approximates chronology within a single year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// The review cycle label.
    #[serde(rename = "Review_Period")]
    pub review_period: String,
    /// The numeric rating given in the review.
    #[serde(rename = "Performance_Rating")]
    pub rating: f64,
    /// Free-text manager feedback.
    #[serde(rename = "Manager_Feedback")]
    pub manager_feedback: String,
    /// Whether the employee is being considered for promotion.
    #[serde(rename = "Promotion_Consideration", with = "super::flag")]
    pub promotion_consideration: bool,
}

/// An award granted to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    /// The award name.
    #[serde(rename = "Award_Type")]
    pub award_type: String,
    /// The date the award was granted, as written in the source data.
    #[serde(rename = "Award_Date")]
    pub award_date: String,
    /// Reward points attached to the award.
    #[serde(rename = "Reward_Points")]
    pub reward_points: i64,
}

impl Award {
    /// Parses the award date.
    pub fn date(&self, employee_id: &str) -> EngineResult<NaiveDate> {
        parse_date(employee_id, "Award", "Award_Date", &self.award_date)
    }
}

/// A sentiment survey response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    /// The date of the response, as written in the source data.
    #[serde(rename = "Response_Date")]
    pub response_date: String,
    /// The integer vibe score.
    #[serde(rename = "Vibe_Score")]
    pub vibe_score: i64,
    /// Free-text emotional tenor label (e.g. "Happy Zone").
    #[serde(rename = "Emotion_Zone")]
    pub emotion_zone: String,
}

impl Sentiment {
    /// Parses the response date.
    pub fn date(&self, employee_id: &str) -> EngineResult<NaiveDate> {
        parse_date(employee_id, "Sentiment", "Response_Date", &self.response_date)
    }
}

/// A day of collaboration activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// The activity date, as written in the source data.
    #[serde(rename = "Date")]
    pub date: String,
    /// Chat messages sent.
    #[serde(rename = "Teams_Messages_Sent")]
    pub messages_sent: u32,
    /// Emails sent.
    #[serde(rename = "Emails_Sent")]
    pub emails_sent: u32,
    /// Meetings attended.
    #[serde(rename = "Meetings_Attended")]
    pub meetings_attended: u32,
    /// Hours worked, kept exact.
    #[serde(rename = "Work_Hours", with = "rust_decimal::serde::float")]
    pub work_hours: Decimal,
}

impl Activity {
    /// Parses the activity date.
    pub fn parsed_date(&self, employee_id: &str) -> EngineResult<NaiveDate> {
        parse_date(employee_id, "Activity", "Date", &self.date)
    }
}
