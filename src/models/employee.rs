//! Employee model and joining information.
//!
//! An [`Employee`] is the unit stored in the [`RecordStore`](super::RecordStore):
//! joining details plus five event collections, each in insertion order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Activity, Award, Leave, Performance, Sentiment};
use crate::analytics::parse_date;
use crate::error::EngineResult;

/// Onboarding details captured when an employee joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoiningInfo {
    /// The joining date, as written in the source data.
    #[serde(rename = "Joining_Date")]
    pub joining_date: String,
    /// Free-text onboarding feedback (e.g. "Good", "Average").
    #[serde(rename = "Onboarding_Feedback")]
    pub onboarding_feedback: String,
    /// Whether a mentor was assigned.
    #[serde(rename = "Mentor_Assigned", with = "super::flag")]
    pub mentor_assigned: bool,
    /// Whether initial training was completed.
    #[serde(rename = "Initial_Training_Completed", with = "super::flag")]
    pub training_completed: bool,
}

/// An employee and their HR event history.
///
/// The identifier is the key the employee is stored under; it is not part of
/// the serialized body and is filled in by the record store on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier (e.g. "EMP0125").
    #[serde(skip)]
    pub id: String,
    /// Joining details.
    #[serde(rename = "Joining_Info")]
    pub joining_info: JoiningInfo,
    /// Leaves taken.
    #[serde(rename = "Leaves", default)]
    pub leaves: Vec<Leave>,
    /// Performance reviews.
    #[serde(rename = "Performance", default)]
    pub performance: Vec<Performance>,
    /// Awards received.
    #[serde(rename = "Awards", default)]
    pub awards: Vec<Award>,
    /// Sentiment survey responses.
    #[serde(rename = "Sentiment", default)]
    pub sentiment: Vec<Sentiment>,
    /// Collaboration activity entries.
    #[serde(rename = "Activity", default)]
    pub activity: Vec<Activity>,
}

impl Employee {
    /// Parses the joining date.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_analytics::models::{Employee, JoiningInfo};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "EMP0125".to_string(),
    ///     joining_info: JoiningInfo {
    ///         joining_date: "2023-01-01".to_string(),
    ///         onboarding_feedback: "Good".to_string(),
    ///         mentor_assigned: false,
    ///         training_completed: true,
    ///     },
    ///     leaves: vec![],
    ///     performance: vec![],
    ///     awards: vec![],
    ///     sentiment: vec![],
    ///     activity: vec![],
    /// };
    /// assert_eq!(
    ///     employee.joining_date().unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    /// );
    /// ```
    pub fn joining_date(&self) -> EngineResult<NaiveDate> {
        parse_date(
            &self.id,
            "Joining_Info",
            "Joining_Date",
            &self.joining_info.joining_date,
        )
    }

    /// Returns true if the employee has received at least one award.
    pub fn has_awards(&self) -> bool {
        !self.awards.is_empty()
    }

    /// Parses every date the employee carries, failing on the first bad one.
    pub fn validate_dates(&self) -> EngineResult<()> {
        self.joining_date()?;
        for leave in &self.leaves {
            leave.start(&self.id)?;
            leave.end(&self.id)?;
        }
        for award in &self.awards {
            award.date(&self.id)?;
        }
        for sentiment in &self.sentiment {
            sentiment.date(&self.id)?;
        }
        for activity in &self.activity {
            activity.parsed_date(&self.id)?;
        }
        Ok(())
    }
}
