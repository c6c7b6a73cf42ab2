//! Core data models for the Workforce Analytics Engine.
//!
//! This module contains the employee records and the immutable
//! [`RecordStore`] every analytics operation reads from.

mod employee;
mod flag;
mod record_store;
mod records;

pub use employee::{Employee, JoiningInfo};
pub use record_store::RecordStore;
pub use records::{Activity, Award, Leave, Performance, Sentiment};
