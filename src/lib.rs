//! Workforce Analytics Engine
//!
//! This crate aggregates per-employee HR records (leaves, performance
//! reviews, awards, sentiment responses and activity) into the
//! organization-wide figures and per-employee views an HR dashboard shows,
//! and serves them over a read-only HTTP API.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
