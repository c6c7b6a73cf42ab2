//! Configuration types for the analytics engine.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files in a data directory.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

use crate::analytics::DEFAULT_RECENTLY_JOINED_MONTHS;
use crate::models::RecordStore;

/// Engine settings from `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineSettings {
    /// Look-back window, in calendar months, for the recently-joined tag.
    #[serde(default = "default_recently_joined_months")]
    pub recently_joined_months: u32,
    /// Fixed evaluation date for status figures. Today is used when absent.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            recently_joined_months: DEFAULT_RECENTLY_JOINED_MONTHS,
            reference_date: None,
        }
    }
}

fn default_recently_joined_months() -> u32 {
    DEFAULT_RECENTLY_JOINED_MONTHS
}

/// Display details for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryProfile {
    /// The employee's display name.
    pub name: String,
    /// The employee's department.
    pub department: String,
}

/// Directory profiles from `directory.yaml`.
///
/// Employee records carry no names or departments, so the directory view
/// takes them from here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryConfig {
    /// Department for employees without a profile.
    #[serde(default = "default_department")]
    pub default_department: String,
    /// Profiles keyed by employee identifier.
    #[serde(default)]
    pub profiles: HashMap<String, DirectoryProfile>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            default_department: default_department(),
            profiles: HashMap::new(),
        }
    }
}

fn default_department() -> String {
    "Unknown".to_string()
}

impl DirectoryConfig {
    /// Returns the display name, falling back to `"Employee {id}"` with any
    /// `EMP` prefix removed.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_analytics::config::DirectoryConfig;
    ///
    /// let directory = DirectoryConfig::default();
    /// assert_eq!(directory.display_name("EMP0172"), "Employee 0172");
    /// ```
    pub fn display_name(&self, id: &str) -> String {
        match self.profiles.get(id) {
            Some(profile) => profile.name.clone(),
            None => format!("Employee {}", id.strip_prefix("EMP").unwrap_or(id)),
        }
    }

    /// Returns the department, falling back to the default department.
    pub fn department(&self, id: &str) -> &str {
        self.profiles
            .get(id)
            .map(|profile| profile.department.as_str())
            .unwrap_or(&self.default_department)
    }
}

/// Everything loaded from a data directory.
#[derive(Debug, Clone)]
pub struct WorkforceConfig {
    settings: EngineSettings,
    directory: DirectoryConfig,
    store: RecordStore,
}

impl WorkforceConfig {
    /// Creates a new WorkforceConfig from its component parts.
    pub fn new(settings: EngineSettings, directory: DirectoryConfig, store: RecordStore) -> Self {
        Self {
            settings,
            directory,
            store,
        }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the directory profiles.
    pub fn directory(&self) -> &DirectoryConfig {
        &self.directory
    }

    /// Returns the record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
