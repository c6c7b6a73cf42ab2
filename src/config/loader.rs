//! Data directory loading.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! settings, the directory profiles and the employee records from disk.

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, RecordStore};

use super::types::{DirectoryConfig, EngineSettings, WorkforceConfig};

/// Loads and provides access to a workforce data directory.
///
/// # Directory Structure
///
/// ```text
/// data/hr/
/// ├── settings.yaml   # Engine settings
/// ├── directory.yaml  # Names and departments per employee
/// └── employees.json  # Employee records keyed by identifier
/// ```
///
/// Every date in the employee records is checked while loading, so a
/// loaded store never reports `MalformedDate` later.
///
/// # Example
///
/// ```no_run
/// use workforce_analytics::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./data/hr")?;
/// println!("Loaded {} employees", loader.store().len());
/// # Ok::<(), workforce_analytics::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: WorkforceConfig,
}

impl ConfigLoader {
    /// Loads a data directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if any of the three files is missing
    /// - `ConfigParseError` if a file is not valid YAML/JSON, does not match
    ///   the record shape, or repeats an employee identifier
    /// - `MalformedDate` if any record date cannot be parsed
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("settings.yaml"))?;
        let directory = Self::load_yaml::<DirectoryConfig>(&path.join("directory.yaml"))?;
        let store = Self::load_json::<RecordStore>(&path.join("employees.json"))?;

        store.validate_dates()?;

        info!(
            path = %path.display(),
            employees = store.len(),
            profiles = directory.profiles.len(),
            "Loaded workforce data"
        );

        Ok(Self::from_config(WorkforceConfig::new(settings, directory, store)))
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: WorkforceConfig) -> Self {
        Self { config }
    }

    /// Builds a loader around in-memory employees with default settings.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmployee` if two employees share an identifier.
    pub fn from_employees(employees: Vec<Employee>) -> EngineResult<Self> {
        let store = RecordStore::from_employees(employees)?;
        Ok(Self::from_config(WorkforceConfig::new(
            EngineSettings::default(),
            DirectoryConfig::default(),
            store,
        )))
    }

    fn read(path: &Path) -> EngineResult<String> {
        fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let content = Self::read(path)?;
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Loads and parses a JSON file.
    fn load_json<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let content = Self::read(path)?;
        serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &WorkforceConfig {
        &self.config
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Returns the directory profiles.
    pub fn directory(&self) -> &DirectoryConfig {
        self.config.directory()
    }

    /// Returns the employee records.
    pub fn store(&self) -> &RecordStore {
        self.config.store()
    }

    /// Resolves the evaluation date for status figures.
    ///
    /// An explicit date wins, then the configured reference date, then
    /// today's date in UTC.
    pub fn evaluation_date(&self, as_of: Option<NaiveDate>) -> NaiveDate {
        as_of
            .or(self.settings().reference_date)
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    const SETTINGS: &str = "recently_joined_months: 3\n";
    const DIRECTORY: &str = "profiles: {}\n";

    fn data_path() -> &'static str {
        "./data/hr"
    }

    fn employee_json(id: &str, leave_end: &str) -> String {
        format!(
            r#""{id}": {{
    "Joining_Info": {{
      "Joining_Date": "2023-01-01",
      "Onboarding_Feedback": "Good",
      "Mentor_Assigned": "False",
      "Initial_Training_Completed": "True"
    }},
    "Leaves": [{{
      "Leave_Type": "Casual Leave",
      "Leave_Days": 2,
      "Leave_Start_Date": "2/17/2024",
      "Leave_End_Date": "{leave_end}"
    }}]
  }}"#
        )
    }

    /// Writes a throwaway data directory and returns its path.
    fn write_data_dir(settings: &str, directory: &str, employees: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("workforce-analytics-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("settings.yaml"), settings).unwrap();
        fs::write(dir.join("directory.yaml"), directory).unwrap();
        fs::write(dir.join("employees.json"), employees).unwrap();
        dir
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_load_sample_data() {
        let result = ConfigLoader::load(data_path());
        assert!(result.is_ok(), "Failed to load data: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.store().len(), 5);
        assert_eq!(loader.settings().recently_joined_months, 3);
    }

    #[test]
    fn test_sample_data_keeps_document_order() {
        let loader = ConfigLoader::load(data_path()).unwrap();
        let ids: Vec<&str> = loader.store().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["EMP0125", "EMP0491", "EMP0310", "EMP0172", "EMP0262"]);
    }

    #[test]
    fn test_sample_directory_profiles() {
        let loader = ConfigLoader::load(data_path()).unwrap();
        assert_eq!(loader.directory().display_name("EMP0310"), "Michael Chen");
        assert_eq!(loader.directory().department("EMP0310"), "Analytics");
        assert_eq!(loader.directory().department("EMP9999"), "Unknown");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("settings.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_written_directory() {
        let employees = format!("{{{}}}", employee_json("EMP0001", "2/18/2024"));
        let dir = write_data_dir(SETTINGS, DIRECTORY, &employees);

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.store().len(), 1);
        assert_eq!(loader.store().require("EMP0001").unwrap().leaves.len(), 1);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_malformed_leave_date_returns_error() {
        let employees = format!("{{{}}}", employee_json("EMP0001", "next week"));
        let dir = write_data_dir(SETTINGS, DIRECTORY, &employees);

        match ConfigLoader::load(&dir) {
            Err(EngineError::MalformedDate {
                employee_id,
                field,
                value,
                ..
            }) => {
                assert_eq!(employee_id, "EMP0001");
                assert_eq!(field, "Leave_End_Date");
                assert_eq!(value, "next week");
            }
            other => panic!("Expected MalformedDate error, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_broken_settings_returns_parse_error() {
        let employees = format!("{{{}}}", employee_json("EMP0001", "2/18/2024"));
        let dir = write_data_dir("recently_joined_months: [3\n", DIRECTORY, &employees);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("settings.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_duplicate_employee_returns_parse_error() {
        let employees = format!(
            "{{{},{}}}",
            employee_json("EMP0001", "2/18/2024"),
            employee_json("EMP0001", "2/19/2024")
        );
        let dir = write_data_dir(SETTINGS, DIRECTORY, &employees);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("employees.json"));
                assert!(message.contains("EMP0001"), "unexpected message: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_evaluation_date_prefers_explicit_date() {
        let loader = ConfigLoader::from_employees(vec![]).unwrap();
        let date = make_date("2024-02-17");
        assert_eq!(loader.evaluation_date(Some(date)), date);
    }

    #[test]
    fn test_evaluation_date_falls_back_to_reference_date() {
        let settings = EngineSettings {
            recently_joined_months: 3,
            reference_date: Some(make_date("2024-01-10")),
        };
        let loader = ConfigLoader::from_config(WorkforceConfig::new(
            settings,
            DirectoryConfig::default(),
            RecordStore::default(),
        ));

        assert_eq!(loader.evaluation_date(None), make_date("2024-01-10"));
        assert_eq!(
            loader.evaluation_date(Some(make_date("2024-02-17"))),
            make_date("2024-02-17")
        );
    }

    #[test]
    fn test_evaluation_date_defaults_to_today() {
        let loader = ConfigLoader::from_employees(vec![]).unwrap();
        assert_eq!(loader.evaluation_date(None), Utc::now().date_naive());
    }
}
