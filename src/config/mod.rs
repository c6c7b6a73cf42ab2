//! Data directory loading for the Workforce Analytics Engine.
//!
//! This module loads engine settings and directory profiles from YAML and
//! the employee records from JSON.
//!
//! # Example
//!
//! ```no_run
//! use workforce_analytics::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./data/hr").unwrap();
//! println!("Loaded {} employees", loader.store().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DirectoryConfig, DirectoryProfile, EngineSettings, WorkforceConfig};
