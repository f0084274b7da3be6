pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::sheets::GoogleSheetsClient;
pub use config::SheetsConfig;
pub use crate::core::engine::{SurplusEngine, WorksheetNames};
pub use utils::error::{DimensionError, OverflowError, Result, SurplusError, ValidationError};
