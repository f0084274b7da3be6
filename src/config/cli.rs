use super::SheetsConfig;
use crate::utils::error::{Result, SurplusError};
use clap::Args;
use std::path::PathBuf;

/// Options shared by every binary: where the spreadsheet is and how to log.
#[derive(Debug, Clone, Args)]
pub struct CliConfig {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "surplus.toml")]
    pub config: PathBuf,

    /// Spreadsheet id, overrides `spreadsheet.id`
    #[arg(long, env = "SHEETS_SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// OAuth access token, overrides `spreadsheet.access_token`
    #[arg(long, env = "SHEETS_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Sheets API base URL, overrides `spreadsheet.api_base`
    #[arg(long)]
    pub api_base: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file, then applies command-line overrides.
    ///
    /// A missing file is fine as long as the overrides name the spreadsheet and token.
    pub fn resolve(&self) -> Result<SheetsConfig> {
        let mut config = if self.config.exists() {
            tracing::info!("📁 Loading configuration from: {}", self.config.display());
            SheetsConfig::from_file(&self.config)?
        } else {
            match (&self.spreadsheet_id, &self.access_token) {
                (Some(id), Some(token)) => {
                    tracing::debug!(
                        "No config file at {}, using command-line settings",
                        self.config.display()
                    );
                    SheetsConfig::new(id.clone(), token.clone())
                }
                _ => {
                    return Err(SurplusError::ConfigError {
                        message: format!(
                            "config file '{}' not found and --spreadsheet-id/--access-token not both given",
                            self.config.display()
                        ),
                    })
                }
            }
        };

        if let Some(id) = &self.spreadsheet_id {
            config.spreadsheet.id = id.clone();
        }
        if let Some(token) = &self.access_token {
            config.spreadsheet.access_token = token.clone();
        }
        if let Some(api_base) = &self.api_base {
            config.spreadsheet.api_base = Some(api_base.clone());
        }

        Ok(config)
    }
}
