use crate::core::ConfigProvider;
use crate::utils::error::{Result, SurplusError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    pub spreadsheet: SpreadsheetConfig,
    #[serde(default)]
    pub worksheets: WorksheetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadsheetConfig {
    pub id: String,
    pub access_token: String,
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetConfig {
    #[serde(default = "default_sales")]
    pub sales: String,
    #[serde(default = "default_stock")]
    pub stock: String,
    #[serde(default = "default_surplus")]
    pub surplus: String,
}

fn default_sales() -> String {
    "sales".to_string()
}

fn default_stock() -> String {
    "stock".to_string()
}

fn default_surplus() -> String {
    "surplus".to_string()
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            sales: default_sales(),
            stock: default_stock(),
            surplus: default_surplus(),
        }
    }
}

impl SheetsConfig {
    /// Config with default API base, timeout and worksheet names.
    pub fn new(id: String, access_token: String) -> Self {
        Self {
            spreadsheet: SpreadsheetConfig {
                id,
                access_token,
                api_base: None,
                timeout_seconds: None,
            },
            worksheets: WorksheetConfig::default(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SurplusError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SurplusError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHEETS_ACCESS_TOKEN})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SurplusError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for SheetsConfig {
    fn api_base(&self) -> &str {
        self.spreadsheet.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet.id
    }

    fn access_token(&self) -> &str {
        &self.spreadsheet.access_token
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.spreadsheet
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    fn sales_worksheet(&self) -> &str {
        &self.worksheets.sales
    }

    fn stock_worksheet(&self) -> &str {
        &self.worksheets.stock
    }

    fn surplus_worksheet(&self) -> &str {
        &self.worksheets.surplus
    }
}

impl Validate for SheetsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("spreadsheet.api_base", self.api_base())?;
        validation::validate_non_empty_string("spreadsheet.id", &self.spreadsheet.id)?;

        // an unresolved ${VAR} is as good as no token
        if self.spreadsheet.access_token.trim().is_empty()
            || self.spreadsheet.access_token.starts_with("${")
        {
            return Err(SurplusError::MissingConfigError {
                field: "spreadsheet.access_token".to_string(),
            });
        }

        if let Some(timeout) = self.spreadsheet.timeout_seconds {
            validation::validate_range("spreadsheet.timeout_seconds", timeout, 1, 300)?;
        }

        validation::validate_worksheet_name("worksheets.sales", &self.worksheets.sales)?;
        validation::validate_worksheet_name("worksheets.stock", &self.worksheets.stock)?;
        validation::validate_worksheet_name("worksheets.surplus", &self.worksheets.surplus)?;

        Ok(())
    }
}
