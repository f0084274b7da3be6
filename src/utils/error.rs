use thiserror::Error;

/// Why a line of operator input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{token}' is not an integer")]
    NonInteger { token: String },

    #[error("Exactly {expected} values required, you provided {got}")]
    WrongCount { got: usize, expected: usize },

    #[error("value {value} at position {position} is negative")]
    Negative { position: usize, value: i64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("stock has {stock_len} values but sales has {sales_len}")]
pub struct DimensionError {
    pub stock_len: usize,
    pub sales_len: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("surplus for item {position} does not fit: {stock} - {sales}")]
pub struct OverflowError {
    pub position: usize,
    pub stock: i64,
    pub sales: i64,
}

#[derive(Error, Debug)]
pub enum SurplusError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    Validation(#[from] ValidationError),

    #[error("Dimension mismatch: {0}")]
    Dimension(#[from] DimensionError),

    #[error("Arithmetic overflow: {0}")]
    Overflow(#[from] OverflowError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Spreadsheet API returned {status}: {message}")]
    SheetError { status: u16, message: String },

    #[error("Malformed row in worksheet '{worksheet}': {message}")]
    MalformedRow { worksheet: String, message: String },

    #[error("Worksheet '{worksheet}' has no data rows")]
    EmptyWorksheet { worksheet: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SurplusError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::SheetError { .. } => ErrorCategory::Network,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::Validation(_)
            | Self::Dimension(_)
            | Self::Overflow(_)
            | Self::MalformedRow { .. }
            | Self::EmptyWorksheet { .. }
            | Self::CsvError(_) => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 429 and 5xx usually clear up on their own
            Self::SheetError { status, .. } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            Self::ApiError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            Self::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::SheetError { status: 401, .. } | Self::SheetError { status: 403, .. } => {
                "Refresh the access token and check the service account can edit the spreadsheet"
            }
            Self::SheetError { status: 404, .. } => {
                "Check the spreadsheet id and that the worksheet tab exists"
            }
            Self::SheetError { .. } | Self::ApiError(_) => {
                "Check your network connection and try again in a moment"
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => {
                "Fix the configuration file or command-line overrides and run again"
            }
            Self::Validation(_) => "Enter six whole numbers separated by commas",
            Self::Dimension(_) | Self::MalformedRow { .. } | Self::EmptyWorksheet { .. } => {
                "Make sure the stock worksheet ends with a row of six numbers"
            }
            Self::Overflow(_) => "Check the stock and sales figures for typos; they are far too large",
            Self::CsvError(_) | Self::IoError(_) => {
                "Check the terminal or output stream is writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the spreadsheet: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Data problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SurplusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_count_message_names_the_count() {
        let err = ValidationError::WrongCount {
            got: 5,
            expected: 6,
        };
        assert_eq!(
            err.to_string(),
            "Exactly 6 values required, you provided 5"
        );
    }

    #[test]
    fn test_sheet_error_severity() {
        let unavailable = SurplusError::SheetError {
            status: 503,
            message: "backend".to_string(),
        };
        assert_eq!(unavailable.severity(), ErrorSeverity::Medium);
        assert_eq!(unavailable.exit_code(), 2);

        let forbidden = SurplusError::SheetError {
            status: 403,
            message: "denied".to_string(),
        };
        assert_eq!(forbidden.severity(), ErrorSeverity::High);
        assert_eq!(forbidden.category(), ErrorCategory::Network);
        assert!(forbidden.recovery_suggestion().contains("access token"));
    }

    #[test]
    fn test_dimension_error_is_data_problem() {
        let err: SurplusError = DimensionError {
            stock_len: 5,
            sales_len: 6,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err
            .user_friendly_message()
            .contains("stock has 5 values but sales has 6"));
    }

    #[test]
    fn test_overflow_is_data_problem() {
        let err: SurplusError = OverflowError {
            position: 0,
            stock: -2,
            sales: i64::MAX,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("-2 - 9223372036854775807"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: SurplusError =
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
