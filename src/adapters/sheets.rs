use crate::core::{ConfigProvider, SheetStore};
use crate::utils::error::{Result, SurplusError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use url::Url;

/// Google Sheets v4 `spreadsheets.values` client.
///
/// Built once at startup and shared by reference with everything that needs the spreadsheet.
#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    client: Client,
    base: Url,
    spreadsheet_id: String,
    access_token: String,
}

#[derive(Serialize)]
struct AppendBody<'a> {
    #[serde(rename = "majorDimension")]
    major_dimension: &'static str,
    values: [&'a [i64]; 1],
}

#[derive(Deserialize)]
struct ValueRange {
    // the API leaves `values` out entirely for an empty range
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GoogleSheetsClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base = Url::parse(config.api_base()).map_err(|e| SurplusError::InvalidConfigValueError {
            field: "spreadsheet.api_base".to_string(),
            value: config.api_base().to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base,
            spreadsheet_id: config.spreadsheet_id().to_string(),
            access_token: config.access_token().to_string(),
        })
    }

    fn values_url(&self, range: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SurplusError::ConfigError {
                message: format!("API base '{}' cannot hold a path", self.base),
            })?
            .pop_if_empty()
            .extend(["spreadsheets", self.spreadsheet_id.as_str(), "values", range]);
        Ok(url)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => envelope.error.message,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };

        tracing::debug!("Sheets API error {}: {}", status, message);
        Err(SurplusError::SheetError {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_values(&self, worksheet: &str) -> Result<Vec<Vec<serde_json::Value>>> {
        let url = self.values_url(worksheet)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        tracing::debug!("API response status: {}", response.status());

        let range: ValueRange = Self::check_status(response).await?.json().await?;
        Ok(range.values)
    }
}

fn cell_to_string(cell: &serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn cell_to_int(cell: &serde_json::Value) -> Option<i64> {
    match cell {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[async_trait]
impl SheetStore for GoogleSheetsClient {
    async fn append_row(&self, worksheet: &str, row: &[i64]) -> Result<()> {
        let url = self.values_url(&format!("{}:append", worksheet))?;
        tracing::debug!("Appending {} values via {}", row.len(), url);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&AppendBody {
                major_dimension: "ROWS",
                values: [row],
            })
            .send()
            .await?;
        tracing::debug!("API response status: {}", response.status());

        Self::check_status(response).await?;
        Ok(())
    }

    async fn read_last_row(&self, worksheet: &str) -> Result<Vec<i64>> {
        let rows = self.get_values(worksheet).await?;
        let last = rows.last().ok_or_else(|| SurplusError::EmptyWorksheet {
            worksheet: worksheet.to_string(),
        })?;

        let parsed: Option<Vec<i64>> = last.iter().map(cell_to_int).collect();
        let is_header = last.iter().all(|cell| cell_to_int(cell).is_none());
        match parsed {
            Some(values) if !values.is_empty() => Ok(values),
            // a lone header row means nothing has been recorded yet
            _ if rows.len() == 1 && is_header => Err(SurplusError::EmptyWorksheet {
                worksheet: worksheet.to_string(),
            }),
            _ => Err(SurplusError::MalformedRow {
                worksheet: worksheet.to_string(),
                message: format!(
                    "last row {:?} is not all whole numbers",
                    last.iter().map(cell_to_string).collect::<Vec<_>>()
                ),
            }),
        }
    }

    async fn read_all_rows(&self, worksheet: &str) -> Result<Vec<Vec<String>>> {
        let rows = self.get_values(worksheet).await?;
        Ok(rows
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }
}
