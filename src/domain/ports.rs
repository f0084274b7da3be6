use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A spreadsheet addressed by worksheet (tab) name.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Appends `row` below the last non-empty row of `worksheet`.
    async fn append_row(&self, worksheet: &str, row: &[i64]) -> Result<()>;

    /// Returns the last row of `worksheet` as integers.
    async fn read_last_row(&self, worksheet: &str) -> Result<Vec<i64>>;

    /// Returns every row of `worksheet`, header included, as displayed text.
    async fn read_all_rows(&self, worksheet: &str) -> Result<Vec<Vec<String>>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn spreadsheet_id(&self) -> &str;
    fn access_token(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn sales_worksheet(&self) -> &str;
    fn stock_worksheet(&self) -> &str;
    fn surplus_worksheet(&self) -> &str;
}
