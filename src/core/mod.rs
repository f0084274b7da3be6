pub mod engine;
pub mod history;
pub mod sales_input;
pub mod surplus;

pub use crate::domain::model::{RunReport, SalesRecord, StockRecord, SurplusRecord, ITEM_COUNT};
pub use crate::domain::ports::{ConfigProvider, SheetStore};
pub use crate::utils::error::Result;
