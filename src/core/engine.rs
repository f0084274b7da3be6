use crate::core::sales_input::prompt_sales;
use crate::core::{ConfigProvider, SheetStore};
use crate::domain::model::{RunReport, SalesRecord, StockRecord, SurplusRecord};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Tab names the engine reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetNames {
    pub sales: String,
    pub stock: String,
    pub surplus: String,
}

impl WorksheetNames {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            sales: config.sales_worksheet().to_string(),
            stock: config.stock_worksheet().to_string(),
            surplus: config.surplus_worksheet().to_string(),
        }
    }
}

impl Default for WorksheetNames {
    fn default() -> Self {
        Self {
            sales: "sales".to_string(),
            stock: "stock".to_string(),
            surplus: "surplus".to_string(),
        }
    }
}

/// One data-entry run: prompt, record sales, work out the surplus, record it.
pub struct SurplusEngine<'a, S: SheetStore> {
    store: &'a S,
    worksheets: WorksheetNames,
}

impl<'a, S: SheetStore> SurplusEngine<'a, S> {
    pub fn new(store: &'a S, worksheets: WorksheetNames) -> Self {
        Self { store, worksheets }
    }

    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<RunReport> {
        writeln!(output, "Welcome to Love Sandwiches Data Automation")?;

        let sales = prompt_sales(input, output)?;
        self.update_worksheet(&self.worksheets.sales, &sales.to_row(), output)
            .await?;

        let (stock, surplus) = self.calculate_surplus(&sales, output).await?;
        self.update_worksheet(&self.worksheets.surplus, &surplus.to_row(), output)
            .await?;

        writeln!(output, "{:?}", surplus.values())?;
        tracing::info!("Run complete, surplus {:?}", surplus.values());

        Ok(RunReport {
            sales,
            stock,
            surplus,
        })
    }

    async fn update_worksheet<W: Write>(&self, worksheet: &str, row: &[i64], output: &mut W) -> Result<()> {
        writeln!(output, "Updating {} worksheet...\n", worksheet)?;
        tracing::info!("Appending {:?} to worksheet '{}'", row, worksheet);

        self.store.append_row(worksheet, row).await?;

        writeln!(output, "{} worksheet updated successfully.\n", capitalize(worksheet))?;
        Ok(())
    }

    async fn calculate_surplus<W: Write>(
        &self,
        sales: &SalesRecord,
        output: &mut W,
    ) -> Result<(StockRecord, SurplusRecord)> {
        writeln!(output, "Calculating surplus data...\n")?;

        let stock_row = self.store.read_last_row(&self.worksheets.stock).await?;
        tracing::debug!(
            "Latest stock from '{}': {:?}",
            self.worksheets.stock,
            stock_row
        );

        // a stock row of the wrong width surfaces here as a DimensionError
        let stock = StockRecord::try_from(stock_row)?;
        let surplus = SurplusRecord::compute(&stock, sales)?;
        for value in surplus.values() {
            writeln!(output, "Surplus for item: {}", value)?;
        }
        writeln!(output)?;

        Ok((stock, surplus))
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
