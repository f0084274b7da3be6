use anyhow::Context;
use clap::Parser;
use sales_surplus::core::ConfigProvider;
use sales_surplus::core::history::{fetch_sales_history, render, OutputFormat};
use sales_surplus::utils::{logger, validation::Validate};
use sales_surplus::{CliConfig, GoogleSheetsClient};

#[derive(Parser)]
#[command(name = "show-sales")]
#[command(about = "Print every row of the sales worksheet")]
struct Args {
    #[command(flatten)]
    common: CliConfig,

    /// Output format: table or csv
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,

    /// Worksheet to print instead of the configured sales worksheet
    #[arg(long)]
    worksheet: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.common.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.common.verbose);
    }

    let config = args
        .common
        .resolve()
        .context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    let worksheet = args
        .worksheet
        .clone()
        .unwrap_or_else(|| config.sales_worksheet().to_string());

    let client = GoogleSheetsClient::new(&config)?;
    let rows = fetch_sales_history(&client, &worksheet)
        .await
        .with_context(|| format!("failed to read worksheet '{}'", worksheet))?;

    println!("Here is all the data from the {} worksheet.", worksheet);
    let mut output = std::io::stdout().lock();
    render(&rows, args.format, &mut output)?;

    Ok(())
}
