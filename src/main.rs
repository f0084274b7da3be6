use clap::Parser;
use sales_surplus::utils::{logger, validation::Validate};
use sales_surplus::{CliConfig, GoogleSheetsClient, SurplusEngine, SurplusError, WorksheetNames};

#[derive(Parser)]
#[command(name = "sales-surplus")]
#[command(about = "Record market sales and the resulting stock surplus in a Google spreadsheet")]
struct Args {
    #[command(flatten)]
    common: CliConfig,
}

async fn run(args: &Args) -> Result<(), SurplusError> {
    let config = args.common.resolve()?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    // 建立一次，之後以參考傳遞
    let client = GoogleSheetsClient::new(&config)?;
    let engine = SurplusEngine::new(&client, WorksheetNames::from_config(&config));

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    engine.run(&mut input, &mut output).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if args.common.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.common.verbose);
    }

    tracing::info!("Starting sales-surplus");

    if let Err(e) = run(&args).await {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
