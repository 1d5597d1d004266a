use clap::Parser;
use numcheck::utils::{logger, validation};
use numcheck::{
    format_response, parse_batch_items, BatchRunner, BatchStatistics, CheckError, CliConfig,
    Command, LookupRequest, Settings, WhatsappChecker,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting numcheck CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, settings).await {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command, settings: Settings) -> numcheck::Result<()> {
    let checker = WhatsappChecker::from_config(&settings)?;

    match command {
        Command::Check {
            number,
            country,
            callback,
        } => {
            warn_on_suspicious_input(&number, &country);

            let mut request = LookupRequest::new(number, country);
            if let Some(callback) = callback.filter(|c| !c.is_empty()) {
                if let Err(e) = validation::validate_url("callback", &callback) {
                    tracing::warn!("{}", e);
                }
                request = request.with_callback(callback);
            }

            let response = checker.check(&request).await?;
            println!("Result: {}", format_response(&response));
            if let Ok(raw) = serde_json::to_string_pretty(&response) {
                println!("Raw Response: {}", raw);
            }
        }
        Command::Batch {
            items, callback, ..
        } => {
            let requests = parse_batch_items(&items, callback.as_deref())?;
            if requests.is_empty() {
                return Err(CheckError::ConfigError {
                    message: "batch requires at least one number:country item".to_string(),
                });
            }
            for request in &requests {
                warn_on_suspicious_input(&request.number, &request.country);
            }

            let runner = BatchRunner::new(checker, settings.pacing_delay);
            let outcomes = runner.run(requests).await;

            println!("\n=== Results Summary ===");
            for (i, outcome) in outcomes.iter().enumerate() {
                match &outcome.response {
                    Some(response) => println!("{}. {}", i + 1, format_response(response)),
                    None => println!(
                        "{}. Error for {} ({}): {}",
                        i + 1,
                        outcome.request.number,
                        outcome.request.country,
                        outcome.error.as_deref().unwrap_or("unknown error")
                    ),
                }
            }

            let stats = BatchStatistics::from_outcomes(&outcomes);
            println!("\n=== Statistics ===");
            println!("Total Checks: {}", stats.total);
            println!("Successful: {}", stats.successful);
            println!("Failed: {}", stats.failed);
            println!("WhatsApp Yes: {}", stats.whatsapp_yes);
            println!("WhatsApp No: {}", stats.whatsapp_no);
        }
    }

    Ok(())
}

// Advisory checks from the interactive reference behavior; the request is
// sent regardless.
fn warn_on_suspicious_input(number: &str, country: &str) {
    if let Err(e) = validation::validate_phone_number(number) {
        tracing::warn!("{}", e);
    }
    if let Err(e) = validation::validate_country_code(country) {
        tracing::warn!("{}", e);
    } else if !validation::is_supported_country(country) {
        tracing::warn!(
            "Country '{}' is not in the documented supported list",
            country
        );
    }
}
