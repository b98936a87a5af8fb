use anyhow::Result;
use locale_sync::batch::BatchRunner;
use locale_sync::cli::{self, Command};
use locale_sync::config::Config;
use locale_sync::error::SyncError;
use locale_sync::processor::{self, LanguageProcessor};
use locale_sync::translate::OpenAiTranslator;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_sync=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let catalog = config.catalog();
    let store = config.store();

    match Command::parse(std::env::args().skip(1)) {
        Command::Usage { error } => {
            if let Some(hint) = error {
                println!("{}\n", hint);
            }
            println!("{}", cli::usage(&catalog));
        }
        Command::List => {
            println!("{}", cli::render_list(&processor::list_languages(&catalog, &store)));
        }
        Command::Check(code) => match processor::check_missing(&catalog, &store, &code) {
            Ok(report) => println!("{}", cli::render_check(&report)),
            Err(e @ SyncError::UnsupportedLanguage { .. }) => {
                println!("{}\n", e);
                println!("{}", cli::usage(&catalog));
            }
            Err(e) => error!("Check failed: {}", e),
        },
        Command::Language(code) => {
            if catalog.get_by_code(&code).is_none() {
                println!("Unknown language '{}'\n", code);
                println!("{}", cli::usage(&catalog));
                return Ok(());
            }

            let processor = build_processor(&config)?;
            match processor.process(&code).await {
                Ok(true) => info!("{}: new keys translated", code),
                Ok(false) => info!("{}: already up to date", code),
                Err(e) => error!("Failed to process {}: {}", code, e),
            }
        }
        Command::All => {
            info!("Synchronizing catalogs in {}", config.locale_dir.display());
            let runner = BatchRunner::new(build_processor(&config)?, config.language_delay);
            if let Err(e) = runner.process_all().await {
                error!("Batch aborted: {}", e);
            }
        }
    }

    Ok(())
}

fn build_processor(config: &Config) -> Result<LanguageProcessor> {
    let translator = OpenAiTranslator::from_config(config)?;
    Ok(LanguageProcessor::new(
        config.catalog(),
        config.store(),
        Box::new(translator),
        config.leaf_delay,
    ))
}
