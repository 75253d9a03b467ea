use clap::Parser;
use excuse_bingo::adapters;
use excuse_bingo::core::ConfigProvider;
use excuse_bingo::utils::logger;
use excuse_bingo::{BingoEngine, CliConfig, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting excuse-bingo CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.num == 0 {
        tracing::warn!("--num 0: exporting empty documents");
    }

    let storage = LocalStorage::new(".".to_string());
    let exporters = config
        .export_formats()
        .into_iter()
        .map(adapters::exporter_for)
        .collect();

    let engine = BingoEngine::new(storage, config, exporters);

    match engine.run() {
        Ok(outputs) => {
            tracing::info!("✅ Export completed successfully!");
            for output in &outputs {
                tracing::info!("📁 Output saved to: {}", output);
            }
        }
        Err(e) => {
            tracing::error!("❌ Export failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
