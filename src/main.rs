use marketlens::advisor::{AdvisoryGenerator, OpenAiBackend};
use marketlens::config::{load_config, AppConfig, ConfigError};
use marketlens::server::{run_server, AppState};
use marketlens::service::AnalysisService;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {panic_info:?}");
    }));

    dotenvy::dotenv().ok();

    // Load configuration from file; a missing file just means defaults
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(ConfigError::Io(_)) => {
            info!("No config.json found, running with defaults");
            AppConfig::default()
        }
        Err(e) => {
            error!("Config load error: {e}");
            return;
        }
    };

    let api_key = config.resolve_api_key();
    if api_key.is_none() {
        warn!("No OpenAI API key configured; advisories will use the fallback");
    }

    let backend = OpenAiBackend::new(&config.openai, api_key);
    let advisor = AdvisoryGenerator::new(Arc::new(backend), config.advisory_keywords.clone());
    let service = AnalysisService::new(advisor);
    let state = Arc::new(AppState { service });

    info!("🚀 MarketLens starting...");
    if let Err(e) = run_server(&config.server, state).await {
        error!("Server error: {e}");
    }
}
