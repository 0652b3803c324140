use anyhow::{Context, Result};
use std::path::PathBuf;
use todoflow::config::Config;
use todoflow::logger::{init_file_logging, Logger};
use todoflow::session::EnvSessionProvider;
use todoflow::store::create_store;
use todoflow::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--generate-config") {
        let path = match args.get(1) {
            Some(path) => PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(&path);
    }

    let config = Config::load().context("Failed to load configuration")?;

    let logger = Logger::from_config(config.logging.enabled);
    if config.logging.enabled {
        let log_path = init_file_logging(log::LevelFilter::Debug)?;
        log::info!("Logging to {}", log_path.display());
    }

    let session = EnvSessionProvider::new(config.session.user_env.clone());
    let store = create_store(&config.store.store_type, &config.store.options)?;

    ui::run_app(&config, store, &session, logger).await
}
