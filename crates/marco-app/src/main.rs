mod cli;
mod render;
mod repl;

use std::path::Path;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use marco_assist::{AssistClient, GatewayConfig, Session};
use marco_config::{CredentialStore, MarcoConfig};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config loads before logging so its level default can apply
    let config = match args.config.as_deref() {
        Some(path) => marco_config::toml_loader::load_from_path(Path::new(path)),
        None => marco_config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Config load failed, using defaults: {e}");
        MarcoConfig::default()
    });

    // Initialize logging
    let directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "marco=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Marco v{} starting", env!("CARGO_PKG_VERSION"));

    let mut service = config.service.clone();
    if let Some(url) = args.base_url {
        service.base_url = url;
    }
    tracing::info!("Assist service at {}", service.base_url);

    let gateway = AssistClient::new(
        GatewayConfig::new(service.base_url)
            .with_connect_timeout(Duration::from_secs(service.connect_timeout_secs))
            .with_request_timeout(Duration::from_secs(service.request_timeout_secs)),
    );

    let credential = match CredentialStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("cannot open credential store: {e}");
            std::process::exit(1);
        }
    };

    let mut session = Session::new(credential).with_history_limit(config.history.limit);

    // Startup probe; a failure leaves the session error surface set and the
    // REPL still opens (a saved key may let questions through regardless)
    match session.check_health(&gateway).await {
        Ok(report) => tracing::info!(
            status = %report.status,
            version = %report.version,
            llm_available = report.llm_available,
            "assist service reachable"
        ),
        Err(e) => tracing::warn!("assist service unreachable: {e}"),
    }

    if let Some(question) = args.ask {
        if !repl::ask_once(&mut session, &gateway, &question).await {
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = repl::run(&mut session, &gateway).await {
        tracing::error!("repl terminated: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
