//! sitewatch Server Entry Point

use anyhow::Context;
use clap::Parser;
use sitewatch::auth::Credentials;
use sitewatch::cli::Cli;
use sitewatch::config::Config;
use sitewatch::health::{startup::run_startup_check, SiteChecker};
use sitewatch::query::SiteQuery;
use sitewatch::registry::{AvailabilityStore, RequestCounter};
use sitewatch::shutdown::ShutdownController;
use sitewatch::{logging, server, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init().map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    info!("sitewatch v{}", env!("CARGO_PKG_VERSION"));

    // 設定が読めなければスケジューリング前に終了する
    let config = Config::load(&cli.config_path)
        .with_context(|| format!("can't load config {}", cli.config_path.display()))?;
    let check = &config.availability_check;

    if config.http.auth_login.is_empty() {
        warn!("http.auth_login is empty; statistics API accepts empty credentials");
    }

    let availability = AvailabilityStore::new();
    let counter = RequestCounter::new(check.sites.as_slice()).await;

    let checker = SiteChecker::new(check.sites.clone(), availability.clone(), check.timeout())
        .context("failed to create HTTP client")?
        .with_interval(check.check_interval());

    // API公開前に一度チェックしておく
    run_startup_check(&checker).await;
    let checker_handle = checker.start();

    let state = AppState {
        query: SiteQuery::new(availability, counter),
        credentials: Credentials::new(
            config.http.auth_login.clone(),
            config.http.auth_password.clone(),
        ),
    };

    let result = server::run(
        state,
        &config.http.address,
        config.http.request_timeout(),
        ShutdownController::default(),
    )
    .await
    .with_context(|| format!("server error on {}", config.http.address));

    checker_handle.stop().await;
    result
}
