mod cli;

use crate::cli::{LogFormatArg, StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trackapi_gateway::{App, AppState};
use trackapi_generator::UuidGenerator;
use trackapi_service::TrackService;
use trackapi_storage::{InMemoryRepository, MySqlRepository, Repository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;
    init_tracing(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        seed_sample_data = config.seed_sample_data,
        "starting gateway server"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(
                config.listen_addr,
                InMemoryRepository::new(),
                config.seed_sample_data,
            )
            .await
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect(&mysql_dsn)
                .await
                .context("failed to connect to mysql")?;
            repository
                .ensure_schema()
                .await
                .context("failed to create tracks table")?;
            run_server(config.listen_addr, repository, config.seed_sample_data).await
        }
    }
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormatArg::Text => builder.init(),
        LogFormatArg::Json => builder.json().init(),
    }
}

async fn run_server<R: Repository>(
    listen_addr: SocketAddr,
    repository: R,
    seed_sample_data: bool,
) -> anyhow::Result<()> {
    let service = TrackService::new(repository, UuidGenerator::new());

    if seed_sample_data {
        service
            .seed_sample_tracks()
            .await
            .context("failed to seed sample tracks")?;
    }

    let router = App::router(AppState::new(Arc::new(service)));
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
