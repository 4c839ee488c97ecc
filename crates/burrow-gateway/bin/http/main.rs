mod cli;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::HeaderValue;
use burrow_core::{MappingStore, WorkerContext};
use burrow_gateway::{telemetry, App, AppState};
use burrow_generator::{RandomGenerator, RandomGeneratorSettings};
use burrow_redirector::{CacheSettings, CachedReader, Redirector, Resolver, ResolverSettings};
use burrow_shortener::{Allocator, AllocatorSettings, ShortenerService};
use burrow_storage::{InMemoryStore, MySqlStore};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::cli::{StorageBackendArg, CLI};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;
    telemetry::init(config.log_format);

    let context = WorkerContext::new();
    info!(
        worker = %context,
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        "starting gateway server"
    );

    let generator = RandomGenerator::new(
        RandomGeneratorSettings::builder()
            .length(config.code_length)
            .build(),
    )?;

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(&config, Arc::new(InMemoryStore::new()), generator, context).await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let store = MySqlStore::connect(mysql_dsn)
                .await
                .context("failed to connect to MySQL")?;
            store.ping().await.context("MySQL did not answer ping")?;
            info!("connected to MySQL");
            store.ensure_schema().await?;

            let store = Arc::new(store);
            let served = run_server(&config, Arc::clone(&store), generator, context).await;

            info!("closing MySQL connection pool");
            store.close().await;
            served?;
        }
    }

    Ok(())
}

async fn run_server<S: MappingStore>(
    config: &CLI,
    store: Arc<S>,
    generator: RandomGenerator,
    context: WorkerContext,
) -> anyhow::Result<()> {
    let store_timeout = Duration::from_millis(config.store_timeout_ms);

    let allocator = Allocator::new(
        Arc::clone(&store),
        generator,
        AllocatorSettings::builder()
            .max_attempts(config.max_attempts)
            .store_timeout(store_timeout)
            .build(),
        context,
    );

    let resolver_settings = ResolverSettings::builder()
        .store_timeout(store_timeout)
        .build();
    let redirector: Arc<dyn Redirector> = if config.cache_capacity == 0 {
        Arc::new(Resolver::new(store, resolver_settings, context))
    } else {
        let reader = CachedReader::with_settings(
            store,
            CacheSettings::builder()
                .max_capacity(config.cache_capacity)
                .build(),
        );
        Arc::new(Resolver::new(reader, resolver_settings, context))
    };

    let mut state = AppState::new(Arc::new(ShortenerService::new(allocator)), redirector, context);
    if let Some(base) = &config.public_base_url {
        state = state.with_public_base_url(base.clone());
    }

    let allowed_origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .context("invalid allowed origin")?;

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state, allowed_origins))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
