use std::sync::Arc;

use clap::Parser;
use nearby_store::mongo::MongoRecordStore;
use nearby_store::ports::RecordStore;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nearby_api::config::ServerOptions;
use nearby_api::routes::create_router;
use nearby_api::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nearby_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = ServerOptions::parse();

    let store = match MongoRecordStore::connect(&options.store_config()).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to set up the record store client");
            std::process::exit(1);
        }
    };

    // The client is closed on every exit path, startup failure included.
    let result = run(&options, store.clone()).await;
    store.close().await;

    if let Err(e) = result {
        tracing::error!(error = %e, "server terminated with an error");
        std::process::exit(1);
    }
}

async fn run(options: &ServerOptions, store: MongoRecordStore) -> anyhow::Result<()> {
    // Serving without the index would void both the uniqueness and the
    // proximity-query guarantees, so index failure aborts startup.
    store.ensure_index().await?;

    let state = Arc::new(AppState::new(Arc::new(store)));
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = options.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, store_host = %options.store_host, "app is up and running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for the shutdown signal");
    }
}
