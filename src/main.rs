use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod catalog;
mod config;
mod handler;
mod http;
mod logger;
mod routing;
mod server;
mod store;

use routing::RouteKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Tokio runtime, sized by `server.workers` when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr().map_err(|e| {
        logger::log_error(&e);
        e
    })?;

    // The store is built here and handed to the handlers through state
    let catalog = cfg.catalog.variant.build();
    let state = Arc::new(config::AppState::new(&cfg, catalog));

    let listener = server::create_listener(addr).map_err(|e| {
        logger::log_error(&format!("Failed to bind {addr}: {e}"));
        e
    })?;

    logger::log_server_start(&addr, &cfg, state.catalog.len());
    log_endpoints(&state);

    server::run_server(
        listener,
        state,
        Arc::new(AtomicUsize::new(0)),
        server::signal::shutdown_signal(),
    )
    .await
}

fn log_endpoints(state: &config::AppState) {
    let collection = state.catalog.as_ref();
    for route in state.routes.routes() {
        match route.kind {
            RouteKind::Home => logger::log_endpoint("ANY", "/", "Service information"),
            RouteKind::List => logger::log_endpoint(
                "GET",
                collection.collection_path(),
                &format!("All {} records", collection.noun()),
            ),
            RouteKind::Lookup => logger::log_endpoint(
                "GET",
                &format!("{}/{{id}}", collection.collection_path()),
                &format!("One {} by id", collection.noun()),
            ),
        }
    }
}
