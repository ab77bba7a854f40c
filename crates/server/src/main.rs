mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::{get, post};
use jaunt::{catalog::Catalog, feed::Feed};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let start_logo = include_str!("../start_logo.txt");
    println!("{}", start_logo);

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing feed zip");
        std::process::exit(1);
    }
    let path = std::path::Path::new(&args[1]).canonicalize().unwrap();

    info!("Loading data...");
    let now = Instant::now();
    let feed = Feed::new().from_zip(&path).unwrap();
    let catalog = Catalog::new().load_feed(feed).unwrap();
    let state = Arc::new(AppState::new(path, catalog));
    info!("Loading data took {:?}", now.elapsed());

    let app = axum::Router::new()
        .route("/search", get(api::search))
        .route("/routes", get(api::browse_routes))
        .route("/routes/count", get(api::count_routes))
        .route("/routes/{id}", get(api::route_detail))
        .route("/purchases", post(api::purchase))
        .route("/reviews", post(api::review))
        .route("/applications", get(api::list_applications).post(api::apply))
        .route("/applications/{nickname}/approve", post(api::approve))
        .route("/applications/{nickname}/reject", post(api::reject))
        .route("/feed/age", get(api::age))
        .route("/feed/fetch", get(api::fetch_url))
        .route("/feed/reload", post(api::reload))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
