use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::StreamExt;
use jaunt::{catalog::Catalog, feed::Feed};
use reqwest::header::ACCEPT_ENCODING;
use std::{collections::HashMap, fs, path::Path, sync::Arc};
use tokio::{fs::File, io::AsyncWriteExt};
use tracing::error;

pub async fn age(
    Query(_): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    if state.feed_path.exists() {
        let last_modified = seconds_since_modified(&state.feed_path)?;
        Ok(last_modified.to_string().into_response())
    } else {
        Err(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn seconds_since_modified<P: AsRef<Path>>(path: P) -> Result<u64, StatusCode> {
    let meta_data = fs::metadata(path).map_err(|err| {
        error!("Failed to get metadata: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let modified = meta_data.modified().map_err(|err| {
        error!("Failed to get modified: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let duration = modified.elapsed().map_err(|err| {
        error!("Failed to elapsed time since modified: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(duration.as_secs())
}

/// Downloads a fresh feed zip to the configured path and swaps the catalog
/// in. Market records survive the swap.
pub async fn fetch_url(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(q) = params.get("q") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let response = reqwest::Client::new()
        .get(q)
        .header(ACCEPT_ENCODING, "gzip, deflate")
        .send()
        .await
        .map_err(|err| {
            error!("Failed to fetch: {err}");
            StatusCode::BAD_REQUEST
        })?;

    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Response is not success: {body}");
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut file = File::create(&state.feed_path).await.map_err(|err| {
        error!("Failed to create file: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let data = chunk.map_err(|err| {
            error!("Failed to fetch chunk: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

        file.write_all(&data).await.map_err(|err| {
            error!("Failed to write to file: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    }

    file.flush().await.map_err(|err| {
        error!("Failed to flush file: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let catalog = build_catalog(&state)?;
    state.data.write().await.catalog = catalog;
    Ok(().into_response())
}

/// Rebuilds the catalog from the feed zip already on disk.
pub async fn reload(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let catalog = build_catalog(&state)?;
    state.data.write().await.catalog = catalog;
    Ok(().into_response())
}

fn build_catalog(state: &AppState) -> Result<Catalog, StatusCode> {
    let feed = Feed::new().from_zip(&state.feed_path).map_err(|err| {
        error!("Failed to open feed zip: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Catalog::new().load_feed(feed).map_err(|err| {
        error!("Failed to load feed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
