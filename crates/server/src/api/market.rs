use std::sync::Arc;

use crate::{
    dto::{ApplicationDto, PurchaseDto, ReviewDto},
    state::{AppData, AppState},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jaunt::market;
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    pub route_id: String,
    pub buyer: String,
}

pub async fn purchase(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Response, StatusCode> {
    let mut data = state.data.write().await;
    let AppData { catalog, market } = &mut *data;
    let purchase = market
        .purchase(catalog, &request.route_id, &request.buyer)
        .map_err(error_code)?;
    Ok(Json(PurchaseDto::from(purchase)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub route_id: String,
    pub reviewer: String,
    pub rating: u8,
    pub comment: String,
}

pub async fn review(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReviewRequest>,
) -> Result<Response, StatusCode> {
    let mut data = state.data.write().await;
    let AppData { catalog, market } = &mut *data;
    let review = market
        .review(
            catalog,
            &request.route_id,
            &request.reviewer,
            request.rating,
            &request.comment,
        )
        .map_err(error_code)?;
    Ok(Json(ReviewDto::from(review)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct ApplicationRequest {
    pub nickname: String,
    pub description: String,
}

pub async fn apply(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ApplicationRequest>,
) -> Result<Response, StatusCode> {
    let mut data = state.data.write().await;
    let AppData { catalog, market } = &mut *data;
    let application = market
        .apply(catalog, &request.nickname, &request.description)
        .map_err(error_code)?;
    Ok(Json(ApplicationDto::from(application)).into_response())
}

pub async fn approve(
    Path(nickname): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut data = state.data.write().await;
    let AppData { catalog, market } = &mut *data;
    market.approve(catalog, &nickname).map_err(error_code)?;
    Ok(().into_response())
}

pub async fn reject(
    Path(nickname): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut data = state.data.write().await;
    data.market.reject(&nickname).map_err(error_code)?;
    Ok(().into_response())
}

pub async fn list_applications(
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let data = state.data.read().await;
    let result: Vec<_> = data
        .market
        .applications()
        .iter()
        .map(ApplicationDto::from)
        .collect();
    Ok(Json(result).into_response())
}

fn error_code(err: market::Error) -> StatusCode {
    error!("{err}");
    match err {
        market::Error::UnknownRoute(_) | market::Error::UnknownApplication(_) => {
            StatusCode::NOT_FOUND
        }
        market::Error::AlreadyOwned { .. }
        | market::Error::NicknameTaken(_)
        | market::Error::AlreadyDecided(_) => StatusCode::CONFLICT,
        market::Error::RatingOutOfRange(_) => StatusCode::BAD_REQUEST,
        market::Error::NotOwned { .. } => StatusCode::FORBIDDEN,
    }
}
