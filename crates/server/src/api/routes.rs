use std::sync::Arc;

use crate::{
    dto::{RouteDetailDto, RouteDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jaunt::{
    catalog::{Difficulty, RouteKind},
    search::{RouteFilter, compose_results, filtered_count},
    shared::{DurationUnit, normalize},
};
use serde::Deserialize;

/// Query-string shape of the filter. Aliases resolve through the same
/// tables as feed ingestion, an unknown alias is a client error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    q: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_duration: Option<f64>,
    max_duration: Option<f64>,
    duration_unit: Option<String>,
    min_points: Option<u32>,
    max_points: Option<u32>,
    difficulty: Option<String>,
    categories: Option<String>,
}

impl FilterParams {
    fn to_filter(&self) -> Result<RouteFilter, StatusCode> {
        let mut filter = RouteFilter::new();
        if let Some(alias) = self.kind.as_deref() {
            filter.kind = Some(RouteKind::from_alias(alias).ok_or(StatusCode::BAD_REQUEST)?);
        }
        if let Some(min_price) = self.min_price {
            filter.min_price = min_price.max(0.0);
        }
        if let Some(max_price) = self.max_price {
            filter.max_price = max_price.max(0.0);
        }
        if let Some(min_duration) = self.min_duration {
            filter.min_duration = min_duration.max(0.0);
        }
        if let Some(max_duration) = self.max_duration {
            filter.max_duration = max_duration.max(0.0);
        }
        if let Some(alias) = self.duration_unit.as_deref() {
            filter.duration_unit = DurationUnit::from_alias(alias).ok_or(StatusCode::BAD_REQUEST)?;
        }
        if let Some(min_points) = self.min_points {
            filter.min_points = min_points;
        }
        if let Some(max_points) = self.max_points {
            filter.max_points = max_points;
        }
        if let Some(alias) = self.difficulty.as_deref() {
            filter.difficulty = Some(Difficulty::from_alias(alias).ok_or(StatusCode::BAD_REQUEST)?);
        }
        if let Some(categories) = self.categories.as_deref() {
            filter.categories = categories
                .split(';')
                .map(normalize)
                .filter(|category| !category.is_empty())
                .collect();
        }
        Ok(filter)
    }
}

pub async fn browse_routes(
    Query(params): Query<FilterParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let filter = params.to_filter()?;
    let query = params.q.as_deref().unwrap_or_default();
    let data = state.data.read().await;
    let result: Vec<_> = compose_results(query, &filter, &data.catalog)
        .into_iter()
        .map(RouteDto::from)
        .collect();
    Ok(Json(result).into_response())
}

/// The filter badge count. Any `q` in the query string is ignored.
pub async fn count_routes(
    Query(params): Query<FilterParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let filter = params.to_filter()?;
    let data = state.data.read().await;
    let count = filtered_count(&filter, &data.catalog);
    Ok(count.to_string().into_response())
}

pub async fn route_detail(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let data = state.data.read().await;
    let Some(route) = data.catalog.route_by_id(&id) else {
        return Err(StatusCode::NOT_FOUND);
    };
    let detail = RouteDetailDto::from(route, &data.catalog, &data.market);
    Ok(Json(detail).into_response())
}
