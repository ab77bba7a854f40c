use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{LocationDto, RouteDto, UserDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jaunt::search::{LOCATION_RESULT_CAP, ROUTE_RESULT_CAP, USER_RESULT_CAP};

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(query) = params.get("q") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let kind = params.get("kind").map(String::as_str).unwrap_or("routes");
    let data = state.data.read().await;
    match kind {
        "routes" => {
            let count = count_param(&params, ROUTE_RESULT_CAP)?;
            let result: Vec<_> = data
                .catalog
                .search_routes(query)
                .into_iter()
                .take(count)
                .map(RouteDto::from)
                .collect();
            Ok(Json(result).into_response())
        }
        "locations" => {
            let count = count_param(&params, LOCATION_RESULT_CAP)?;
            let result: Vec<_> = data
                .catalog
                .search_locations(query)
                .into_iter()
                .take(count)
                .map(LocationDto::from)
                .collect();
            Ok(Json(result).into_response())
        }
        "users" => {
            let count = count_param(&params, USER_RESULT_CAP)?;
            let result: Vec<_> = data
                .catalog
                .search_users(query)
                .into_iter()
                .take(count)
                .map(UserDto::from)
                .collect();
            Ok(Json(result).into_response())
        }
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

/// `count` may lower the kind's cap, never raise it.
fn count_param(params: &HashMap<String, String>, cap: usize) -> Result<usize, StatusCode> {
    match params.get("count") {
        Some(value) => match value.parse::<usize>() {
            Ok(value) => Ok(value.min(cap)),
            Err(_) => Err(StatusCode::BAD_REQUEST),
        },
        None => Ok(cap),
    }
}
