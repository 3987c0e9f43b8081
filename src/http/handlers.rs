use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use super::AppState;
use crate::error::IsnadError;
use crate::graph::find_shortest_chain;
use crate::models::{NewIjaza, NewPerson, NewTransmission};
use crate::store;
use crate::tree::build_tree;

/// Map an error to a JSON response. Storage failures are logged here.
fn error_response(err: IsnadError) -> Response {
    let status = match &err {
        IsnadError::InvalidInput(_) | IsnadError::PersonNotFound(_) => StatusCode::BAD_REQUEST,
        IsnadError::ChainNotFound { .. } => StatusCode::NOT_FOUND,
        _ => {
            log::error!("Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> std::result::Result<T, Response> {
    serde_json::from_slice(body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": format!("Invalid JSON: {}", e) })),
        )
            .into_response()
    })
}

pub(super) async fn handle_list_persons(State(state): State<AppState>) -> Response {
    match store::list_persons(&state.db).await {
        Ok(persons) => Json(persons).into_response(),
        Err(e) => error_response(e),
    }
}

pub(super) async fn handle_create_person(State(state): State<AppState>, body: Bytes) -> Response {
    let new: NewPerson = match parse_body(&body) {
        Ok(b) => b,
        Err(response) => return response,
    };
    match store::insert_person(&state.db, new).await {
        Ok(person) => (StatusCode::CREATED, Json(person)).into_response(),
        Err(e) => error_response(e),
    }
}

pub(super) async fn handle_list_transmissions(State(state): State<AppState>) -> Response {
    match store::list_transmissions(&state.db).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => error_response(e),
    }
}

pub(super) async fn handle_create_transmission(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    let new: NewTransmission = match parse_body(&body) {
        Ok(b) => b,
        Err(response) => return response,
    };
    match store::insert_transmission(&state.db, new).await {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e) => error_response(e),
    }
}

pub(super) async fn handle_list_ijazas(State(state): State<AppState>) -> Response {
    match store::list_ijazas(&state.db).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => error_response(e),
    }
}

pub(super) async fn handle_create_ijaza(State(state): State<AppState>, body: Bytes) -> Response {
    let new: NewIjaza = match parse_body(&body) {
        Ok(b) => b,
        Err(response) => return response,
    };
    match store::insert_ijaza(&state.db, new).await {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /api/shortest?from=<id>&to=<id>`
pub(super) async fn handle_shortest(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let from = params.get("from").map(|s| s.trim()).unwrap_or_default();
    let to = params.get("to").map(|s| s.trim()).unwrap_or_default();

    if from.is_empty() || to.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "from and to parameters are required" })),
        )
            .into_response();
    }

    let edges = match store::load_edges(&state.db).await {
        Ok(edges) => edges,
        Err(e) => return error_response(e),
    };

    match find_shortest_chain(from, to, &edges) {
        Some(path) => {
            log::debug!("Chain {} → {}: {} persons", from, to, path.len());
            Json(serde_json::json!({ "path": path })).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": "No scholarly chain found between these persons" })),
        )
            .into_response(),
    }
}

/// `GET /api/generations`: persons layered into generations, with counts.
pub(super) async fn handle_generations(State(state): State<AppState>) -> Response {
    let persons = match store::list_persons(&state.db).await {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };
    let transmissions = match store::list_transmissions(&state.db).await {
        Ok(t) => t,
        Err(e) => return error_response(e),
    };

    Json(build_tree(&persons, &transmissions)).into_response()
}

pub(super) async fn handle_health() -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "service": "isnad",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
        .into_response()
}
