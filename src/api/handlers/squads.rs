use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::config::find_formation;
use crate::database::{self, DbConn};
use crate::domain::{SquadId, SquadPatch, SquadRecord};

fn connection(state: &AppState) -> ApiResult<DbConn> {
    state
        .pool
        .get()
        .map_err(|_| ApiError::Internal("DB Connection Error".to_string()))
}

fn not_found(id: SquadId) -> ApiError {
    ApiError::NotFound(format!("Squad {} not found", id))
}

fn validate_name(name: &str) -> ApiResult<()> {
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest("Squad name is required".to_string()));
    }
    Ok(())
}

fn validate_formation(formation: &str) -> ApiResult<()> {
    if find_formation(formation).is_none() {
        return Err(ApiError::BadRequest(format!(
            "Unknown formation: {}",
            formation
        )));
    }
    Ok(())
}

pub async fn list_squads(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<SquadRecord>>> {
    let mut conn = connection(&state)?;
    let squads = database::squads::list_all(&mut conn)?;
    Ok(Json(squads))
}

pub async fn get_squad(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SquadId>,
) -> ApiResult<Json<SquadRecord>> {
    let mut conn = connection(&state)?;
    database::squads::find_by_id(&mut conn, id)?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

pub async fn create_squad(
    State(state): State<Arc<AppState>>,
    Json(record): Json<SquadRecord>,
) -> ApiResult<impl IntoResponse> {
    validate_name(&record.name)?;
    validate_formation(&record.formation)?;

    let mut conn = connection(&state)?;
    let saved = database::squads::insert_squad(&mut conn, &record)?;
    log::info!("Created squad {:?} ({})", saved.id, saved.name);
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn update_squad(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SquadId>,
    Json(patch): Json<SquadPatch>,
) -> ApiResult<Json<SquadRecord>> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(formation) = &patch.formation {
        validate_formation(formation)?;
    }

    let mut conn = connection(&state)?;
    database::squads::update_squad(&mut conn, id, patch)?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

pub async fn delete_squad(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SquadId>,
) -> ApiResult<StatusCode> {
    let mut conn = connection(&state)?;
    if !database::squads::delete_squad(&mut conn, id)? {
        return Err(not_found(id));
    }
    log::info!("Deleted squad {}", id);
    Ok(StatusCode::NO_CONTENT)
}
