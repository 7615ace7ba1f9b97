use crate::error::{AppError, Result};
use crate::model::{TrackRequest, TrackResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use trackapi_core::TrackId;

pub async fn list_tracks_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrackResponse>>> {
    let tracks = state.tracks().get_all_tracks().await?;
    Ok(Json(tracks.into_iter().map(TrackResponse::from).collect()))
}

pub async fn get_track_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TrackResponse>> {
    let track = state
        .tracks()
        .get_track_by_id(&TrackId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(track.into()))
}

pub async fn create_track_handler(
    State(state): State<AppState>,
    Json(request): Json<TrackRequest>,
) -> Result<(StatusCode, Json<TrackResponse>)> {
    let track = state.tracks().create_track(request.into()).await?;
    info!(id = %track.id, "track created");
    Ok((StatusCode::CREATED, Json(track.into())))
}

pub async fn update_track_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<TrackRequest>,
) -> Result<Json<TrackResponse>> {
    let track = state
        .tracks()
        .update_track(&TrackId::new(id), request.into())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(track.into()))
}

pub async fn delete_track_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    let id = TrackId::new(id);
    if !state.tracks().delete_track(&id).await? {
        return Err(AppError::NotFound);
    }
    info!(id = %id, "track deleted");
    Ok(StatusCode::NO_CONTENT)
}
