use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use log::info;
use serde::Deserialize;
use sqlx::{Pool, Sqlite};

use entities::album::Album;

use crate::error::AppError;
use crate::forms::TrackForm;
use crate::views::track_pages;
use crate::views::with_notice;
use crate::AppState;

#[derive(Deserialize)]
pub struct NoticeQuery {
    notice: Option<String>,
}

// Every track route hangs off a parent album; resolve it first so a bad
// album id is a NotFound before any track work happens.
async fn find_album(pool: &Pool<Sqlite>, album_id: i64) -> Result<Album, AppError> {
    queries::get_album_by_id(pool, album_id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn index(
    State(state): State<AppState>,
    Path(album_id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, AppError> {
    let album = find_album(&state.pool, album_id).await?;
    let tracks = queries::get_tracks_by_album_id(&state.pool, album.id).await?;
    Ok(Html(track_pages::index(
        &album,
        &tracks,
        query.notice.as_deref(),
    )))
}

pub async fn show(
    State(state): State<AppState>,
    Path((album_id, id)): Path<(i64, i64)>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, AppError> {
    let album = find_album(&state.pool, album_id).await?;
    let track = queries::get_track_by_album_and_id(&state.pool, album.id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Html(track_pages::show(
        &album,
        &track,
        query.notice.as_deref(),
    )))
}

pub async fn new(
    State(state): State<AppState>,
    Path(album_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let album = find_album(&state.pool, album_id).await?;
    Ok(Html(track_pages::new(&album, &TrackForm::default(), None)))
}

pub async fn create(
    State(state): State<AppState>,
    Path(album_id): Path<i64>,
    Form(form): Form<TrackForm>,
) -> Result<Response, AppError> {
    let album = find_album(&state.pool, album_id).await?;
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(track_pages::new(&album, &form, Some(&errors))),
            )
                .into_response())
        }
    };
    let id = queries::add_track(&state.pool, album.id, &valid.title, valid.length_in_seconds)
        .await?;
    info!("Created track {} with id {} on album {}", valid.title, id, album.id);
    Ok(Redirect::to(&with_notice(
        &format!("/albums/{}/tracks", album.id),
        "Track was successfully created.",
    ))
    .into_response())
}

pub async fn edit(
    State(state): State<AppState>,
    Path((album_id, id)): Path<(i64, i64)>,
) -> Result<Html<String>, AppError> {
    let album = find_album(&state.pool, album_id).await?;
    let track = queries::get_track_by_album_and_id(&state.pool, album.id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let form = TrackForm {
        title: track.title.clone(),
        length_in_seconds: track.length_in_seconds.to_string(),
    };
    Ok(Html(track_pages::edit(&album, track.id, &form, None)))
}

pub async fn update(
    State(state): State<AppState>,
    Path((album_id, id)): Path<(i64, i64)>,
    Form(form): Form<TrackForm>,
) -> Result<Response, AppError> {
    let album = find_album(&state.pool, album_id).await?;
    let track = queries::get_track_by_album_and_id(&state.pool, album.id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(track_pages::edit(&album, track.id, &form, Some(&errors))),
            )
                .into_response())
        }
    };
    queries::update_track(
        &state.pool,
        album.id,
        track.id,
        &valid.title,
        valid.length_in_seconds,
    )
    .await?;
    Ok(Redirect::to(&with_notice(
        &format!("/albums/{}/tracks/{}", album.id, track.id),
        "Track was successfully updated.",
    ))
    .into_response())
}

pub async fn destroy(
    State(state): State<AppState>,
    Path((album_id, id)): Path<(i64, i64)>,
) -> Result<Redirect, AppError> {
    let album = find_album(&state.pool, album_id).await?;
    let track = queries::get_track_by_album_and_id(&state.pool, album.id, id)
        .await?
        .ok_or(AppError::NotFound)?;
    queries::delete_track_by_id(&state.pool, album.id, track.id).await?;
    info!("Destroyed track {} with id {}", track.title, track.id);
    Ok(Redirect::to(&with_notice(
        &format!("/albums/{}/tracks", album.id),
        "Track was successfully destroyed.",
    )))
}
