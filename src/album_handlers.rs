use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use log::info;
use serde::Deserialize;

use crate::error::AppError;
use crate::forms::AlbumForm;
use crate::views::album_pages;
use crate::views::with_notice;
use crate::AppState;

#[derive(Deserialize)]
pub struct NoticeQuery {
    notice: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, AppError> {
    let albums = queries::get_all_albums(&state.pool).await?;
    Ok(Html(album_pages::index(&albums, query.notice.as_deref())))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, AppError> {
    let album = queries::get_album_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Html(album_pages::show(&album, query.notice.as_deref())))
}

pub async fn new() -> Html<String> {
    Html(album_pages::new(&AlbumForm::default(), None))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<AlbumForm>,
) -> Result<Response, AppError> {
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(album_pages::new(&form, Some(&errors))),
            )
                .into_response())
        }
    };
    let id = queries::add_album(&state.pool, &valid.title, &valid.artist).await?;
    info!("Created album {} with id {}", valid.title, id);
    Ok(Redirect::to(&with_notice("/albums", "Album was successfully created.")).into_response())
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let album = queries::get_album_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let form = AlbumForm {
        title: album.title.clone(),
        artist: album.artist.clone(),
    };
    Ok(Html(album_pages::edit(album.id, &form, None)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<AlbumForm>,
) -> Result<Response, AppError> {
    let album = queries::get_album_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(album_pages::edit(album.id, &form, Some(&errors))),
            )
                .into_response())
        }
    };
    queries::update_album(&state.pool, album.id, &valid.title, &valid.artist).await?;
    Ok(Redirect::to(&with_notice(
        &format!("/albums/{}", album.id),
        "Album was successfully updated.",
    ))
    .into_response())
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let album = queries::get_album_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    queries::delete_album_by_id(&state.pool, album.id).await?;
    info!("Destroyed album {} with id {}", album.title, album.id);
    Ok(Redirect::to(&with_notice(
        "/albums",
        "Album was successfully destroyed.",
    )))
}
