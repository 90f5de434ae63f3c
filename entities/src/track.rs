use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A track always belongs to exactly one album.
#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct Track {
    pub id: i64,
    pub title: String,
    pub length_in_seconds: i64,
    pub album_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
