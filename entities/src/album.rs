use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
