use entities::{album::Album, track::Track};
use log::debug;
use sqlx::{Pool, Sqlite};

pub async fn get_all_albums(pool: &Pool<Sqlite>) -> Result<Vec<Album>, sqlx::Error> {
    sqlx::query_as::<_, Album>("select * from albums order by id")
        .fetch_all(pool)
        .await
}

pub async fn get_album_by_id(
    pool: &Pool<Sqlite>,
    album_id: i64,
) -> Result<Option<Album>, sqlx::Error> {
    sqlx::query_as::<_, Album>("select * from albums where id = ?")
        .bind(album_id)
        .fetch_optional(pool)
        .await
}

pub async fn add_album(
    pool: &Pool<Sqlite>,
    title: &str,
    artist: &str,
) -> Result<i64, sqlx::Error> {
    let id: i64 =
        sqlx::query_scalar("insert into albums (title, artist) values (?, ?) returning id")
            .bind(title)
            .bind(artist)
            .fetch_one(pool)
            .await?;
    Ok(id)
}

pub async fn update_album(
    pool: &Pool<Sqlite>,
    album_id: i64,
    title: &str,
    artist: &str,
) -> Result<(), sqlx::Error> {
    let ret = sqlx::query(
        "update albums set title = ?, artist = ?, updated_at = CURRENT_TIMESTAMP where id = ?",
    )
    .bind(title)
    .bind(artist)
    .bind(album_id)
    .execute(pool)
    .await;
    ret?;
    Ok(())
}

pub async fn delete_album_by_id(pool: &Pool<Sqlite>, album_id: i64) -> Result<(), sqlx::Error> {
    let ret = sqlx::query("delete from tracks where album_id = ?")
        .bind(album_id)
        .execute(pool)
        .await?;
    debug!("Deleted {} tracks of album {}", ret.rows_affected(), album_id);

    let ret = sqlx::query("delete from albums where id = ?")
        .bind(album_id)
        .execute(pool)
        .await;
    ret?;
    Ok(())
}

pub async fn get_tracks_by_album_id(
    pool: &Pool<Sqlite>,
    album_id: i64,
) -> Result<Vec<Track>, sqlx::Error> {
    sqlx::query_as::<_, Track>("select * from tracks where album_id = ? order by id")
        .bind(album_id)
        .fetch_all(pool)
        .await
}

// Scoped on both ids so a track never resolves through the wrong album.
pub async fn get_track_by_album_and_id(
    pool: &Pool<Sqlite>,
    album_id: i64,
    track_id: i64,
) -> Result<Option<Track>, sqlx::Error> {
    sqlx::query_as::<_, Track>("select * from tracks where id = ? and album_id = ?")
        .bind(track_id)
        .bind(album_id)
        .fetch_optional(pool)
        .await
}

pub async fn add_track(
    pool: &Pool<Sqlite>,
    album_id: i64,
    title: &str,
    length_in_seconds: i64,
) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "insert into tracks (title, length_in_seconds, album_id) values (?, ?, ?) returning id",
    )
    .bind(title)
    .bind(length_in_seconds)
    .bind(album_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update_track(
    pool: &Pool<Sqlite>,
    album_id: i64,
    track_id: i64,
    title: &str,
    length_in_seconds: i64,
) -> Result<(), sqlx::Error> {
    let ret = sqlx::query(
        "update tracks set title = ?, length_in_seconds = ?, updated_at = CURRENT_TIMESTAMP where id = ? and album_id = ?",
    )
    .bind(title)
    .bind(length_in_seconds)
    .bind(track_id)
    .bind(album_id)
    .execute(pool)
    .await;
    ret?;
    Ok(())
}

pub async fn delete_track_by_id(
    pool: &Pool<Sqlite>,
    album_id: i64,
    track_id: i64,
) -> Result<(), sqlx::Error> {
    let ret = sqlx::query("delete from tracks where id = ? and album_id = ?")
        .bind(track_id)
        .bind(album_id)
        .execute(pool)
        .await;
    ret?;
    Ok(())
}
