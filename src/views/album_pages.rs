use entities::album::Album;

use crate::forms::{AlbumErrors, AlbumForm};
use crate::views::{escape_html, inline_error, layout, success_banner};

pub fn index(albums: &[Album], notice: Option<&str>) -> String {
    let mut rows = String::new();
    for album in albums {
        rows.push_str(&format!(
            r#"      <tr>
        <td>{title}</td>
        <td>{artist}</td>
        <td>
          <a href="/albums/{id}">Show</a>
          <a href="/albums/{id}/edit">Edit</a>
          <form action="/albums/{id}" method="post">
            <input type="hidden" name="_method" value="delete">
            <button type="submit">Delete</button>
          </form>
        </td>
      </tr>
"#,
            title = escape_html(&album.title),
            artist = escape_html(&album.artist),
            id = album.id,
        ));
    }
    let body = format!(
        r#"{banner}<h1>Albums</h1>
<table>
  <thead>
    <tr>
      <th>Title</th>
      <th>Artist</th>
      <th></th>
    </tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>
<a href="/albums/new">New Album</a>"#,
        banner = success_banner(notice),
        rows = rows,
    );
    layout("Albums", body)
}

pub fn show(album: &Album, notice: Option<&str>) -> String {
    let body = format!(
        r#"{banner}<h1>Album</h1>
<p>Title: {title}</p>
<p>Artist: {artist}</p>
<p>
  <a href="/albums/{id}/edit">Edit</a> |
  <a href="/albums/{id}/tracks">Tracklist</a>
</p>
<p><a href="/albums">Back</a></p>"#,
        banner = success_banner(notice),
        title = escape_html(&album.title),
        artist = escape_html(&album.artist),
        id = album.id,
    );
    layout("Album", body)
}

pub fn new(form: &AlbumForm, errors: Option<&AlbumErrors>) -> String {
    let body = format!(
        r#"<h1>New Album</h1>
<form action="/albums" method="post">
{fields}  <button type="submit">Create Album</button>
</form>
<a href="/albums">Back</a>"#,
        fields = form_fields(form, errors),
    );
    layout("New Album", body)
}

pub fn edit(album_id: i64, form: &AlbumForm, errors: Option<&AlbumErrors>) -> String {
    let body = format!(
        r#"<h1>Edit Album</h1>
<form action="/albums/{id}" method="post">
  <input type="hidden" name="_method" value="patch">
{fields}  <button type="submit">Update Album</button>
</form>
<a href="/albums">Back</a>"#,
        id = album_id,
        fields = form_fields(form, errors),
    );
    layout("Edit Album", body)
}

fn form_fields(form: &AlbumForm, errors: Option<&AlbumErrors>) -> String {
    format!(
        r#"  <div>
    <label for="album_title">Title</label>
    <input type="text" name="title" id="album_title" value="{title}" required>{title_error}
  </div>
  <div>
    <label for="album_artist">Artist</label>
    <input type="text" name="artist" id="album_artist" value="{artist}" required>{artist_error}
  </div>
"#,
        title = escape_html(&form.title),
        artist = escape_html(&form.artist),
        title_error = inline_error(errors.and_then(|e| e.title)),
        artist_error = inline_error(errors.and_then(|e| e.artist)),
    )
}
