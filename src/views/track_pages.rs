use entities::album::Album;
use entities::track::Track;

use crate::forms::{TrackErrors, TrackForm};
use crate::views::{danger_banner, escape_html, inline_error, layout, success_banner};

pub fn index(album: &Album, tracks: &[Track], notice: Option<&str>) -> String {
    let mut rows = String::new();
    for track in tracks {
        rows.push_str(&format!(
            r#"      <tr>
        <td>{title}</td>
        <td>{length}</td>
        <td>
          <a href="/albums/{album_id}/tracks/{id}">Show</a>
          <a href="/albums/{album_id}/tracks/{id}/edit">Edit</a>
          <form action="/albums/{album_id}/tracks/{id}" method="post">
            <input type="hidden" name="_method" value="delete">
            <button type="submit">Delete</button>
          </form>
        </td>
      </tr>
"#,
            title = escape_html(&track.title),
            length = track.length_in_seconds,
            album_id = album.id,
            id = track.id,
        ));
    }
    let heading = format!("{} Tracks", album.title);
    let body = format!(
        r#"{banner}<h1>{heading}</h1>
<table>
  <thead>
    <tr>
      <th>Title</th>
      <th>Length</th>
      <th></th>
    </tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>
<a href="/albums/{album_id}/tracks/new">New Track</a>
<a href="/albums/{album_id}">Back to Album</a>"#,
        banner = success_banner(notice),
        heading = escape_html(&heading),
        rows = rows,
        album_id = album.id,
    );
    layout(&heading, body)
}

pub fn show(album: &Album, track: &Track, notice: Option<&str>) -> String {
    let body = format!(
        r#"{banner}<h1>Track</h1>
<p>Title: {title}</p>
<p>Length: {length}</p>
<p><a href="/albums/{album_id}/tracks">Back</a></p>"#,
        banner = success_banner(notice),
        title = escape_html(&track.title),
        length = track.length_in_seconds,
        album_id = album.id,
    );
    layout("Track", body)
}

pub fn new(album: &Album, form: &TrackForm, errors: Option<&TrackErrors>) -> String {
    let heading = format!("New Track for {}", album.title);
    let body = format!(
        r#"{banner}<h1>{heading}</h1>
<form action="/albums/{album_id}/tracks" method="post">
{fields}  <button type="submit">Create Track</button>
</form>
<a href="/albums/{album_id}/tracks">Back</a>"#,
        banner = length_banner(errors, "Error! Unable to create track."),
        heading = escape_html(&heading),
        album_id = album.id,
        fields = form_fields(form, errors),
    );
    layout(&heading, body)
}

pub fn edit(album: &Album, track_id: i64, form: &TrackForm, errors: Option<&TrackErrors>) -> String {
    let heading = format!("Edit Track for {}", album.title);
    let body = format!(
        r#"{banner}<h1>{heading}</h1>
<form action="/albums/{album_id}/tracks/{id}" method="post">
  <input type="hidden" name="_method" value="patch">
{fields}  <button type="submit">Update Track</button>
</form>
<a href="/albums/{album_id}/tracks">Back</a>"#,
        banner = length_banner(errors, "Error! Unable to update track."),
        heading = escape_html(&heading),
        album_id = album.id,
        id = track_id,
        fields = form_fields(form, errors),
    );
    layout(&heading, body)
}

// The numeric rule surfaces as a page-level banner; presence failures stay
// inline next to their field.
fn length_banner(errors: Option<&TrackErrors>, banner: &str) -> String {
    match errors.and_then(|e| e.length) {
        Some(message) => format!("{}<p>{}</p>\n", danger_banner(banner), escape_html(message)),
        None => String::new(),
    }
}

fn form_fields(form: &TrackForm, errors: Option<&TrackErrors>) -> String {
    format!(
        r#"  <div>
    <label for="track_title">Title</label>
    <input type="text" name="title" id="track_title" value="{title}" required>{title_error}
  </div>
  <div>
    <label for="track_length_in_seconds">Length in seconds</label>
    <input type="number" name="length_in_seconds" id="track_length_in_seconds" value="{length}" min="1" required>
  </div>
"#,
        title = escape_html(&form.title),
        length = escape_html(&form.length_in_seconds),
        title_error = inline_error(errors.and_then(|e| e.title)),
    )
}
