pub mod album_pages;
pub mod track_pages;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn layout(title: &str, body: String) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        escape_html(title),
        body
    )
}

pub fn success_banner(notice: Option<&str>) -> String {
    match notice {
        Some(notice) => format!(
            "<div class=\"alert alert-success\">{}</div>\n",
            escape_html(notice)
        ),
        None => String::new(),
    }
}

pub fn danger_banner(message: &str) -> String {
    format!(
        "<div class=\"alert alert-danger\">{}</div>\n",
        escape_html(message)
    )
}

pub fn inline_error(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            " <span class=\"invalid-feedback\">{}</span>",
            escape_html(message)
        ),
        None => String::new(),
    }
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        format!("<h1>{}</h1>\n<a href=\"/albums\">Back</a>", escape_html(message)),
    )
}

/// Redirect target carrying the transient success banner as a query
/// parameter, so it survives the redirect without session state.
pub fn with_notice(path: &str, message: &str) -> String {
    format!("{}?notice={}", path, encode_query_component(message))
}

fn encode_query_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"Brat" & friends'</b>"#),
            "&lt;b&gt;&quot;Brat&quot; &amp; friends&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn notice_urls_are_percent_encoded() {
        assert_eq!(
            with_notice("/albums", "Album was successfully created."),
            "/albums?notice=Album%20was%20successfully%20created."
        );
    }
}
