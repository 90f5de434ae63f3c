use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

// Form payloads here are a handful of short text fields.
const FORM_BODY_LIMIT: usize = 64 * 1024;

/// HTML forms can only submit GET and POST, so edit and delete forms carry a
/// `_method` field. This rewrites such a POST into the verb the router
/// expects before routing happens.
pub async fn method_override(request: Request, next: Next) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }
    let (mut parts, body) = request.into_parts();
    let bytes = match to_bytes(body, FORM_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };
    if let Some(method) = override_from_form(&bytes) {
        parts.method = method;
    }
    let request = Request::from_parts(parts, Body::from(bytes));
    next.run(request).await
}

fn override_from_form(body: &[u8]) -> Option<Method> {
    let body = std::str::from_utf8(body).ok()?;
    for pair in body.split('&') {
        if let Some(value) = pair.strip_prefix("_method=") {
            return match value.to_ascii_lowercase().as_str() {
                "patch" => Some(Method::PATCH),
                "put" => Some(Method::PUT),
                "delete" => Some(Method::DELETE),
                _ => None,
            };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_patch_and_delete() {
        assert_eq!(
            override_from_form(b"_method=patch&title=Brat"),
            Some(Method::PATCH)
        );
        assert_eq!(override_from_form(b"_method=delete"), Some(Method::DELETE));
    }

    #[test]
    fn ignores_plain_posts_and_unknown_verbs() {
        assert_eq!(override_from_form(b"title=Brat&artist=Charli+XCX"), None);
        assert_eq!(override_from_form(b"_method=teapot"), None);
    }
}
