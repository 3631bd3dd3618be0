use crate::negotiate::{LocaleRedirect, negotiate};
use axum::Json;
use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;
use serde_json::{Value, json};

/// Redirect the visitor to the localized site picked from `Accept-Language`.
///
/// Accepts any method and never fails: a missing or non-UTF-8 header is treated
/// as absent and negotiation falls back to the default locale.
pub async fn language_redirect(headers: HeaderMap) -> LocaleRedirect {
    let header = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
    let locale = negotiate(header);
    tracing::debug!(header = header.unwrap_or(""), %locale, "negotiated landing locale");
    LocaleRedirect::new(locale)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
