mod handlers;
mod negotiate;

pub use negotiate::{
    CACHE_CONTROL, LanguagePreference, LocaleRedirect, negotiate, parse_accept_language,
    select_locale,
};

use crate::handlers::{health, language_redirect};
use axum::{
    Router,
    routing::{any, get},
};
use tower_http::cors::CorsLayer;

/// Mount the landing routes: the locale-negotiating redirect at the site root and
/// a health probe. Negotiation is stateless, so no shared state is attached.
pub fn init(router: Router) -> Router {
    router
        .route("/", any(language_redirect))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
}
