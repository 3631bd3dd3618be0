use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use shared::models::Locale;
use std::cmp::Ordering;

/// Tags that select the Chinese site. Exact match only: regional variants outside
/// this list (e.g. "zh-mo") fall through to the default locale.
const CHINESE_TAGS: [&str; 6] = ["zh", "zh-cn", "zh-hans", "zh-hk", "zh-tw", "zh-sg"];

pub const CACHE_CONTROL: &str = "public, max-age=3600, s-maxage=86400";

/// One entry of an `Accept-Language` header after parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguagePreference {
    /// Lowercased language tag, e.g. "zh-cn".
    pub tag: String,
    /// Client-supplied q-value. 1.0 when omitted; NaN when present but unparsable.
    pub quality: f32,
}

/// Parse an `Accept-Language` header value into preferences ranked by quality,
/// highest first.
///
/// The sort is stable and NaN compares as equal to everything, so entries with
/// equal or malformed q-values keep their input order.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    if header.is_empty() {
        return Vec::new();
    }

    let mut prefs: Vec<LanguagePreference> = header
        .split(',')
        .map(|entry| {
            // Only the segment right after the first marker counts; anything
            // after a repeated ";q=" is ignored.
            let mut parts = entry.trim().split(";q=");
            let tag = parts.next().unwrap_or_default().to_lowercase();
            let quality = match parts.next() {
                Some(quality) => quality.parse().unwrap_or(f32::NAN),
                None => 1.0,
            };
            LanguagePreference { tag, quality }
        })
        .collect();

    prefs.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));
    prefs
}

/// Scan the ranked preferences in order; the first tag on the Chinese allow-list
/// selects the Chinese site, everything else falls back to English.
pub fn select_locale(prefs: &[LanguagePreference]) -> Locale {
    for pref in prefs {
        if CHINESE_TAGS.contains(&pref.tag.as_str()) {
            return Locale::Zh;
        }
    }
    Locale::En
}

/// Map an optional `Accept-Language` header value to the locale to serve.
///
/// Never fails: absent, empty or garbled headers all degrade to the default
/// locale rather than rejecting the request.
pub fn negotiate(header: Option<&str>) -> Locale {
    select_locale(&parse_accept_language(header.unwrap_or("")))
}

/// Cacheable 302 pointing at the localized site root. Empty body.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleRedirect {
    pub location: String,
    pub cache_control: &'static str,
}

impl LocaleRedirect {
    pub fn new(locale: Locale) -> Self {
        Self {
            location: locale.path(),
            cache_control: CACHE_CONTROL,
        }
    }
}

impl IntoResponse for LocaleRedirect {
    fn into_response(self) -> Response {
        (
            StatusCode::FOUND,
            [
                (header::LOCATION, self.location),
                (header::CACHE_CONTROL, self.cache_control.to_string()),
            ],
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_header_defaults_to_english() {
        assert_eq!(negotiate(None), Locale::En);
    }

    #[test]
    fn empty_header_defaults_to_english() {
        assert_eq!(negotiate(Some("")), Locale::En);
        assert!(parse_accept_language("").is_empty());
    }

    #[test]
    fn every_allow_listed_tag_selects_chinese() {
        for tag in ["zh", "zh-cn", "zh-hans", "zh-hk", "zh-tw", "zh-sg"] {
            assert_eq!(negotiate(Some(tag)), Locale::Zh, "tag {tag}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(negotiate(Some("zh-TW")), Locale::Zh);
        assert_eq!(negotiate(Some("ZH-Hans")), Locale::Zh);
    }

    #[test]
    fn unlisted_tags_never_match() {
        assert_eq!(negotiate(Some("fr-FR,de")), Locale::En);
        // Exact allow-list: no prefix matching for close variants.
        assert_eq!(negotiate(Some("zh-mo")), Locale::En);
    }

    #[test]
    fn higher_quality_chinese_outranks_english() {
        assert_eq!(negotiate(Some("en;q=0.5,zh;q=0.9")), Locale::Zh);
    }

    #[test]
    fn chinese_anywhere_in_the_ranked_list_still_matches() {
        // English outranks it, but the scan continues past unlisted tags.
        assert_eq!(negotiate(Some("zh;q=0.3,en;q=0.8")), Locale::Zh);
        assert_eq!(negotiate(Some("fr,de,zh-cn;q=0.1")), Locale::Zh);
    }

    #[test]
    fn entries_rank_descending_by_quality() {
        let prefs = parse_accept_language("en;q=0.5,zh;q=0.9,fr");
        let tags: Vec<&str> = prefs.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, ["fr", "zh", "en"]);
    }

    #[test]
    fn missing_quality_defaults_to_one() {
        let prefs = parse_accept_language("en-US, en;q=0.9");
        assert_eq!(prefs[0].tag, "en-us");
        assert_eq!(prefs[0].quality, 1.0);
        assert_eq!(prefs[1].quality, 0.9);
    }

    #[test]
    fn repeated_quality_markers_use_the_first_value() {
        let prefs = parse_accept_language("en;q=0.9;q=0.1");
        assert_eq!(prefs[0].tag, "en");
        assert_eq!(prefs[0].quality, 0.9);
        assert_eq!(negotiate(Some("zh;q=0.9;q=junk,en")), Locale::Zh);
    }

    #[test]
    fn ties_keep_input_order() {
        let prefs = parse_accept_language("fr,de,en");
        let tags: Vec<&str> = prefs.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, ["fr", "de", "en"]);
    }

    #[test]
    fn malformed_quality_keeps_input_position() {
        // NaN compares as equal to everything, so the stable sort leaves the
        // garbled entry where the client put it.
        let prefs = parse_accept_language("fr;q=abc,zh;q=0.9,de;q=0.1");
        let tags: Vec<&str> = prefs.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, ["fr", "zh", "de"]);
        assert!(prefs[0].quality.is_nan());
        assert_eq!(negotiate(Some("fr;q=abc,zh;q=0.9")), Locale::Zh);
    }

    #[test]
    fn garbled_input_degrades_to_default() {
        assert_eq!(negotiate(Some(",,;q=,???")), Locale::En);
        assert_eq!(negotiate(Some(";q=0.9")), Locale::En);
    }

    #[test]
    fn redirect_descriptor_carries_exact_contract() {
        let redirect = LocaleRedirect::new(Locale::Zh);
        assert_eq!(redirect.location, "/zh/");
        assert_eq!(redirect.cache_control, "public, max-age=3600, s-maxage=86400");
    }

    #[test]
    fn redirect_response_has_status_and_headers() {
        let response = LocaleRedirect::new(Locale::En).into_response();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/en/");
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=3600, s-maxage=86400"
        );
    }
}
