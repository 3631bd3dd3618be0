use serde::{Deserialize, Serialize};

/// A content locale the site is published under. Every negotiation result is one of
/// these two; unrecognized language tags never pass through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Zh,
    #[default]
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// Path prefix the localized site lives under, e.g. `/zh/`.
    pub fn path(&self) -> String {
        format!("/{}/", self.as_str())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn paths_carry_trailing_slash() {
        assert_eq!(Locale::Zh.path(), "/zh/");
        assert_eq!(Locale::En.path(), "/en/");
    }
}
