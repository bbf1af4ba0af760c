use serde::{Deserialize, Serialize};

/// Session data mode for the current browser-tab session.
///
/// `Demo` substitutes mock data sources for real ones. The mode is decided
/// once per session by the bootstrapper in `virge-core` and recorded in
/// session-scoped storage; once a session is `Demo` it stays `Demo` until
/// the tab session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    Normal,
    Demo,
}

impl SessionMode {
    /// Stable string form, matching the serde representation. Used as the
    /// session-store record value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::Normal => "normal",
            SessionMode::Demo => "demo",
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Et,
}

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Et];

    /// Two-letter language code, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Et => "et",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported locale '{code}' - supported locales: en, et")]
pub struct LocaleParseError {
    pub code: String,
}

impl std::str::FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "et" => Ok(Locale::Et),
            other => Err(LocaleParseError {
                code: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_mode_serde_roundtrip() {
        for mode in [SessionMode::Normal, SessionMode::Demo] {
            let json = serde_json::to_string(&mode).unwrap();
            let parsed: SessionMode = serde_json::from_str(&json).unwrap();
            assert_eq!(mode, parsed);
        }
    }

    #[test]
    fn test_session_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SessionMode::Demo).unwrap(),
            r#""demo""#
        );
        assert_eq!(
            serde_json::to_string(&SessionMode::Normal).unwrap(),
            r#""normal""#
        );
    }

    #[test]
    fn test_session_mode_display_matches_as_str() {
        assert_eq!(SessionMode::Demo.to_string(), "demo");
        assert_eq!(SessionMode::Normal.to_string(), "normal");
    }

    #[test]
    fn test_locale_parse_supported_codes() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("et".parse::<Locale>().unwrap(), Locale::Et);
    }

    #[test]
    fn test_locale_parse_rejects_unknown_code() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert_eq!(err.code, "de");
        assert!(err.to_string().contains("unsupported locale 'de'"));
    }

    #[test]
    fn test_locale_parse_is_case_sensitive() {
        assert!("EN".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serde_matches_as_str() {
        for locale in Locale::ALL {
            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(json, format!("\"{}\"", locale.as_str()));
            let parsed: Locale = serde_json::from_str(&json).unwrap();
            assert_eq!(locale, parsed);
        }
    }
}
