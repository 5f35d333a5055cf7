//! Typed view over the theme identifiers in [`crate::constants`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{str_eq, AUTO_MODE, DARK_MODE, DEFAULT_THEME, LIGHT_MODE};
use crate::error::HalcyonError;

/// Visitor-selectable color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the system preference.
    Auto,
}

impl ThemeMode {
    pub const ALL: &[ThemeMode] = &[Self::Light, Self::Dark, Self::Auto];

    /// The mode named by [`DEFAULT_THEME`].
    pub const DEFAULT: ThemeMode = match Self::from_identifier(DEFAULT_THEME) {
        Some(mode) => mode,
        None => panic!("DEFAULT_THEME is not a theme identifier"),
    };

    /// Identifier stored by the front-end; one of the `*_MODE` constants.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => LIGHT_MODE,
            Self::Dark => DARK_MODE,
            Self::Auto => AUTO_MODE,
        }
    }

    /// Exact, case-sensitive lookup of an identifier.
    pub const fn from_identifier(s: &str) -> Option<Self> {
        if str_eq(s, LIGHT_MODE) {
            Some(Self::Light)
        } else if str_eq(s, DARK_MODE) {
            Some(Self::Dark)
        } else if str_eq(s, AUTO_MODE) {
            Some(Self::Auto)
        } else {
            None
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for ThemeMode {
    type Err = HalcyonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| HalcyonError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_match_constants() {
        assert_eq!(ThemeMode::Light.as_str(), LIGHT_MODE);
        assert_eq!(ThemeMode::Dark.as_str(), DARK_MODE);
        assert_eq!(ThemeMode::Auto.as_str(), AUTO_MODE);
    }

    #[test]
    fn default_follows_default_theme() {
        assert_eq!(ThemeMode::DEFAULT, ThemeMode::Auto);
        assert_eq!(ThemeMode::default().as_str(), DEFAULT_THEME);
    }

    #[test]
    fn parse_every_mode() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), *mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(matches!(
            "Dark".parse::<ThemeMode>(),
            Err(HalcyonError::UnknownTheme(s)) if s == "Dark"
        ));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("system".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
        assert!(crate::constants::UNCATEGORIZED.parse::<ThemeMode>().is_err());
    }

    #[test]
    fn serde_uses_identifiers() {
        let json = serde_json::to_string(&ThemeMode::ALL).unwrap();
        assert_eq!(json, r#"["light","dark","auto"]"#);
        let mode: ThemeMode = serde_json::from_str(r#""auto""#).unwrap();
        assert_eq!(mode, ThemeMode::Auto);
    }
}
