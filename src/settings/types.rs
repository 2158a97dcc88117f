//! Settings wire types
//!
//! The only durable setting is the UI theme flag, persisted under the fixed
//! `theme` key of `settings.json`.

use serde::{Deserialize, Serialize};

/// UI theme flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Durable user settings, serialized as a flat key-value document
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub theme: Theme,
}

/// Request body for setting the theme
#[derive(Debug, Deserialize)]
pub struct UpdateThemeRequest {
    pub theme: Theme,
}

/// Response body for theme endpoints
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(UserSettings::default().theme, Theme::Light);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let settings = UserSettings { theme: Theme::Dark };
        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json, serde_json::json!({ "theme": "dark" }));
    }

    #[test]
    fn test_theme_parse_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            let parsed: Theme = theme.to_string().parse().unwrap();
            assert_eq!(parsed, theme);
        }
        assert!("sepia".parse::<Theme>().is_err());
    }
}
