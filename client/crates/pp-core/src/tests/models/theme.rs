use crate::Theme;

use std::str::FromStr;

#[test]
fn test_theme_as_str() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn test_theme_from_str() {
    assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
    assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
    assert!(Theme::from_str("sepia").is_err());
}

#[test]
fn test_theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn test_theme_from_dark_mode_toggle() {
    assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
    assert_eq!(Theme::from_dark_mode(false), Theme::Light);
}

#[test]
fn test_theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
}
