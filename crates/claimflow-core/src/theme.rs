//! Theme color table.
//!
//! The shell ships a single fixed light palette. The resolver accepts the
//! ambient appearance setting but intentionally does not branch on it; the
//! product renders light-mode colors everywhere, and that behavior is a
//! documented contract rather than an oversight.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Semantic color slots the shell draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThemeColor {
    Background,
    Text,
    Tint,
    TabIconDefault,
    TabIconSelected,
}

/// The ambient device appearance setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    Light,
    Dark,
}

const TINT: &str = "#2f95dc";

/// Resolves a semantic color to its concrete value.
pub fn resolve(color: ThemeColor) -> &'static str {
    match color {
        ThemeColor::Background => "#ffffff",
        ThemeColor::Text => "#000000",
        ThemeColor::Tint => TINT,
        ThemeColor::TabIconDefault => "#cccccc",
        ThemeColor::TabIconSelected => TINT,
    }
}

/// Resolves a semantic color under the given appearance.
///
/// The appearance argument is ignored: the palette is light-mode only.
pub fn resolve_for(_appearance: Appearance, color: ThemeColor) -> &'static str {
    resolve(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_resolution_ignores_appearance() {
        for color in ThemeColor::iter() {
            assert_eq!(
                resolve_for(Appearance::Light, color),
                resolve_for(Appearance::Dark, color),
            );
        }
    }

    #[test]
    fn test_every_color_resolves_to_a_hex_value() {
        for color in ThemeColor::iter() {
            let value = resolve(color);
            assert!(value.starts_with('#'), "{color} must be a hex color");
            assert_eq!(value.len(), 7);
        }
    }

    #[test]
    fn test_selected_tab_icon_matches_tint() {
        assert_eq!(
            resolve(ThemeColor::TabIconSelected),
            resolve(ThemeColor::Tint)
        );
    }
}
