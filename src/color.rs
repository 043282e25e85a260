//! Terminal color codes and the built-in palette.
//!
//! A [`ColorCode`] is an opaque ANSI directive. The formatter never interprets
//! it; it only writes it in front of the text it styles. Built-in codes come
//! straight from the `owo_colors` color types so the palette stays in sync
//! with the escapes that crate emits.

use std::fmt;

use owo_colors::Color;
use owo_colors::colors::{BrightBlack, Cyan, Green, Magenta, Red, White, Yellow};

/// Escape that restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = Red::ANSI_FG;
pub const YELLOW: &str = Yellow::ANSI_FG;
pub const GREEN: &str = Green::ANSI_FG;
pub const CYAN: &str = Cyan::ANSI_FG;
pub const MAGENTA: &str = Magenta::ANSI_FG;
pub const WHITE: &str = White::ANSI_FG;
pub const DARK_GRAY: &str = BrightBlack::ANSI_FG;

/// An uninterpreted terminal color/reset directive.
///
/// The empty code is valid and renders nothing, which is how colorless
/// output is produced (see [`ColorConfig::plain`](crate::ColorConfig::plain)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColorCode(String);

impl ColorCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Build a code from a theme value.
    ///
    /// Recognized color names (`"red"`, `"bright_black"`, …) are translated to
    /// their escape; anything else is kept verbatim as a raw code.
    pub fn from_theme_value(value: &str) -> Self {
        match color_name_to_code(value) {
            Some(code) => Self::new(code),
            None => Self::new(value),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ColorCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ColorCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Translate a color name to its foreground escape, case-insensitive.
///
/// Returns `None` for names outside the standard and bright ANSI sets.
fn color_name_to_code(name: &str) -> Option<&'static str> {
    use owo_colors::colors::{
        Black, Blue, BrightBlue, BrightCyan, BrightGreen, BrightMagenta, BrightRed, BrightWhite,
        BrightYellow,
    };

    let code = match name.trim().to_lowercase().as_str() {
        "black" => Black::ANSI_FG,
        "red" => RED,
        "green" => GREEN,
        "yellow" => YELLOW,
        "blue" => Blue::ANSI_FG,
        "magenta" | "purple" => MAGENTA,
        "cyan" => CYAN,
        "white" => WHITE,
        "bright_black" | "gray" | "grey" | "dark_gray" | "dark_grey" => DARK_GRAY,
        "bright_red" => BrightRed::ANSI_FG,
        "bright_green" => BrightGreen::ANSI_FG,
        "bright_yellow" => BrightYellow::ANSI_FG,
        "bright_blue" => BrightBlue::ANSI_FG,
        "bright_magenta" => BrightMagenta::ANSI_FG,
        "bright_cyan" => BrightCyan::ANSI_FG,
        "bright_white" => BrightWhite::ANSI_FG,
        _ => return None,
    };
    Some(code)
}
