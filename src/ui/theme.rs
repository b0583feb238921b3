// LogTriage - ui/theme.rs
//
// Level colour mapping.
// No dependencies on app state or business logic.

use owo_colors::{AnsiColors, OwoColorize};

/// Terminal colour assigned to a level token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelColour {
    Cyan,
    Blue,
    Red,
    Yellow,
    /// Fallback for any level not in the table.
    White,
}

impl LevelColour {
    /// Equivalent colour for table cells.
    pub fn table_colour(self) -> comfy_table::Color {
        match self {
            LevelColour::Cyan => comfy_table::Color::Cyan,
            LevelColour::Blue => comfy_table::Color::Blue,
            LevelColour::Red => comfy_table::Color::Red,
            LevelColour::Yellow => comfy_table::Color::Yellow,
            LevelColour::White => comfy_table::Color::White,
        }
    }

    /// Equivalent colour for inline text.
    pub fn ansi(self) -> AnsiColors {
        match self {
            LevelColour::Cyan => AnsiColors::Cyan,
            LevelColour::Blue => AnsiColors::Blue,
            LevelColour::Red => AnsiColors::Red,
            LevelColour::Yellow => AnsiColors::Yellow,
            LevelColour::White => AnsiColors::White,
        }
    }
}

/// Colour for a level token, matched case-insensitively.
pub fn level_colour(level: &str) -> LevelColour {
    match level.to_uppercase().as_str() {
        "INFO" => LevelColour::Cyan,
        "DEBUG" => LevelColour::Blue,
        "ERROR" => LevelColour::Red,
        "WARNING" => LevelColour::Yellow,
        _ => LevelColour::White,
    }
}

/// Render `level` in its bold level colour, or verbatim when unstyled.
pub fn paint_level(level: &str, styled: bool) -> String {
    if styled {
        level.color(level_colour(level).ansi()).bold().to_string()
    } else {
        level.to_string()
    }
}
