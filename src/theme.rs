//! Presentation presets: publication-ready chart themes and console text
//! styling helpers.

use colored::Colorize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Styling preset for chart output. A plain value object; consumers map the
/// fields onto whatever plotting backend they drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub mode: ThemeMode,
    pub text_color: String,
    pub background_color: String,
    pub font_family: String,
    pub title_size: u32,
    pub label_size: u32,
    pub tick_size: u32,
    pub bold_text: bool,
    pub small_caps: bool,
    pub grid_color: String,
    pub grid_width: u32,
    pub grid_dashed: bool,
}

impl ChartTheme {
    /// Publication preset: serif face, bold small-caps headings, dashed grid.
    /// Light and dark variants swap text and background colors.
    pub fn publication(mode: ThemeMode) -> Self {
        let (text, background) = match mode {
            ThemeMode::Light => ("black", "white"),
            ThemeMode::Dark => ("white", "black"),
        };
        Self {
            mode,
            text_color: text.into(),
            background_color: background.into(),
            font_family: "Times New Roman".into(),
            title_size: 24,
            label_size: 18,
            tick_size: 16,
            bold_text: true,
            small_caps: true,
            grid_color: "#948b72".into(),
            grid_width: 1,
            grid_dashed: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Console styling
// ---------------------------------------------------------------------------

/// Bold heading for console output.
pub fn heading(text: &str) -> String {
    text.bold().to_string()
}

/// Italicized emphasis for console output.
pub fn emphasis(text: &str) -> String {
    text.italic().to_string()
}

/// Accented (yellow) text for console output.
pub fn accent(text: &str) -> String {
    text.yellow().to_string()
}
