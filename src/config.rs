use std::path::Path;

use serde::Deserialize;

use crate::{Color, Palette, Result};

/// Appearance of a [`GroupBox`](crate::GroupBox).
///
/// Every field has a default, so a config file only needs to name the options
/// it changes:
///
/// ```toml
/// font = "Fira Sans"
/// this_screen_border = "#bd93f9"
/// min_margin_x = 8
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupBoxConfig {
    /// Y padding outside the box.
    pub padding_y: usize,
    /// X padding outside the box.
    pub padding_x: usize,
    pub border_width: usize,
    pub font: String,
    /// Text colour for workspaces with windows.
    pub active: Color,
    /// Text colour for empty workspaces.
    pub inactive: Color,
    pub background: Color,
    pub this_screen_border: Color,
    pub other_screen_border: Color,
    pub urgent_border: Color,
    /// Minimum X margin inside the box.
    pub min_margin_x: usize,
}

impl Default for GroupBoxConfig {
    fn default() -> Self {
        Self {
            padding_y: 2,
            padding_x: 2,
            border_width: 3,
            font: "Monospace".to_string(),
            active: Palette::WHITE.into(),
            inactive: Palette::GREY.into(),
            background: Palette::BLACK.into(),
            this_screen_border: Palette::BLUE.into(),
            other_screen_border: Palette::GREY.into(),
            urgent_border: Palette::RED.into(),
            min_margin_x: 5,
        }
    }
}

impl GroupBoxConfig {
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or names an unknown option.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// # Errors
    ///
    /// Returns an error if the file can not be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("loading group box config from {}", path.as_ref().display());

        Self::from_toml(&raw)
    }
}
