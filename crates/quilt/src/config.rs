//! Configuration types for composition solving.
//!
//! This module provides configuration structures that control how
//! compositions are laid out and styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`ComposeConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Controls panel spacing within solved grids.
//! - [`StyleConfig`] - The ambient theme: defaults every plot falls back to.
//!
//! # Example
//!
//! ```
//! # use quilt::config::ComposeConfig;
//! // Use default configuration
//! let config = ComposeConfig::default();
//! assert!(config.style().ambient_theme().is_ok());
//! ```

use serde::Deserialize;

use quilt_core::color::Color;
use quilt_core::theme::{LegendPosition, Theme};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposeConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl ComposeConfig {
    /// Creates a new [`ComposeConfig`] with the specified layout and style
    /// configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout configuration for solved grids.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Gap inserted between adjacent cells, as a fraction of the parent
    /// region's extent on the axis being split.
    #[serde(default)]
    panel_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { panel_spacing: 0.0 }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the given panel spacing.
    pub fn new(panel_spacing: f32) -> Self {
        Self { panel_spacing }
    }

    /// Returns the gap between adjacent cells as a fraction of the parent
    /// extent.
    pub fn panel_spacing(&self) -> f32 {
        self.panel_spacing
    }
}

/// Ambient style configuration for compositions.
///
/// These are the values an unset theme attribute falls back to at render
/// time. Fields left unconfigured stay unset and fall through to the
/// plot collaborator's own defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for the composition, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Default text [`Color`], as a color string.
    #[serde(default)]
    text_color: Option<String>,

    /// Default font family for titles and tags.
    #[serde(default)]
    font_family: Option<String>,

    /// Default font size in points.
    #[serde(default)]
    font_size: Option<u16>,

    /// Where collected guides render when no guide area is reserved.
    #[serde(default)]
    legend_position: LegendPosition,
}

impl StyleConfig {
    /// Returns the configured legend position.
    pub fn legend_position(&self) -> LegendPosition {
        self.legend_position
    }

    /// Builds the ambient [`Theme`] from the configured values.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn ambient_theme(&self) -> Result<Theme, String> {
        let mut theme = Theme::new().with_legend_position(self.legend_position);

        if let Some(background) = &self.background_color {
            let color = Color::new(background)
                .map_err(|err| format!("Invalid background color in config: {err}"))?;
            theme = theme.with_background_color(color);
        }
        if let Some(text) = &self.text_color {
            let color = Color::new(text)
                .map_err(|err| format!("Invalid text color in config: {err}"))?;
            theme = theme.with_text_color(color);
        }
        if let Some(family) = &self.font_family {
            theme = theme.with_font_family(family.clone());
        }
        if let Some(size) = self.font_size {
            theme = theme.with_font_size(size);
        }

        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ComposeConfig::default();
        assert_eq!(config.layout().panel_spacing(), 0.0);
        assert_eq!(config.style().legend_position(), LegendPosition::Right);

        let ambient = config.style().ambient_theme().unwrap();
        assert_eq!(ambient.legend_position(), Some(LegendPosition::Right));
        assert!(ambient.background_color().is_none());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ComposeConfig = serde_json::from_str(
            r#"{"style": {"background_color": "white", "legend_position": "bottom"}}"#,
        )
        .unwrap();

        assert_eq!(config.style().legend_position(), LegendPosition::Bottom);
        let ambient = config.style().ambient_theme().unwrap();
        assert!(ambient.background_color().is_some());
    }

    #[test]
    fn test_invalid_color_reported_on_read() {
        let config: ComposeConfig =
            serde_json::from_str(r#"{"style": {"background_color": "no-such-color"}}"#).unwrap();

        let err = config.style().ambient_theme().unwrap_err();
        assert!(err.contains("no-such-color"));
    }
}
