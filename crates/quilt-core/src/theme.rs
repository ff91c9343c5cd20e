//! Theme settings shared between plots and compositions.
//!
//! A [`Theme`] stores every attribute as an `Option`: `None` means the
//! attribute is unset and inherits from whatever theme sits underneath it
//! (a broadcast theme, or the ambient configuration at render time), while
//! `Some` records an explicit local choice. Merging therefore never loses
//! an explicit setting — broadcasts only fill holes.

use serde::Deserialize;

use crate::color::Color;

/// Where collected guides (legends) are rendered, absent a reserved
/// guide area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    /// To the right of the panels. The ambient default.
    #[default]
    Right,
    /// To the left of the panels.
    Left,
    /// Above the panels.
    Top,
    /// Below the panels.
    Bottom,
}

impl std::fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegendPosition::Right => write!(f, "right"),
            LegendPosition::Left => write!(f, "left"),
            LegendPosition::Top => write!(f, "top"),
            LegendPosition::Bottom => write!(f, "bottom"),
        }
    }
}

/// Visual settings for a plot or a whole composition.
///
/// Every field is optional; unset fields inherit. See the module docs for
/// the merge rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    background_color: Option<Color>,
    text_color: Option<Color>,
    font_family: Option<String>,
    font_size: Option<u16>,
    legend_position: Option<LegendPosition>,
    panel_spacing: Option<f32>,
}

impl Theme {
    /// Creates an empty theme with every attribute unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the background color, if explicitly set.
    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    /// Returns the text color, if explicitly set.
    pub fn text_color(&self) -> Option<&Color> {
        self.text_color.as_ref()
    }

    /// Returns the font family, if explicitly set.
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Returns the font size in points, if explicitly set.
    pub fn font_size(&self) -> Option<u16> {
        self.font_size
    }

    /// Returns the legend position, if explicitly set.
    pub fn legend_position(&self) -> Option<LegendPosition> {
        self.legend_position
    }

    /// Returns the spacing between panels in points, if explicitly set.
    pub fn panel_spacing(&self) -> Option<f32> {
        self.panel_spacing
    }

    /// Sets the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the font size in points.
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the legend position.
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = Some(position);
        self
    }

    /// Sets the spacing between panels in points.
    pub fn with_panel_spacing(mut self, spacing: f32) -> Self {
        self.panel_spacing = Some(spacing);
        self
    }

    /// Fills every unset attribute from `broadcast`.
    ///
    /// Attributes already set on `self` are never overwritten; this is the
    /// rule that lets a global theme broadcast reach every plot without
    /// clobbering local overrides.
    pub fn merge_under(&mut self, broadcast: &Theme) {
        if self.background_color.is_none() {
            self.background_color = broadcast.background_color.clone();
        }
        if self.text_color.is_none() {
            self.text_color = broadcast.text_color.clone();
        }
        if self.font_family.is_none() {
            self.font_family = broadcast.font_family.clone();
        }
        if self.font_size.is_none() {
            self.font_size = broadcast.font_size;
        }
        if self.legend_position.is_none() {
            self.legend_position = broadcast.legend_position;
        }
        if self.panel_spacing.is_none() {
            self.panel_spacing = broadcast.panel_spacing;
        }
    }

    /// Returns a copy of `self` with unset attributes filled from
    /// `ambient`. Non-mutating variant of [`Theme::merge_under`], used at
    /// render time.
    pub fn resolve(&self, ambient: &Theme) -> Theme {
        let mut resolved = self.clone();
        resolved.merge_under(ambient);
        resolved
    }
}
