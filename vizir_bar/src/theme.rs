// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slices of the chart theme a bar item reads: label text and tooltip styling.

extern crate alloc;

use alloc::sync::Arc;

use peniko::Color;
use peniko::color::palette::css;

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Text styling for labels.
///
/// There is no fill here: label fill always comes from the item's label color.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in chart coordinates (typically pixels).
    pub font_size: f64,
    /// Preferred font family.
    pub font_family: FontFamily,
    /// Font weight.
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(11.0)
    }
}

/// Label sub-theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelsTheme {
    /// Style applied to bar labels.
    pub text: TextStyle,
}

/// Tooltip sub-theme.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipTheme {
    /// Container background.
    pub background: Color,
    /// Container text color.
    pub text_color: Color,
    /// Body font size.
    pub font_size: f64,
    /// Inner padding.
    pub padding: f64,
    /// Container corner radius.
    pub corner_radius: f64,
    /// Side length of the color chip.
    pub chip_size: f64,
}

impl Default for TooltipTheme {
    fn default() -> Self {
        Self {
            background: css::WHITE,
            text_color: Color::from_rgba8(0x33, 0x33, 0x33, 0xff),
            font_size: 12.0,
            padding: 5.0,
            corner_radius: 2.0,
            chip_size: 12.0,
        }
    }
}

/// The theme fields a bar item depends on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    /// Tooltip styling, forwarded to tooltip descriptors.
    pub tooltip: TooltipTheme,
    /// Label styling.
    pub labels: LabelsTheme,
}

impl Theme {
    /// Sets the label text style.
    pub fn with_label_text(mut self, text: TextStyle) -> Self {
        self.labels.text = text;
        self
    }

    /// Sets the tooltip sub-theme.
    pub fn with_tooltip(mut self, tooltip: TooltipTheme) -> Self {
        self.tooltip = tooltip;
        self
    }
}
