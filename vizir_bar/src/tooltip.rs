// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip descriptors and content.
//!
//! A [`TooltipDescriptor`] is what a bar item hands to the chart's show-tooltip coordinator. It
//! is derived from the item's props and cached (see [`crate::BarItemCache`]); the coordinator
//! asks it for [`TooltipContent`] when it actually draws.

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use peniko::Color;

use crate::callback::{BoundTooltipContent, TooltipLabelFn, TooltipRenderer};
use crate::datum::BarDatum;
use crate::event::PointerEvent;
use crate::format::{ValueFormat, format_value};
use crate::theme::Theme;

/// The context a custom tooltip renderer is bound to: the item color and theme merged with
/// its datum.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContext {
    /// The item's display color.
    pub color: Color,
    /// The chart theme.
    pub theme: Rc<Theme>,
    /// The bound datum.
    pub datum: Rc<BarDatum>,
}

/// The default tooltip body: optional color chip, label and formatted value.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicTooltip {
    /// Color chip, when enabled.
    pub chip: Option<Color>,
    /// Tooltip label.
    pub id: String,
    /// Formatted value.
    pub value: String,
}

/// Tooltip body produced for display.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipContent {
    /// The default body.
    Basic(BasicTooltip),
    /// Text produced by a custom renderer.
    Custom(String),
}

impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(basic) => {
                if basic.chip.is_some() {
                    f.write_str("[#] ")?;
                }
                write!(f, "{}: {}", basic.id, basic.value)
            }
            Self::Custom(text) => f.write_str(text),
        }
    }
}

/// Everything needed to show the tooltip of one bar item.
#[derive(Clone, Debug)]
pub struct TooltipDescriptor {
    /// Label produced by the chart's tooltip label function.
    pub id: String,
    /// The datum's value.
    pub value: f64,
    /// Whether the color chip is shown.
    pub enable_chip: bool,
    /// Chip color.
    pub color: Color,
    /// Theme forwarded to the tooltip container.
    pub theme: Rc<Theme>,
    /// Value format.
    pub format: Option<ValueFormat>,
    /// Custom body renderer; `None` uses the default body.
    pub render_content: Option<BoundTooltipContent>,
}

impl TooltipDescriptor {
    /// Builds the descriptor for `datum`.
    ///
    /// The label comes from `get_label`; a custom `renderer` is bound to
    /// a [`TooltipContext`].
    pub fn build(
        datum: &Rc<BarDatum>,
        color: Color,
        theme: &Rc<Theme>,
        renderer: Option<&TooltipRenderer>,
        get_label: &TooltipLabelFn,
        format: Option<ValueFormat>,
    ) -> Self {
        let render_content = renderer.map(|r| {
            r.bind(TooltipContext {
                color,
                theme: theme.clone(),
                datum: datum.clone(),
            })
        });
        Self {
            id: get_label(datum.as_ref()),
            value: datum.value,
            enable_chip: true,
            color,
            theme: theme.clone(),
            format,
            render_content,
        }
    }

    /// The value formatted with [`TooltipDescriptor::format`].
    pub fn formatted_value(&self) -> String {
        format_value(self.value, self.format.as_ref())
    }

    /// Produces the tooltip body for `event`.
    pub fn content(&self, event: &PointerEvent) -> TooltipContent {
        match &self.render_content {
            Some(render) => render(event),
            None => TooltipContent::Basic(BasicTooltip {
                chip: self.enable_chip.then_some(self.color),
                id: self.id.clone(),
                value: self.formatted_value(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use peniko::color::palette::css;

    use super::*;

    fn label_fn() -> TooltipLabelFn {
        TooltipLabelFn::new(|d| format!("{} - {}", d.id, d.index_value))
    }

    #[test]
    fn default_body_uses_label_and_formatted_value() {
        let datum = Rc::new(BarDatum::new("a", 1234.5, "x"));
        let theme = Rc::new(Theme::default());
        let desc = TooltipDescriptor::build(
            &datum,
            css::RED,
            &theme,
            None,
            &label_fn(),
            Some(",.1f".parse().unwrap()),
        );
        assert_eq!(desc.id, "a - x");
        assert_eq!(desc.value, 1234.5);
        assert!(desc.enable_chip);
        let content = desc.content(&PointerEvent::at((0.0, 0.0)));
        assert_eq!(
            content,
            TooltipContent::Basic(BasicTooltip {
                chip: Some(css::RED),
                id: "a - x".to_string(),
                value: "1,234.5".to_string(),
            })
        );
        assert_eq!(content.to_string(), "[#] a - x: 1,234.5");
    }

    #[test]
    fn custom_renderer_is_bound_to_color_theme_and_datum() {
        let datum = Rc::new(BarDatum::new("b", 2.0, "y"));
        let theme = Rc::new(Theme::default());
        let renderer = TooltipRenderer::new(|ctx, event| {
            TooltipContent::Custom(format!(
                "{}={} at {} ({})",
                ctx.datum.id,
                ctx.datum.value,
                event.position.x,
                ctx.theme.tooltip.font_size
            ))
        });
        let desc = TooltipDescriptor::build(
            &datum,
            css::BLUE,
            &theme,
            Some(&renderer),
            &label_fn(),
            None,
        );
        let content = desc.content(&PointerEvent::at((7.0, 0.0)));
        assert_eq!(content, TooltipContent::Custom("b=2 at 7 (12)".to_string()));
    }
}
