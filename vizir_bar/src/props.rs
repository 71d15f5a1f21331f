// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar item inputs.

extern crate alloc;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;

use peniko::Color;
use peniko::color::palette::css;

use crate::callback::{
    ClickCallback, HideTooltip, HoverCallback, ShowTooltip, TooltipLabelFn, TooltipRenderer,
};
use crate::datum::BarDatum;
use crate::format::ValueFormat;
use crate::geometry::{BarGeometry, PropsError};
use crate::theme::Theme;

/// Tooltip coordinators owned by the parent chart and shared by all of its bar items.
#[derive(Clone, Debug)]
pub struct TooltipCoordinators {
    /// Shows or repositions the chart tooltip.
    pub show: ShowTooltip,
    /// Hides the chart tooltip.
    pub hide: HideTooltip,
    /// Produces the tooltip label for a datum.
    pub get_label: TooltipLabelFn,
}

/// Everything one bar item is rendered from.
#[derive(Clone, Debug)]
pub struct BarItemProps {
    /// The bound datum.
    pub datum: Rc<BarDatum>,
    /// Placement and border geometry.
    pub geometry: BarGeometry,
    /// Fallback fill, also used for the tooltip chip and the click payload.
    pub color: Color,
    /// Border stroke paint.
    pub border_color: Color,
    /// Label text.
    pub label: String,
    /// Whether a label node is produced at all.
    pub should_render_label: bool,
    /// Label fill.
    pub label_color: Color,
    /// Chart theme.
    pub theme: Rc<Theme>,
    /// Tooltip value format.
    pub tooltip_format: Option<ValueFormat>,
    /// Custom tooltip body renderer.
    pub tooltip: Option<TooltipRenderer>,
    /// Parent-owned tooltip coordinators.
    pub coordinators: TooltipCoordinators,
    /// Chart-level click callback.
    pub on_click: Option<ClickCallback>,
    /// Chart-level hover-enter callback.
    pub on_mouse_enter: Option<HoverCallback>,
    /// Chart-level hover-leave callback.
    pub on_mouse_leave: Option<HoverCallback>,
}

impl BarItemProps {
    /// Creates props with the datum value as a visible black label, a transparent border and
    /// no optional callbacks.
    pub fn new(
        datum: Rc<BarDatum>,
        geometry: BarGeometry,
        color: Color,
        theme: Rc<Theme>,
        coordinators: TooltipCoordinators,
    ) -> Self {
        let label = format!("{}", datum.value);
        Self {
            datum,
            geometry,
            color,
            border_color: css::TRANSPARENT,
            label,
            should_render_label: true,
            label_color: css::BLACK,
            theme,
            tooltip_format: None,
            tooltip: None,
            coordinators,
            on_click: None,
            on_mouse_enter: None,
            on_mouse_leave: None,
        }
    }

    /// Sets the border paint.
    pub fn with_border_color(mut self, border_color: Color) -> Self {
        self.border_color = border_color;
        self
    }

    /// Sets the label text and whether it is rendered.
    pub fn with_label(mut self, label: impl Into<String>, should_render_label: bool) -> Self {
        self.label = label.into();
        self.should_render_label = should_render_label;
        self
    }

    /// Sets the label fill.
    pub fn with_label_color(mut self, label_color: Color) -> Self {
        self.label_color = label_color;
        self
    }

    /// Sets the tooltip value format.
    pub fn with_tooltip_format(mut self, format: impl Into<Option<ValueFormat>>) -> Self {
        self.tooltip_format = format.into();
        self
    }

    /// Sets a custom tooltip body renderer.
    pub fn with_tooltip(mut self, tooltip: TooltipRenderer) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Sets the click callback.
    pub fn with_on_click(mut self, on_click: ClickCallback) -> Self {
        self.on_click = Some(on_click);
        self
    }

    /// Sets the hover-enter callback.
    pub fn with_on_mouse_enter(mut self, on_mouse_enter: HoverCallback) -> Self {
        self.on_mouse_enter = Some(on_mouse_enter);
        self
    }

    /// Sets the hover-leave callback.
    pub fn with_on_mouse_leave(mut self, on_mouse_leave: HoverCallback) -> Self {
        self.on_mouse_leave = Some(on_mouse_leave);
        self
    }

    /// Checks the geometry contract.
    pub fn validate(&self) -> Result<(), PropsError> {
        self.geometry.validate()
    }
}
