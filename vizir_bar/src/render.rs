// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render stage: bar item props to a drawable node.

extern crate alloc;

use alloc::string::String;

use kurbo::{Affine, Point, Rect, RoundedRect, Shape, Size};
use peniko::Brush;

use crate::props::BarItemProps;
use crate::theme::TextStyle;

/// A bar label, positioned in the bar's local frame.
///
/// The text is centered on `pos` on both axes (SVG `text-anchor="middle"`,
/// `dominant-baseline="central"`) and never receives pointer events.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelNode {
    /// Center of the text (local frame).
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font styling from the label theme.
    pub style: TextStyle,
    /// Fill paint.
    pub fill: Brush,
}

/// A drawn bar: a rounded rectangle at the local origin, translated into place, with an
/// optional centered label.
#[derive(Clone, Debug, PartialEq)]
pub struct BarNode {
    /// Local-to-chart transform (a pure translation).
    pub transform: Affine,
    /// Rectangle size.
    pub size: Size,
    /// Corner radius on both axes.
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Border paint.
    pub stroke: Brush,
    /// Border width.
    pub stroke_width: f64,
    /// Label, present only when the item renders one.
    pub label: Option<LabelNode>,
}

impl BarNode {
    /// Top-left corner in chart coordinates.
    pub fn origin(&self) -> Point {
        self.transform.translation().to_point()
    }

    /// The rectangle in the local frame.
    pub fn local_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// The rectangle outline in the local frame.
    pub fn shape(&self) -> RoundedRect {
        self.local_rect().to_rounded_rect(self.corner_radius)
    }

    /// The rectangle in chart coordinates.
    pub fn bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.local_rect())
    }

    /// The label anchor in chart coordinates.
    pub fn label_anchor(&self) -> Option<Point> {
        self.label.as_ref().map(|l| self.transform * l.pos)
    }

    /// Returns `true` if the chart-local `point` lands on the rectangle.
    ///
    /// Only the rectangle is a hit target; labels never intercept.
    pub fn hit_test(&self, point: Point) -> bool {
        let local = self.transform.inverse() * point;
        self.shape().contains(local)
    }
}

/// Renders a bar item.
///
/// Fill is the datum's own fill when set, otherwise the item color.
pub fn render_bar(props: &BarItemProps) -> BarNode {
    let geometry = &props.geometry;
    let fill = props.datum.fill.unwrap_or(props.color);

    let label = props.should_render_label.then(|| LabelNode {
        pos: geometry.local_center(),
        text: props.label.clone(),
        style: props.theme.labels.text.clone(),
        fill: Brush::Solid(props.label_color),
    });

    BarNode {
        transform: Affine::translate(geometry.origin().to_vec2()),
        size: geometry.size(),
        corner_radius: geometry.border_radius,
        fill: Brush::Solid(fill),
        stroke: Brush::Solid(props.border_color),
        stroke_width: geometry.border_width,
        label,
    }
}
