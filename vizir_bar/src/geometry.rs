// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar placement and border geometry.

use kurbo::{Point, Size};

/// A geometry field that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryField {
    /// [`BarGeometry::x`].
    X,
    /// [`BarGeometry::y`].
    Y,
    /// [`BarGeometry::width`].
    Width,
    /// [`BarGeometry::height`].
    Height,
    /// [`BarGeometry::border_radius`].
    BorderRadius,
    /// [`BarGeometry::border_width`].
    BorderWidth,
}

impl GeometryField {
    /// Returns the field name as written in the geometry record.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
            Self::BorderRadius => "border_radius",
            Self::BorderWidth => "border_width",
        }
    }
}

/// Errors returned when checking bar item inputs.
///
/// These describe caller defects (usually a parent layout bug); the bar item itself never
/// repairs them.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PropsError {
    /// A size or border field is negative.
    #[error("bar {} must be non-negative, got {value}", .field.name())]
    Negative {
        /// The offending field.
        field: GeometryField,
        /// The value that was supplied.
        value: f64,
    },
    /// A field is `NaN` or infinite.
    #[error("bar {} must be finite", .field.name())]
    NonFinite {
        /// The offending field.
        field: GeometryField,
    },
}

/// Position, size and border of one bar, in chart-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (non-negative).
    pub width: f64,
    /// Height (non-negative).
    pub height: f64,
    /// Corner radius applied on both axes.
    pub border_radius: f64,
    /// Stroke width of the border.
    pub border_width: f64,
}

impl BarGeometry {
    /// Creates geometry with no border and square corners.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            border_radius: 0.0,
            border_width: 0.0,
        }
    }

    /// Sets the corner radius.
    pub fn with_border_radius(mut self, border_radius: f64) -> Self {
        self.border_radius = border_radius;
        self
    }

    /// Sets the border stroke width.
    pub fn with_border_width(mut self, border_width: f64) -> Self {
        self.border_width = border_width;
        self
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center of the bar in its own local frame (origin at the top-left corner).
    pub fn local_center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Checks that every field is finite and that sizes and border values are non-negative.
    pub fn validate(&self) -> Result<(), PropsError> {
        let fields = [
            (GeometryField::X, self.x, false),
            (GeometryField::Y, self.y, false),
            (GeometryField::Width, self.width, true),
            (GeometryField::Height, self.height, true),
            (GeometryField::BorderRadius, self.border_radius, true),
            (GeometryField::BorderWidth, self.border_width, true),
        ];
        for (field, value, non_negative) in fields {
            if !value.is_finite() {
                return Err(PropsError::NonFinite { field });
            }
            if non_negative && value < 0.0 {
                return Err(PropsError::Negative { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_geometry_passes() {
        let g = BarGeometry::new(-5.0, 3.0, 0.0, 12.0)
            .with_border_radius(2.0)
            .with_border_width(1.0);
        assert_eq!(g.validate(), Ok(()));
        assert_eq!(g.local_center(), Point::new(0.0, 6.0));
    }

    #[test]
    fn negative_size_is_reported() {
        let g = BarGeometry::new(0.0, 0.0, 10.0, -1.0);
        assert_eq!(
            g.validate(),
            Err(PropsError::Negative {
                field: GeometryField::Height,
                value: -1.0,
            })
        );
    }

    #[test]
    fn nan_border_is_reported() {
        let g = BarGeometry::new(0.0, 0.0, 10.0, 1.0).with_border_width(f64::NAN);
        assert_eq!(
            g.validate(),
            Err(PropsError::NonFinite {
                field: GeometryField::BorderWidth,
            })
        );
    }
}
