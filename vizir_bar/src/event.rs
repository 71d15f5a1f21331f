// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events delivered by the hosting UI.

use kurbo::Point;

/// A pointer event in chart-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in chart-local coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Creates an event at `position`.
    pub fn at(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
        }
    }
}
