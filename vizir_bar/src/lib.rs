// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive bar-item marks.
//!
//! A bar item is one rectangle of a bar chart, bound to one [`BarDatum`]. This crate covers
//! what happens inside that rectangle:
//! - **Render stage**: [`BarItemProps`] map to a [`BarNode`]: a translated rounded rectangle
//!   with an optional centered, pointer-transparent label.
//! - **Derivation stage**: a click handler bound to the datum merged with its color and a
//!   [`TooltipDescriptor`], each memoized against the props it declares as deps
//!   (see [`BarItemCache`]).
//! - **Event composition**: enter/move/leave/click on the rectangle call the chart's hover
//!   callbacks first, then its tooltip coordinators.
//!
//! Scales, axes and chart layout are out of scope; callers hand in finished geometry.
//! [`BarLayer`] and [`TooltipCoordinator`] are small parent-side collaborators for hosts that
//! do not bring their own.
//!
//! ```
//! use std::rc::Rc;
//!
//! use peniko::color::palette::css;
//! use vizir_bar::{
//!     BarDatum, BarGeometry, BarItem, BarItemCache, BarItemProps, Theme, TooltipCoordinator,
//!     TooltipLabelFn,
//! };
//!
//! let tooltips = TooltipCoordinator::new();
//! let props = BarItemProps::new(
//!     Rc::new(BarDatum::new("a", 10.0, "x")),
//!     BarGeometry::new(0.0, 0.0, 20.0, 40.0),
//!     css::RED,
//!     Rc::new(Theme::default()),
//!     tooltips.coordinators(TooltipLabelFn::new(|d| d.id.to_string())),
//! );
//! let mut cache = BarItemCache::new();
//! let item = BarItem::new(props, &mut cache);
//!
//! let node = item.node();
//! assert_eq!(node.label_anchor(), Some(kurbo::Point::new(10.0, 20.0)));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod callback;
mod coordinator;
mod datum;
mod derivation;
mod event;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod item;
#[cfg(test)]
mod item_tests;
mod layer;
mod memo;
mod props;
mod render;
mod svg;
mod theme;
mod tooltip;

pub use callback::{
    BoundTooltipContent, Callback, ClickCallback, ClickHandler, HideTooltip, HoverCallback,
    ShowTooltip, TooltipLabelFn, TooltipRenderer,
};
pub use coordinator::{ShownTooltip, TooltipCoordinator};
pub use datum::{AttrValue, BarDatum, MergedDatum};
pub use derivation::{BarItemCache, Derived};
pub use event::PointerEvent;
pub use format::{FormatError, FormatKind, FormatSpec, MAX_PRECISION, ValueFormat, format_value};
pub use geometry::{BarGeometry, GeometryField, PropsError};
pub use item::BarItem;
pub use layer::BarLayer;
pub use memo::Memo;
pub use props::{BarItemProps, TooltipCoordinators};
pub use render::{BarNode, LabelNode, render_bar};
pub use svg::{to_svg_string, write_bar};
pub use theme::{FontFamily, FontWeight, LabelsTheme, TextStyle, Theme, TooltipTheme};
pub use tooltip::{BasicTooltip, TooltipContent, TooltipContext, TooltipDescriptor};
