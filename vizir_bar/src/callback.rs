// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared function values passed down from the parent chart.
//!
//! Chart-level callbacks and tooltip coordinators are plain function values shared by every bar
//! item of a chart. They are reference counted and compared by identity, which is what the
//! derivation caches use to decide whether a bound handler must be rebuilt.

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;
use core::ops::Deref;

use crate::datum::{BarDatum, MergedDatum};
use crate::event::PointerEvent;
use crate::tooltip::{TooltipContent, TooltipContext, TooltipDescriptor};

/// A reference-counted function value with identity equality.
///
/// Two callbacks are equal only if they share the same allocation; cloning a callback keeps it
/// equal to the original.
pub struct Callback<F: ?Sized>(Rc<F>);

impl<F: ?Sized> Callback<F> {
    /// Returns `true` if both callbacks point at the same function value.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<F: ?Sized> Clone for Callback<F> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<F: ?Sized> PartialEq for Callback<F> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<F: ?Sized> Deref for Callback<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.0
    }
}

impl<F: ?Sized> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Chart-level click callback: receives the datum merged with its display color.
pub type ClickCallback = Callback<dyn Fn(&MergedDatum, &PointerEvent)>;
/// Chart-level hover callback (`on_mouse_enter` / `on_mouse_leave`).
pub type HoverCallback = Callback<dyn Fn(&BarDatum, &PointerEvent)>;
/// A click handler bound to one bar item.
pub type ClickHandler = Callback<dyn Fn(&PointerEvent)>;
/// Coordinator that shows (or repositions) the chart tooltip.
pub type ShowTooltip = Callback<dyn Fn(Rc<TooltipDescriptor>, &PointerEvent)>;
/// Coordinator that hides the chart tooltip.
pub type HideTooltip = Callback<dyn Fn(&PointerEvent)>;
/// Produces the tooltip label for a datum.
pub type TooltipLabelFn = Callback<dyn Fn(&BarDatum) -> String>;
/// Caller-supplied tooltip body renderer.
pub type TooltipRenderer = Callback<dyn Fn(&TooltipContext, &PointerEvent) -> TooltipContent>;
/// A tooltip renderer with its context already bound.
pub type BoundTooltipContent = Callback<dyn Fn(&PointerEvent) -> TooltipContent>;

impl Callback<dyn Fn(&MergedDatum, &PointerEvent)> {
    /// Wraps a click callback.
    pub fn new(f: impl Fn(&MergedDatum, &PointerEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Callback<dyn Fn(&BarDatum, &PointerEvent)> {
    /// Wraps a hover callback.
    pub fn new(f: impl Fn(&BarDatum, &PointerEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Callback<dyn Fn(&PointerEvent)> {
    /// Wraps a handler that only needs the pointer event.
    pub fn new(f: impl Fn(&PointerEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Callback<dyn Fn(Rc<TooltipDescriptor>, &PointerEvent)> {
    /// Wraps a show-tooltip coordinator.
    pub fn new(f: impl Fn(Rc<TooltipDescriptor>, &PointerEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Callback<dyn Fn(&BarDatum) -> String> {
    /// Wraps a tooltip label function.
    pub fn new(f: impl Fn(&BarDatum) -> String + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Callback<dyn Fn(&TooltipContext, &PointerEvent) -> TooltipContent> {
    /// Wraps a custom tooltip renderer.
    pub fn new(f: impl Fn(&TooltipContext, &PointerEvent) -> TooltipContent + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Binds the renderer to a context, producing a callable that only needs the event.
    pub fn bind(&self, ctx: TooltipContext) -> BoundTooltipContent {
        let renderer = self.clone();
        Callback(Rc::new(move |event: &PointerEvent| renderer(&ctx, event)))
    }
}

impl Callback<dyn Fn(&PointerEvent) -> TooltipContent> {
    /// Wraps a pre-bound tooltip body renderer.
    pub fn new(f: impl Fn(&PointerEvent) -> TooltipContent + 'static) -> Self {
        Self(Rc::new(f))
    }
}
