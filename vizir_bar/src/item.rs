// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bar item for one render pass: props, derived values and pointer handling.

extern crate alloc;

use alloc::rc::Rc;

use crate::callback::ClickHandler;
use crate::datum::BarDatum;
use crate::derivation::{BarItemCache, Derived};
use crate::event::PointerEvent;
use crate::props::BarItemProps;
use crate::render::{BarNode, render_bar};
use crate::tooltip::TooltipDescriptor;

/// One bar of a chart for the current render pass.
///
/// Pointer handlers belong to the bar rectangle. Hover callbacks always fire before the tooltip
/// coordinator is called.
#[derive(Clone, Debug)]
pub struct BarItem {
    props: BarItemProps,
    derived: Derived,
}

impl BarItem {
    /// Builds the item, reusing the derived values cached in `cache` when their deps are
    /// unchanged.
    ///
    /// Invalid geometry is a caller defect and panics in debug builds.
    pub fn new(props: BarItemProps, cache: &mut BarItemCache) -> Self {
        debug_assert!(
            props.validate().is_ok(),
            "bar item `{}` has invalid geometry: {:?}",
            props.datum.id,
            props.validate()
        );
        let derived = cache.derive(&props);
        Self { props, derived }
    }

    /// The props this item was built from.
    pub fn props(&self) -> &BarItemProps {
        &self.props
    }

    /// The bound datum.
    pub fn datum(&self) -> &Rc<BarDatum> {
        &self.props.datum
    }

    /// The cached tooltip descriptor.
    pub fn tooltip(&self) -> &Rc<TooltipDescriptor> {
        &self.derived.tooltip
    }

    /// The cached click handler, if a click callback is installed.
    pub fn click_handler(&self) -> Option<&ClickHandler> {
        self.derived.on_click.as_ref()
    }

    /// Renders the drawable node.
    pub fn node(&self) -> BarNode {
        render_bar(&self.props)
    }

    /// The pointer entered the rectangle.
    pub fn pointer_enter(&self, event: &PointerEvent) {
        if let Some(on_mouse_enter) = &self.props.on_mouse_enter {
            on_mouse_enter(self.props.datum.as_ref(), event);
        }
        (self.props.coordinators.show)(self.derived.tooltip.clone(), event);
    }

    /// The pointer moved within the rectangle.
    pub fn pointer_move(&self, event: &PointerEvent) {
        (self.props.coordinators.show)(self.derived.tooltip.clone(), event);
    }

    /// The pointer left the rectangle.
    pub fn pointer_leave(&self, event: &PointerEvent) {
        if let Some(on_mouse_leave) = &self.props.on_mouse_leave {
            on_mouse_leave(self.props.datum.as_ref(), event);
        }
        (self.props.coordinators.hide)(event);
    }

    /// Hides this item's tooltip without reporting a hover end.
    ///
    /// Used when the item disappears while hovered.
    pub fn dismiss_tooltip(&self, event: &PointerEvent) {
        (self.props.coordinators.hide)(event);
    }

    /// The rectangle was clicked. Without a click callback this does nothing.
    pub fn click(&self, event: &PointerEvent) {
        if let Some(on_click) = &self.derived.on_click {
            on_click(event);
        }
    }
}
