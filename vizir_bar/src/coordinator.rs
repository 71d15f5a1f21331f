// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A chart-owned tooltip coordinator.
//!
//! Hosts that manage tooltip visibility themselves can pass their own show/hide callbacks in
//! [`TooltipCoordinators`]. This type is the small default: it remembers the descriptor and
//! event of the last `show` until `hide`.

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::callback::{HideTooltip, ShowTooltip, TooltipLabelFn};
use crate::event::PointerEvent;
use crate::props::TooltipCoordinators;
use crate::tooltip::{TooltipContent, TooltipDescriptor};

/// The tooltip currently on screen.
#[derive(Clone, Debug)]
pub struct ShownTooltip {
    /// Descriptor of the hovered item.
    pub descriptor: Rc<TooltipDescriptor>,
    /// The event that last showed or moved the tooltip.
    pub event: PointerEvent,
}

#[derive(Debug, Default)]
struct State {
    shown: Option<ShownTooltip>,
    show_calls: u64,
    hide_calls: u64,
}

/// Owns the tooltip visibility state of one chart.
#[derive(Clone, Debug)]
pub struct TooltipCoordinator {
    state: Rc<RefCell<State>>,
    show: ShowTooltip,
    hide: HideTooltip,
}

impl TooltipCoordinator {
    /// Creates a coordinator with no tooltip shown.
    pub fn new() -> Self {
        let state = Rc::new(RefCell::new(State::default()));

        let show_state = state.clone();
        let show = ShowTooltip::new(move |descriptor, event| {
            let mut state = show_state.borrow_mut();
            state.show_calls += 1;
            state.shown = Some(ShownTooltip {
                descriptor,
                event: *event,
            });
        });

        let hide_state = state.clone();
        let hide = HideTooltip::new(move |_event| {
            let mut state = hide_state.borrow_mut();
            state.hide_calls += 1;
            state.shown = None;
        });

        Self { state, show, hide }
    }

    /// The show/hide callbacks plus `get_label`, ready to hand to bar item props.
    ///
    /// The callbacks keep their identity across calls.
    pub fn coordinators(&self, get_label: TooltipLabelFn) -> TooltipCoordinators {
        TooltipCoordinators {
            show: self.show.clone(),
            hide: self.hide.clone(),
            get_label,
        }
    }

    /// The tooltip currently shown, if any.
    pub fn current(&self) -> Option<ShownTooltip> {
        self.state.borrow().shown.clone()
    }

    /// Returns `true` while a tooltip is shown.
    pub fn is_visible(&self) -> bool {
        self.state.borrow().shown.is_some()
    }

    /// Renders the body of the shown tooltip for its last event.
    pub fn content(&self) -> Option<TooltipContent> {
        let state = self.state.borrow();
        let shown = state.shown.as_ref()?;
        Some(shown.descriptor.content(&shown.event))
    }

    /// Number of `show` calls received.
    pub fn show_calls(&self) -> u64 {
        self.state.borrow().show_calls
    }

    /// Number of `hide` calls received.
    pub fn hide_calls(&self) -> u64 {
        self.state.borrow().hide_calls
    }
}

impl Default for TooltipCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
