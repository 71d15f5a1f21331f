// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derivation stage: the click handler and tooltip descriptor of a bar item.
//!
//! Each derived value declares the props it depends on. The values are recomputed only when
//! one of those props changes; geometry and label changes never rebuild them. Callbacks compare
//! by identity, everything else by value.

extern crate alloc;

use alloc::rc::Rc;

use peniko::Color;

use crate::callback::{ClickCallback, ClickHandler, TooltipLabelFn, TooltipRenderer};
use crate::datum::{BarDatum, MergedDatum};
use crate::format::ValueFormat;
use crate::memo::Memo;
use crate::props::BarItemProps;
use crate::theme::Theme;
use crate::tooltip::TooltipDescriptor;

#[derive(Debug)]
struct ClickDeps {
    datum: Rc<BarDatum>,
    color: Color,
    on_click: Option<ClickCallback>,
}

impl PartialEq for ClickDeps {
    fn eq(&self, other: &Self) -> bool {
        same_value(&self.datum, &other.datum)
            && self.color == other.color
            && self.on_click == other.on_click
    }
}

#[derive(Debug)]
struct TooltipDeps {
    datum: Rc<BarDatum>,
    color: Color,
    theme: Rc<Theme>,
    tooltip: Option<TooltipRenderer>,
    get_label: TooltipLabelFn,
    format: Option<ValueFormat>,
}

impl PartialEq for TooltipDeps {
    fn eq(&self, other: &Self) -> bool {
        same_value(&self.datum, &other.datum)
            && self.color == other.color
            && same_value(&self.theme, &other.theme)
            && self.tooltip == other.tooltip
            && self.get_label == other.get_label
            && self.format == other.format
    }
}

/// A shared allocation is always equal to itself, even when its value holds a `NaN`.
fn same_value<T: PartialEq>(a: &Rc<T>, b: &Rc<T>) -> bool {
    Rc::ptr_eq(a, b) || **a == **b
}

/// Values derived from [`BarItemProps`] for one render pass.
#[derive(Clone, Debug)]
pub struct Derived {
    /// Click handler bound to the datum and color; `None` when there is no click callback.
    pub on_click: Option<ClickHandler>,
    /// Tooltip descriptor handed to the show-tooltip coordinator.
    pub tooltip: Rc<TooltipDescriptor>,
}

/// Per-item memo slots for [`Derived`] values.
///
/// The parent keeps one cache per bar item across render passes (keyed by datum id in
/// [`crate::BarLayer`]). The cache only holds derived values; it never feeds back into props.
#[derive(Debug, Default)]
pub struct BarItemCache {
    click: Memo<ClickDeps, Option<ClickHandler>>,
    tooltip: Memo<TooltipDeps, Rc<TooltipDescriptor>>,
}

impl BarItemCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the click handler and tooltip descriptor for `props`.
    pub fn derive(&mut self, props: &BarItemProps) -> Derived {
        let click_deps = ClickDeps {
            datum: props.datum.clone(),
            color: props.color,
            on_click: props.on_click.clone(),
        };
        let on_click = self
            .click
            .get_or_compute(click_deps, |deps| {
                tracing::trace!(id = %deps.datum.id, "binding click handler");
                bind_click(deps)
            })
            .clone();

        let tooltip_deps = TooltipDeps {
            datum: props.datum.clone(),
            color: props.color,
            theme: props.theme.clone(),
            tooltip: props.tooltip.clone(),
            get_label: props.coordinators.get_label.clone(),
            format: props.tooltip_format,
        };
        let tooltip = self
            .tooltip
            .get_or_compute(tooltip_deps, |deps| {
                tracing::trace!(id = %deps.datum.id, "building tooltip descriptor");
                Rc::new(TooltipDescriptor::build(
                    &deps.datum,
                    deps.color,
                    &deps.theme,
                    deps.tooltip.as_ref(),
                    &deps.get_label,
                    deps.format,
                ))
            })
            .clone();

        Derived { on_click, tooltip }
    }

    /// Number of times the click handler has been rebuilt.
    pub fn click_computations(&self) -> u64 {
        self.click.computations()
    }

    /// Number of times the tooltip descriptor has been rebuilt.
    pub fn tooltip_computations(&self) -> u64 {
        self.tooltip.computations()
    }
}

fn bind_click(deps: &ClickDeps) -> Option<ClickHandler> {
    let on_click = deps.on_click.clone()?;
    let merged = MergedDatum::new(deps.color, deps.datum.clone());
    Some(ClickHandler::new(move |event| on_click(&merged, event)))
}
