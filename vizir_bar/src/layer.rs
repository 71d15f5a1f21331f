// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A layer of bar items with stable per-item caches and pointer routing.
//!
//! This is the piece of the parent chart that bar items rely on: it keeps one
//! [`BarItemCache`] per datum id across render passes, and turns raw pointer input on the chart
//! surface into enter/move/leave/click calls on the right item.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Point;

use crate::derivation::BarItemCache;
use crate::event::PointerEvent;
use crate::item::BarItem;
use crate::props::BarItemProps;
use crate::render::BarNode;

/// Bar items of one chart, in paint order.
#[derive(Debug, Default)]
pub struct BarLayer {
    caches: HashMap<Arc<str>, BarItemCache>,
    items: Vec<BarItem>,
    hovered: Option<Arc<str>>,
    last_event: Option<PointerEvent>,
}

impl BarLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the items for a new render pass.
    ///
    /// Caches are matched by datum id; caches of ids that are no longer present are dropped.
    /// If the hovered item disappears, its tooltip is hidden and hover state is cleared without
    /// a leave callback.
    pub fn update(&mut self, props: impl IntoIterator<Item = BarItemProps>) {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut items = Vec::new();
        for p in props {
            let id = p.datum.id.clone();
            if !seen.insert(id.clone()) {
                tracing::warn!(id = %id, "duplicate bar id; items will share derived values");
            }
            let cache = self.caches.entry(id).or_default();
            items.push(BarItem::new(p, cache));
        }

        let before = self.caches.len();
        self.caches.retain(|id, _| seen.contains(id));
        let evicted = before - self.caches.len();
        if evicted > 0 {
            tracing::debug!(evicted, "dropped caches of removed bars");
        }

        if let Some(id) = &self.hovered
            && !seen.contains(id)
        {
            tracing::debug!(id = %id, "hovered bar removed");
            if let (Some(prev), Some(event)) = (self.item(id), self.last_event) {
                prev.dismiss_tooltip(&event);
            }
            self.hovered = None;
        }
        self.items = items;
    }

    /// Items in paint order.
    pub fn items(&self) -> &[BarItem] {
        &self.items
    }

    /// Looks up an item by datum id.
    pub fn item(&self, id: &str) -> Option<&BarItem> {
        self.items.iter().find(|item| &*item.datum().id == id)
    }

    /// The cache kept for a datum id.
    pub fn cache(&self, id: &str) -> Option<&BarItemCache> {
        self.caches.get(id)
    }

    /// The item under the pointer, if any.
    pub fn hovered(&self) -> Option<&BarItem> {
        self.item(self.hovered.as_deref()?)
    }

    /// Returns the index of the topmost item whose rectangle contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.items.iter().rposition(|item| item.node().hit_test(point))
    }

    /// Routes a pointer move on the chart surface.
    ///
    /// Moving onto a different item leaves the previous one before entering the new one.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        self.last_event = Some(*event);
        let hit = self.hit_test(event.position);
        let hit_id = hit.map(|i| self.items[i].datum().id.clone());

        if hit_id.is_some() && hit_id == self.hovered {
            if let Some(i) = hit {
                self.items[i].pointer_move(event);
            }
            return;
        }

        if let Some(prev) = self.hovered() {
            tracing::debug!(id = %prev.datum().id, "pointer left bar");
            prev.pointer_leave(event);
        }
        if let Some(i) = hit {
            let item = &self.items[i];
            tracing::debug!(id = %item.datum().id, "pointer entered bar");
            item.pointer_enter(event);
        }
        self.hovered = hit_id;
    }

    /// The pointer left the chart surface.
    pub fn pointer_leave(&mut self, event: &PointerEvent) {
        if let Some(prev) = self.hovered() {
            tracing::debug!(id = %prev.datum().id, "pointer left bar");
            prev.pointer_leave(event);
        }
        self.hovered = None;
        self.last_event = Some(*event);
    }

    /// Routes a click to the topmost item under the pointer.
    pub fn click(&self, event: &PointerEvent) {
        if let Some(i) = self.hit_test(event.position) {
            self.items[i].click(event);
        }
    }

    /// Renders every item, in paint order.
    pub fn nodes(&self) -> Vec<BarNode> {
        self.items.iter().map(BarItem::node).collect()
    }
}
