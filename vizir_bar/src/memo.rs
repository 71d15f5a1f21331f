// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot memoization keyed by an explicit dependency value.
//!
//! Dependency tracking is explicit: the deps value must capture every input the compute closure
//! reads. Missing deps means stale values.

/// A cached value together with the deps it was computed from.
#[derive(Debug)]
pub struct Memo<D, T> {
    slot: Option<(D, T)>,
    computations: u64,
}

impl<D: PartialEq, T> Memo<D, T> {
    /// Creates an empty memo.
    pub const fn new() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }

    /// Returns the cached value if `deps` equals the deps of the last computation; otherwise
    /// computes, caches and returns a new value.
    pub fn get_or_compute(&mut self, deps: D, compute: impl FnOnce(&D) -> T) -> &T {
        if matches!(&self.slot, Some((prev, _)) if *prev != deps) {
            self.slot = None;
        }
        let computations = &mut self.computations;
        let (_, value) = self.slot.get_or_insert_with(|| {
            *computations += 1;
            let value = compute(&deps);
            (deps, value)
        });
        value
    }

    /// Number of times the compute closure has run.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

impl<D: PartialEq, T> Default for Memo<D, T> {
    fn default() -> Self {
        Self::new()
    }
}
