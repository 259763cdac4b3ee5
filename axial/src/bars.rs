// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar slot allocation.
//!
//! Several bar series can share one tick. Series with the same `stack_index` are drawn on
//! top of each other and share one slot; every other series gets a slot of its own. Slots
//! are laid out side by side, centred on the tick:
//!
//! ```text
//!            tick
//!              |
//!   [ a ] [ b+c ] [ d ]      b and c share stack 1
//!   ^
//!   offset(a) = -total / 2
//! ```
//!
//! Slots with an explicit `bar_width` keep it; the remaining width is split evenly among
//! the others, floored at `min_bar_width`. The floor wins over fitting: the layout may then
//! be wider than the tick.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::scale::compute_tick_width;

/// Bar series keyed by series key.
pub type BarSeriesMap = HashMap<String, BarSeriesInfo>;

/// Spacing rules for bar layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Gap between adjacent slots within one tick.
    pub inner_bar_spacing: f64,
    /// Gap between the bar groups of adjacent ticks.
    pub outer_bar_spacing: f64,
    /// Smallest width a variable-width slot is given.
    pub min_bar_width: f64,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            inner_bar_spacing: 2.0,
            outer_bar_spacing: 10.0,
            min_bar_width: 3.0,
        }
    }
}

/// Layout inputs for one bar series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarSeriesInfo {
    /// Position of the series among all bar series (drives left-to-right order).
    pub index: usize,
    /// Series sharing a stack index share one slot.
    #[serde(default)]
    pub stack_index: Option<usize>,
    /// Explicit slot width.
    #[serde(default)]
    pub bar_width: Option<f64>,
}

impl BarSeriesInfo {
    /// Creates an unstacked series with automatic width.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            stack_index: None,
            bar_width: None,
        }
    }

    /// Places the series in a stack.
    pub fn with_stack_index(mut self, stack_index: usize) -> Self {
        self.stack_index = Some(stack_index);
        self
    }

    /// Gives the series an explicit width.
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = Some(bar_width);
        self
    }
}

/// Width and offset (relative to the tick centre) of one series' bars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSlot {
    /// Bar width.
    pub width: f64,
    /// Left (or bottom) edge relative to the tick centre.
    pub offset: f64,
}

/// The result of bar allocation for one draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarPositions {
    slots: HashMap<String, BarSlot>,
    default_width: f64,
    total_width: f64,
}

impl BarPositions {
    /// Returns the bar width of `key`, or `0` for unknown series.
    pub fn width(&self, key: &str) -> f64 {
        self.slots.get(key).map_or(0.0, |s| s.width)
    }

    /// Returns the bar offset of `key` relative to the tick centre, or `0` for unknown series.
    pub fn offset(&self, key: &str) -> f64 {
        self.slots.get(key).map_or(0.0, |s| s.offset)
    }

    /// Returns the slot of `key`.
    pub fn slot(&self, key: &str) -> Option<BarSlot> {
        self.slots.get(key).copied()
    }

    /// Returns the width available per tick before allocation.
    pub fn default_width(&self) -> f64 {
        self.default_width
    }

    /// Returns the width covered by all slots of one tick, inner spacing included.
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    /// Returns the number of series with a slot.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no series has a slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[derive(Debug)]
struct SlotGroup<'a> {
    members: SmallVec<[&'a str; 4]>,
    fixed_width: Option<f64>,
}

/// Allocates a slot per bar series for ticks of width `|range| / tick_count`.
///
/// The caller pre-adjusts `range` for outer bar spacing.
pub fn compute_bar_positions(
    range: (f64, f64),
    tick_count: usize,
    config: &BarConfig,
    bar_series: &BarSeriesMap,
) -> BarPositions {
    let default_width = compute_tick_width(range, tick_count.max(1));

    let mut series: Vec<(&str, &BarSeriesInfo)> = bar_series
        .iter()
        .map(|(key, info)| (key.as_str(), info))
        .collect();
    series.sort_by(|a, b| a.1.index.cmp(&b.1.index).then_with(|| a.0.cmp(b.0)));

    // Groups are created in order of their first member's index.
    let mut groups: Vec<SlotGroup<'_>> = Vec::new();
    let mut by_stack: HashMap<usize, usize> = HashMap::new();
    for (key, info) in series {
        let slot = match info.stack_index {
            Some(stack) => *by_stack.entry(stack).or_insert_with(|| {
                groups.push(SlotGroup {
                    members: SmallVec::new(),
                    fixed_width: None,
                });
                groups.len() - 1
            }),
            None => {
                groups.push(SlotGroup {
                    members: SmallVec::new(),
                    fixed_width: None,
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[slot];
        group.members.push(key);
        if let Some(width) = info.bar_width {
            let width = width.max(0.0);
            group.fixed_width = Some(group.fixed_width.map_or(width, |w| w.max(width)));
        }
    }

    let inner = config.inner_bar_spacing.max(0.0);
    let spacing = inner * groups.len().saturating_sub(1) as f64;
    let fixed: f64 = groups.iter().filter_map(|g| g.fixed_width).sum();
    let variable_count = groups.iter().filter(|g| g.fixed_width.is_none()).count();
    let variable_width = if variable_count == 0 {
        0.0
    } else {
        ((default_width - fixed - spacing) / variable_count as f64)
            .max(config.min_bar_width.max(0.0))
    };
    let total_width = fixed + variable_width * variable_count as f64 + spacing;

    let mut slots = HashMap::with_capacity(bar_series.len());
    let mut offset = -0.5 * total_width;
    for group in &groups {
        let width = group.fixed_width.unwrap_or(variable_width);
        for key in &group.members {
            slots.insert(String::from(*key), BarSlot { width, offset });
        }
        offset += width + inner;
    }

    BarPositions {
        slots,
        default_width,
        total_width,
    }
}
