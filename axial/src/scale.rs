// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale utilities.
//!
//! Quant axes map numbers through a [`ScaleLinear`]. Categorical and time axes map value
//! *indices* through a [`ScaleBand`], whose range has already been inset by half a tick
//! width (see [`adjust_range`]) so every value sits in the centre of its slot.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Hard cap on generated tick counts.
const MAX_GENERATED_TICKS: f64 = 10_000.0;

/// The scale behind a computed axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisScale {
    /// Continuous mapping of numbers.
    Linear(ScaleLinear),
    /// Discrete mapping of value indices.
    Band(ScaleBand),
}

impl AxisScale {
    /// Returns the (possibly inset) output range of the scale.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.range(),
            Self::Band(s) => s.range(),
        }
    }

    /// Returns the linear scale, if any.
    pub fn as_linear(&self) -> Option<&ScaleLinear> {
        match self {
            Self::Linear(s) => Some(s),
            Self::Band(_) => None,
        }
    }

    /// Returns the band scale, if any.
    pub fn as_band(&self) -> Option<&ScaleBand> {
        match self {
            Self::Band(s) => Some(s),
            Self::Linear(_) => None,
        }
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns at most `max_count` “nice” tick values that lie inside the domain.
    ///
    /// The step is the smallest 1, 2 or 5 × 10ⁿ that keeps the count within `max_count`, so
    /// in-between step sizes round toward fewer ticks.
    pub fn ticks(&self, max_count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, max_count)
    }
}

/// A discrete scale placing `count` evenly spaced values across a range.
///
/// The first value sits at `range.0` and the last at `range.1`; direction follows the
/// range, so descending (vertical) ranges put index `0` at the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
}

impl ScaleBand {
    /// Creates a new scale over an already-inset range.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self { range, count }
    }

    /// Returns the signed distance between adjacent values.
    pub fn step(&self) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / (self.count - 1) as f64
    }

    /// Returns the position of the value at `index`.
    pub fn x(&self, index: usize) -> f64 {
        self.range.0 + self.step() * index as f64
    }

    /// Returns the number of values.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Returns the width of one tick slot when `tick_count` slots share `range`.
///
/// With no ticks the whole range is one slot.
pub fn compute_tick_width(range: (f64, f64), tick_count: usize) -> f64 {
    let length = (range.1 - range.0).abs();
    if tick_count == 0 {
        length
    } else {
        length / tick_count as f64
    }
}

/// Insets `range` by half of `tick_width` on each side, keeping its direction.
pub fn adjust_range(range: (f64, f64), tick_width: f64) -> (f64, f64) {
    let (r0, r1) = range;
    let half = (0.5 * tick_width).min(0.5 * (r1 - r0).abs());
    if r1 >= r0 {
        (r0 + half, r1 - half)
    } else {
        (r0 - half, r1 + half)
    }
}

/// Converts a non-negative float count to `usize`, clamped to the generation cap.
pub(crate) fn count_from_f64(v: f64) -> usize {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    let v = v.min(MAX_GENERATED_TICKS);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by finite/non-negative checks and capped at 10k"
    )]
    {
        v as usize
    }
}

/// Returns the multiples of `step` that lie in `[min, max]`.
pub fn multiples(mut min: f64, mut max: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let first = (min / step - 1e-9).ceil();
    let last = (max / step + 1e-9).floor();
    if last < first {
        return Vec::new();
    }
    let n = count_from_f64(last - first + 1.0);
    (0..n).map(|i| (first + i as f64) * step).collect()
}

fn nice_ticks(mut min: f64, mut max: f64, max_count: usize) -> Vec<f64> {
    if max_count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let mut step = nice_step_up((max - min) / max_count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }
    // Both domain ends can be multiples, which gives one tick more than span / step.
    loop {
        let ticks = multiples(min, max, step);
        if ticks.len() <= max_count {
            return ticks;
        }
        step = next_nice_step(step);
    }
}

/// Rounds `step` up to the nearest 1, 2 or 5 × 10ⁿ.
fn nice_step_up(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let base = 10_f64.powf(step.log10().floor());
    let error = step / base;
    // Absorbs representation error, so 0.3 / 0.1 is not taken for more than 2.
    let nice = if error <= 1.0 + 1e-9 {
        1.0
    } else if error <= 2.0 + 1e-9 {
        2.0
    } else if error <= 5.0 + 1e-9 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// The 1, 2 or 5 × 10ⁿ value after `step`.
fn next_nice_step(step: f64) -> f64 {
    let base = 10_f64.powf(step.log10().floor());
    let mantissa = (step / base).round();
    let next = if mantissa < 2.0 {
        2.0
    } else if mantissa < 5.0 {
        5.0
    } else {
        10.0
    };
    next * base
}
