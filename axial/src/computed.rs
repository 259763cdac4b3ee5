// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed axes.
//!
//! A computed axis is produced fresh on every draw and never mutated afterwards. Labels are
//! materialized into the ticks, so consumers only need the tick list to render labels, and
//! the scale to place series values.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::NaiveDateTime;

use crate::options::{AxisOptions, AxisType, FullAxisOptions};
use crate::scale::AxisScale;
use crate::value::AxisValue;

/// The request to compute one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct InputDatum<V> {
    /// Pixel range of the axis (`start`, `end`); vertical axes usually descend.
    pub range: (f64, f64),
    /// The values plotted against this axis.
    pub values: Vec<V>,
    /// The axis configuration.
    pub options: AxisOptions,
    /// Whether bars are drawn against this axis.
    pub has_bars: bool,
    /// Smallest slot one bar group needs, including its outer spacing.
    ///
    /// Quant axes with bars inset their range by at least half of this so the outermost
    /// groups fit.
    pub bar_extent: f64,
}

impl<V> InputDatum<V> {
    /// Creates a datum without bars.
    pub fn new(range: (f64, f64), values: Vec<V>, options: AxisOptions) -> Self {
        Self {
            range,
            values,
            options,
            has_bars: false,
            bar_extent: 0.0,
        }
    }

    /// Marks whether bars are drawn against this axis.
    pub fn with_bars(mut self, has_bars: bool) -> Self {
        self.has_bars = has_bars;
        self
    }

    /// Sets the smallest slot one bar group needs.
    pub fn with_bar_extent(mut self, bar_extent: f64) -> Self {
        self.bar_extent = bar_extent.max(0.0);
        self
    }
}

/// One labelled reference point.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick<V> {
    /// The domain value.
    pub value: V,
    /// Pixel position along the axis.
    pub position: f64,
    /// Rendered label (may be empty when labels are thinned).
    pub label: String,
    /// Set when the tick keeps its domain slot but is not drawn.
    pub hide_tick: bool,
}

/// A gridline position. Rules are always interior to the axis range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    /// Pixel position along the axis.
    pub position: f64,
}

/// The result of computing one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisComputed<V> {
    /// Maps values (quant) or value indices (categorical, time) to pixels.
    pub scale: AxisScale,
    /// The requested pixel range.
    pub range: (f64, f64),
    /// `|range.1 - range.0|`.
    pub length: f64,
    /// One tick per displayed domain value, in value order.
    pub ticks: Vec<Tick<V>>,
    /// Gridline positions.
    pub rules: Vec<Rule>,
    /// Resolved options.
    pub options: FullAxisOptions,
    /// Width of one tick slot; `0` for quant axes without bars.
    pub tick_width: f64,
}

impl<V: PartialEq> AxisComputed<V> {
    /// Returns the pixel position of the tick holding `value`.
    pub fn tick_position(&self, value: &V) -> Option<f64> {
        self.ticks
            .iter()
            .find(|t| t.value == *value)
            .map(|t| t.position)
    }

    /// Returns the ticks that are drawn.
    pub fn visible_ticks(&self) -> impl Iterator<Item = &Tick<V>> + '_ {
        self.ticks.iter().filter(|t| !t.hide_tick)
    }
}

impl AxisComputed<f64> {
    /// Maps any number through the linear scale.
    pub fn position(&self, value: f64) -> Option<f64> {
        self.scale.as_linear().map(|s| s.map(value))
    }
}

/// A computed axis of any type.
#[derive(Clone, Debug, PartialEq)]
pub enum ComputedAxis {
    /// A quant axis.
    Quant(AxisComputed<f64>),
    /// A categorical axis.
    Categorical(AxisComputed<String>),
    /// A time axis.
    Time(AxisComputed<NaiveDateTime>),
}

macro_rules! each_axis {
    ($self:expr, $axis:ident => $body:expr) => {
        match $self {
            ComputedAxis::Quant($axis) => $body,
            ComputedAxis::Categorical($axis) => $body,
            ComputedAxis::Time($axis) => $body,
        }
    };
}

impl ComputedAxis {
    /// Returns the axis type.
    pub fn axis_type(&self) -> AxisType {
        match self {
            Self::Quant(_) => AxisType::Quant,
            Self::Categorical(_) => AxisType::Categorical,
            Self::Time(_) => AxisType::Time,
        }
    }

    /// Returns the requested pixel range.
    pub fn range(&self) -> (f64, f64) {
        each_axis!(self, a => a.range)
    }

    /// Returns the pixel length of the axis.
    pub fn length(&self) -> f64 {
        each_axis!(self, a => a.length)
    }

    /// Returns the width of one tick slot.
    pub fn tick_width(&self) -> f64 {
        each_axis!(self, a => a.tick_width)
    }

    /// Returns the number of ticks (hidden ones included).
    pub fn tick_count(&self) -> usize {
        each_axis!(self, a => a.ticks.len())
    }

    /// Returns the resolved options.
    pub fn options(&self) -> &FullAxisOptions {
        each_axis!(self, a => &a.options)
    }

    /// Returns the rules.
    pub fn rules(&self) -> &[Rule] {
        each_axis!(self, a => &a.rules)
    }

    /// Returns the scale.
    pub fn scale(&self) -> &AxisScale {
        each_axis!(self, a => &a.scale)
    }

    /// Returns the labels of visible ticks.
    pub fn visible_labels(&self) -> Vec<&str> {
        each_axis!(self, a => a.visible_ticks().map(|t| t.label.as_str()).collect())
    }

    /// Returns the pixel positions of all ticks.
    pub fn tick_positions(&self) -> Vec<f64> {
        each_axis!(self, a => a.ticks.iter().map(|t| t.position).collect())
    }

    /// Maps a raw value to a pixel position.
    ///
    /// Returns `None` when the variant does not match the axis type, or when a discrete
    /// value is not in the domain.
    pub fn position_of(&self, value: &AxisValue) -> Option<f64> {
        match (self, value) {
            (Self::Quant(a), AxisValue::Number(v)) => a.position(*v),
            (Self::Categorical(a), AxisValue::Text(s)) => a
                .ticks
                .iter()
                .find(|t| t.value == *s)
                .map(|t| t.position),
            (Self::Time(a), AxisValue::Time(t)) => a.tick_position(t),
            _ => None,
        }
    }

    /// Returns the quant axis, if any.
    pub fn as_quant(&self) -> Option<&AxisComputed<f64>> {
        match self {
            Self::Quant(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the categorical axis, if any.
    pub fn as_categorical(&self) -> Option<&AxisComputed<String>> {
        match self {
            Self::Categorical(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the time axis, if any.
    pub fn as_time(&self) -> Option<&AxisComputed<NaiveDateTime>> {
        match self {
            Self::Time(a) => Some(a),
            _ => None,
        }
    }
}
