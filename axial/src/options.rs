// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis configuration.
//!
//! An axis is configured with [`AxisOptions`]: a tagged [`AxisKind`] carrying the
//! type-specific fields, plus a block of fields shared by every axis type. The options are
//! deserializable (`{"type": "time", "interval": "month", ...}`) and also come with
//! `with_*` builders for programmatic use.
//!
//! [`FullAxisOptions`] is the resolved form that computed axes carry, with every default
//! applied.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::computed::ComputedAxis;
use crate::interval::TimeInterval;

/// Default lower bound on the number of ticks.
pub const DEFAULT_MIN_TICKS: usize = 2;
/// Default minimum pixel distance between visible ticks.
pub const DEFAULT_TICK_SPACING: f64 = 80.0;
/// Default label font size.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// The three axis semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Continuous linear axis over numbers.
    Quant,
    /// Discrete axis over an ordered list of names.
    Categorical,
    /// Discrete axis over calendar periods.
    Time,
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quant => "quant",
            Self::Categorical => "categorical",
            Self::Time => "time",
        })
    }
}

/// Options specific to quant axes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantOptions {
    /// Domain start; defaults to `min(0, min(values))`.
    pub start: Option<f64>,
    /// Domain end; defaults to `max(0, max(values))`.
    pub end: Option<f64>,
    /// Fixed distance between ticks, bypassing automatic tick selection.
    pub tick_interval: Option<f64>,
    /// Fixed distance between rules; rules follow the ticks otherwise.
    pub rule_interval: Option<f64>,
    /// Only ticks on multiples of this value are labelled.
    pub label_interval: Option<f64>,
}

impl QuantOptions {
    /// Sets an explicit domain.
    pub fn with_domain(mut self, start: f64, end: f64) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Sets a fixed tick interval.
    pub fn with_tick_interval(mut self, interval: f64) -> Self {
        self.tick_interval = Some(interval);
        self
    }

    /// Sets a fixed rule interval.
    pub fn with_rule_interval(mut self, interval: f64) -> Self {
        self.rule_interval = Some(interval);
        self
    }

    /// Sets a label interval.
    pub fn with_label_interval(mut self, interval: f64) -> Self {
        self.label_interval = Some(interval);
        self
    }
}

/// Options specific to categorical axes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalOptions {
    /// Ordered category names. When empty, the distinct series values are used in
    /// first-seen order.
    pub values: Vec<String>,
}

/// Options specific to time axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeOptions {
    /// First instant on the axis; defaults to the earliest value.
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    /// Last instant on the axis; defaults to the latest value.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    /// Calendar period of one tick.
    pub interval: TimeInterval,
}

impl TimeOptions {
    /// Creates time options with no explicit bounds.
    pub fn new(interval: TimeInterval) -> Self {
        Self {
            start: None,
            end: None,
            interval,
        }
    }

    /// Sets explicit bounds.
    pub fn with_bounds(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }
}

/// Type-specific axis configuration, tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AxisKind {
    /// A quant axis.
    Quant(QuantOptions),
    /// A categorical axis.
    Categorical(CategoricalOptions),
    /// A time axis.
    Time(TimeOptions),
}

impl AxisKind {
    /// Returns the axis type of this configuration.
    pub fn axis_type(&self) -> AxisType {
        match self {
            Self::Quant(_) => AxisType::Quant,
            Self::Categorical(_) => AxisType::Categorical,
            Self::Time(_) => AxisType::Time,
        }
    }

    /// Returns the quant options, if any.
    pub fn as_quant(&self) -> Option<&QuantOptions> {
        match self {
            Self::Quant(q) => Some(q),
            _ => None,
        }
    }

    /// Returns the categorical options, if any.
    pub fn as_categorical(&self) -> Option<&CategoricalOptions> {
        match self {
            Self::Categorical(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the time options, if any.
    pub fn as_time(&self) -> Option<&TimeOptions> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }
}

impl From<QuantOptions> for AxisKind {
    fn from(value: QuantOptions) -> Self {
        Self::Quant(value)
    }
}

impl From<CategoricalOptions> for AxisKind {
    fn from(value: CategoricalOptions) -> Self {
        Self::Categorical(value)
    }
}

impl From<TimeOptions> for AxisKind {
    fn from(value: TimeOptions) -> Self {
        Self::Time(value)
    }
}

fn yes() -> bool {
    true
}

/// Configuration for one axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    /// Type-specific fields.
    #[serde(flatten)]
    pub kind: AxisKind,
    /// Fixed margin for this side of the plot; measured from the labels when `None`.
    #[serde(default)]
    pub margin: Option<f64>,
    /// Lower bound on the number of ticks.
    #[serde(default)]
    pub min_ticks: Option<usize>,
    /// Minimum pixel distance between visible ticks.
    #[serde(default)]
    pub tick_spacing: Option<f64>,
    /// Whether tick labels are drawn rotated.
    #[serde(default)]
    pub rotate_labels: bool,
    /// Whether tick marks are drawn.
    #[serde(default = "yes")]
    pub show_ticks: bool,
    /// Whether tick labels are drawn.
    #[serde(default = "yes")]
    pub show_labels: bool,
    /// Whether rules (gridlines) are drawn.
    #[serde(default = "yes")]
    pub show_rules: bool,
    /// Label font size.
    #[serde(default)]
    pub font_size: Option<f64>,
    /// Axis title.
    #[serde(default)]
    pub title: Option<String>,
    /// Labels longer than this many characters are truncated with `…`.
    #[serde(default)]
    pub max_label_chars: Option<usize>,
}

impl AxisOptions {
    /// Creates options of the given kind with every shared field at its default.
    pub fn new(kind: impl Into<AxisKind>) -> Self {
        Self {
            kind: kind.into(),
            margin: None,
            min_ticks: None,
            tick_spacing: None,
            rotate_labels: false,
            show_ticks: true,
            show_labels: true,
            show_rules: true,
            font_size: None,
            title: None,
            max_label_chars: None,
        }
    }

    /// Convenience constructor for a quant axis with an automatic domain.
    pub fn quant() -> Self {
        Self::new(QuantOptions::default())
    }

    /// Convenience constructor for a categorical axis over `values`.
    pub fn categorical<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(CategoricalOptions {
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    /// Convenience constructor for a time axis spanning `start..=end`.
    pub fn time(start: NaiveDateTime, end: NaiveDateTime, interval: TimeInterval) -> Self {
        Self::new(TimeOptions::new(interval).with_bounds(start, end))
    }

    /// Returns the axis type.
    pub fn axis_type(&self) -> AxisType {
        self.kind.axis_type()
    }

    /// Sets a fixed margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Sets the minimum tick count.
    pub fn with_min_ticks(mut self, min_ticks: usize) -> Self {
        self.min_ticks = Some(min_ticks);
        self
    }

    /// Sets the minimum pixel distance between visible ticks.
    pub fn with_tick_spacing(mut self, tick_spacing: f64) -> Self {
        self.tick_spacing = Some(tick_spacing);
        self
    }

    /// Enables or disables rotated labels.
    pub fn with_rotated_labels(mut self, rotate: bool) -> Self {
        self.rotate_labels = rotate;
        self
    }

    /// Enables or disables tick marks.
    pub fn with_ticks(mut self, show: bool) -> Self {
        self.show_ticks = show;
        self
    }

    /// Enables or disables tick labels.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Enables or disables rules.
    pub fn with_rules(mut self, show: bool) -> Self {
        self.show_rules = show;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Truncates labels to `max_chars` characters.
    pub fn with_max_label_chars(mut self, max_chars: usize) -> Self {
        self.max_label_chars = Some(max_chars);
        self
    }

    /// Applies defaults to every unset field.
    pub fn resolve(&self) -> FullAxisOptions {
        FullAxisOptions {
            kind: self.kind.clone(),
            margin: self.margin,
            min_ticks: self.min_ticks.unwrap_or(DEFAULT_MIN_TICKS),
            tick_spacing: self
                .tick_spacing
                .filter(|s| s.is_finite() && *s > 0.0)
                .unwrap_or(DEFAULT_TICK_SPACING),
            rotate_labels: self.rotate_labels,
            show_ticks: self.show_ticks,
            show_labels: self.show_labels,
            show_rules: self.show_rules,
            font_size: self
                .font_size
                .filter(|s| s.is_finite() && *s > 0.0)
                .unwrap_or(DEFAULT_FONT_SIZE),
            title: self.title.clone(),
            max_label_chars: self.max_label_chars,
        }
    }
}

/// Axis options with every default applied.
#[derive(Clone, Debug, PartialEq)]
pub struct FullAxisOptions {
    /// Type-specific fields.
    pub kind: AxisKind,
    /// Fixed margin, if configured.
    pub margin: Option<f64>,
    /// Lower bound on the number of ticks.
    pub min_ticks: usize,
    /// Minimum pixel distance between visible ticks (always positive).
    pub tick_spacing: f64,
    /// Whether tick labels are drawn rotated.
    pub rotate_labels: bool,
    /// Whether tick marks are drawn.
    pub show_ticks: bool,
    /// Whether tick labels are drawn.
    pub show_labels: bool,
    /// Whether rules are drawn.
    pub show_rules: bool,
    /// Label font size (always positive).
    pub font_size: f64,
    /// Axis title.
    pub title: Option<String>,
    /// Label truncation length.
    pub max_label_chars: Option<usize>,
}

/// How one axis position is configured: raw options, or an axis computed elsewhere.
///
/// Pre-computed axes bypass computation but still take part in pair validation.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisConfig {
    /// Compute the axis from these options on every draw.
    Options(AxisOptions),
    /// Use this axis as-is.
    Computed(ComputedAxis),
}

impl AxisConfig {
    /// Returns the axis type of this configuration.
    pub fn axis_type(&self) -> AxisType {
        match self {
            Self::Options(options) => options.axis_type(),
            Self::Computed(axis) => axis.axis_type(),
        }
    }
}

impl From<AxisOptions> for AxisConfig {
    fn from(value: AxisOptions) -> Self {
        Self::Options(value)
    }
}

impl From<ComputedAxis> for AxisConfig {
    fn from(value: ComputedAxis) -> Self {
        Self::Computed(value)
    }
}
