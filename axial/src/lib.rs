// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis computation and bar layout for charts.
//!
//! Axial turns per-axis configuration plus the raw values a chart plots into computed axes:
//! a scale, ticks with materialized labels, gridline rules, and for bar charts a width and
//! offset per bar series.
//!
//! - Up to two axes share an orientation (`x1`/`x2`, `y1`/`y2`). Paired axes are aligned:
//!   same type, same pixel range, and for time axes the same interval and number of periods.
//! - Three axis types exist: quant (continuous numbers), categorical (one slot per name) and
//!   time (one slot per calendar period).
//! - [`AxesManager`] drives a chart: it validates the configuration, computes axes in two
//!   passes so the plot shrinks to fit the measured axis labels, and lays out bars.
//!
//! Rendering, text shaping and series marks are out of scope: margins are estimated through
//! a [`TextMeasurer`] the caller provides.
//!
//! ```
//! use axial::{AxesManager, AxisOptions, AxisPosition, BarSeriesInfo, ChartData};
//! use axial::HeuristicTextMeasurer;
//! use kurbo::Size;
//!
//! let mut axes = AxesManager::new()
//!     .with_axis(AxisPosition::X1, AxisOptions::categorical(["north", "south"]))
//!     .with_axis(AxisPosition::Y1, AxisOptions::quant());
//! let data = ChartData::new()
//!     .with_values(AxisPosition::Y1, [120.0, 80.0, 95.0, 60.0])
//!     .with_bar_series(AxisPosition::X1, "2023", BarSeriesInfo::new(0))
//!     .with_bar_series(AxisPosition::X1, "2024", BarSeriesInfo::new(1));
//!
//! let frame = axes.draw(&data, Size::new(640.0, 480.0), &HeuristicTextMeasurer)?;
//! let bars = frame.bar_positions.as_ref().unwrap();
//! assert!(bars.offset("2023") < bars.offset("2024"));
//! # Ok::<(), axial::AxisError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (disabled by default): use `std` float math and enable `std` in dependencies.
//! - `libm` (enabled by default): float math for `no_std` builds.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bars;
mod categorical;
mod computed;
mod coordinator;
#[cfg(test)]
mod coordinator_tests;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod interval;
mod layout;
mod measure;
mod options;
mod pair;
mod position;
mod quant;
mod scale;
mod time;
mod value;

pub use bars::{
    BarConfig, BarPositions, BarSeriesInfo, BarSeriesMap, BarSlot, compute_bar_positions,
};
pub use categorical::compute_categorical_axes;
pub use computed::{AxisComputed, ComputedAxis, InputDatum, Rule, Tick};
pub use coordinator::{
    AxesFrame, AxesManager, AxisMap, ChartData, DEFAULT_PADDING, NumberFormatter,
    baseline_orientation,
};
pub use error::{AxisError, AxisResult};
pub use format::{format_si, truncate_label};
pub use interval::{MAX_PERIODS, TimeInterval, ticks_in_domain};
pub use layout::{PlotLayout, margins_for};
pub use measure::{
    HeuristicTextMeasurer, LABEL_ANGLE, LABEL_PADDING, TICK_SIZE, TITLE_OFFSET, TextMeasurer,
    axis_margin,
};
pub use options::{
    AxisConfig, AxisKind, AxisOptions, AxisType, CategoricalOptions, DEFAULT_FONT_SIZE,
    DEFAULT_MIN_TICKS, DEFAULT_TICK_SPACING, FullAxisOptions, QuantOptions, TimeOptions,
};
pub use pair::AlignedAxisPair;
pub use position::{AxisPosition, Orientation, PositionList};
pub use quant::{compute_quant_axis, distinct_value_count, quant_domain};
pub use scale::{AxisScale, ScaleBand, ScaleLinear, adjust_range, compute_tick_width, multiples};
pub use time::{WEEK_TICK_STRIDE, align_axes, compute_time_axes};
pub use value::AxisValue;
