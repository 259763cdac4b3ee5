// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-chart axis coordination.
//!
//! [`AxesManager`] owns the axis configuration of one chart. Each [`AxesManager::draw`]
//! validates the configuration against the chart data, computes every axis, measures the
//! margins the axes need, computes the axes again inside the shrunken plot, and finally lays
//! out bar slots along the discrete orientation.
//!
//! A draw either succeeds completely or leaves the manager untouched.

extern crate alloc;

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use chrono::NaiveDateTime;
use hashbrown::HashSet;
use kurbo::{Insets, Size};

use crate::bars::{BarConfig, BarPositions, BarSeriesInfo, BarSeriesMap, compute_bar_positions};
use crate::categorical::compute_categorical_axes;
use crate::computed::{ComputedAxis, InputDatum};
use crate::error::{AxisError, AxisResult};
use crate::format::format_si;
use crate::layout::{PlotLayout, margins_for};
use crate::measure::{TextMeasurer, axis_margin};
use crate::options::{AxisConfig, AxisType};
use crate::pair::AlignedAxisPair;
use crate::position::{AxisPosition, Orientation, PositionList};
use crate::quant::compute_quant_axis;
use crate::time::compute_time_axes;
use crate::value::AxisValue;

/// Default space between the drawing area edge and the axes.
pub const DEFAULT_PADDING: f64 = 8.0;

/// Formats quant tick values.
pub type NumberFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Computed axes by position.
pub type AxisMap = BTreeMap<AxisPosition, ComputedAxis>;

/// The series data a chart plots, reduced to what axes need.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    /// Raw values plotted against each position.
    pub values: BTreeMap<AxisPosition, Vec<AxisValue>>,
    /// Bar series by key.
    pub bar_series: BarSeriesMap,
    /// Positions bars are drawn against.
    pub bar_axes: Vec<AxisPosition>,
}

impl ChartData {
    /// Creates empty chart data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends values plotted against `position`.
    pub fn with_values<I, V>(mut self, position: AxisPosition, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AxisValue>,
    {
        self.values
            .entry(position)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Adds a bar series drawn against `position`.
    pub fn with_bar_series(
        mut self,
        position: AxisPosition,
        key: impl Into<String>,
        info: BarSeriesInfo,
    ) -> Self {
        self.bar_series.insert(key.into(), info);
        if !self.bar_axes.contains(&position) {
            self.bar_axes.push(position);
        }
        self
    }

    /// Returns every position the data refers to.
    pub fn referenced_positions(&self) -> BTreeSet<AxisPosition> {
        self.values
            .keys()
            .chain(self.bar_axes.iter())
            .copied()
            .collect()
    }

    fn has_bars(&self, position: AxisPosition) -> bool {
        self.bar_axes.contains(&position)
    }

    fn values_at(&self, position: AxisPosition) -> &[AxisValue] {
        self.values.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The result of one successful draw.
#[derive(Clone, Debug, PartialEq)]
pub struct AxesFrame {
    /// Computed axes by position.
    pub axes: AxisMap,
    /// The orientation bars grow along.
    pub baseline: Orientation,
    /// Bar slots, when the chart has bar series.
    pub bar_positions: Option<BarPositions>,
    /// Plot rectangle and margins of the final pass.
    pub layout: PlotLayout,
}

/// Returns the orientation bars grow along.
///
/// Bars grow horizontally only when the x axes are quant and the y axes are not.
pub fn baseline_orientation(x: AxisType, y: AxisType) -> Orientation {
    if x == AxisType::Quant && y != AxisType::Quant {
        Orientation::X
    } else {
        Orientation::Y
    }
}

/// Owns the axis configuration of one chart and computes its axes.
///
/// ```
/// use axial::{AxesManager, AxisOptions, AxisPosition, ChartData, HeuristicTextMeasurer};
/// use kurbo::Size;
///
/// let mut axes = AxesManager::new()
///     .with_axis(AxisPosition::X1, AxisOptions::categorical(["a", "b", "c"]))
///     .with_axis(AxisPosition::Y1, AxisOptions::quant());
/// let data = ChartData::new()
///     .with_values(AxisPosition::X1, ["a", "b", "c"])
///     .with_values(AxisPosition::Y1, [3.0, 7.0, 5.0]);
///
/// let frame = axes
///     .draw(&data, Size::new(400.0, 300.0), &HeuristicTextMeasurer)
///     .unwrap();
/// assert_eq!(frame.axes[&AxisPosition::X1].tick_count(), 3);
/// ```
pub struct AxesManager {
    configs: BTreeMap<AxisPosition, AxisConfig>,
    bar_config: BarConfig,
    number_formatter: NumberFormatter,
    time_axis_priority: Vec<AxisPosition>,
    padding: f64,
    margins: Option<Insets>,
    frame: Option<AxesFrame>,
    previous: Option<AxisMap>,
}

impl fmt::Debug for AxesManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxesManager")
            .field("configs", &self.configs)
            .field("bar_config", &self.bar_config)
            .field("time_axis_priority", &self.time_axis_priority)
            .field("padding", &self.padding)
            .field("margins", &self.margins)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl Default for AxesManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AxesManager {
    /// Creates a manager with no axes.
    pub fn new() -> Self {
        Self {
            configs: BTreeMap::new(),
            bar_config: BarConfig::default(),
            number_formatter: Arc::new(format_si),
            time_axis_priority: Vec::new(),
            padding: DEFAULT_PADDING,
            margins: None,
            frame: None,
            previous: None,
        }
    }

    /// Configures the axis at `position`.
    pub fn with_axis(mut self, position: AxisPosition, config: impl Into<AxisConfig>) -> Self {
        self.set_axis(position, config);
        self
    }

    /// Configures the axis at `position`, returning the previous configuration.
    pub fn set_axis(
        &mut self,
        position: AxisPosition,
        config: impl Into<AxisConfig>,
    ) -> Option<AxisConfig> {
        self.configs.insert(position, config.into())
    }

    /// Removes the axis at `position`.
    pub fn remove_axis(&mut self, position: AxisPosition) -> Option<AxisConfig> {
        self.configs.remove(&position)
    }

    /// Sets the bar spacing rules.
    pub fn with_bar_config(mut self, bar_config: BarConfig) -> Self {
        self.bar_config = bar_config;
        self
    }

    /// Sets the formatter for quant tick labels.
    pub fn with_number_formatter(
        mut self,
        formatter: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.number_formatter = Arc::new(formatter);
        self
    }

    /// Sets the order in which positions are considered by [`Self::priority_time_axis`].
    pub fn with_time_axis_priority(mut self, priority: Vec<AxisPosition>) -> Self {
        self.time_axis_priority = priority;
        self
    }

    /// Sets the space between the drawing area edge and the axes.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Returns the configured axes.
    pub fn configs(&self) -> &BTreeMap<AxisPosition, AxisConfig> {
        &self.configs
    }

    /// Returns the bar spacing rules.
    pub fn bar_config(&self) -> &BarConfig {
        &self.bar_config
    }

    /// Checks that `data` only refers to configured positions and that both orientations
    /// have an axis.
    pub fn validate(&self, data: &ChartData) -> AxisResult<()> {
        let missing: PositionList = data
            .referenced_positions()
            .into_iter()
            .filter(|p| !self.configs.contains_key(p))
            .collect();
        if !missing.0.is_empty() {
            return Err(AxisError::UndefinedAxes(missing));
        }
        for orientation in Orientation::ALL {
            let configured = orientation
                .positions()
                .iter()
                .any(|p| self.configs.contains_key(p));
            if !configured {
                return Err(AxisError::MissingOrientation(orientation));
            }
        }
        Ok(())
    }

    /// Computes every configured axis once, against the plot rectangle of `layout`.
    ///
    /// Pre-computed axes are returned as they are, and their range is imposed on the axis
    /// they are paired with.
    pub fn compute_axes(&self, data: &ChartData, layout: &PlotLayout) -> AxisResult<AxisMap> {
        let mut out = AxisMap::new();
        let bar_extent = self.bar_extent(data);
        for orientation in Orientation::ALL {
            let pair = AlignedAxisPair::new(orientation, &self.configs)?;
            let range = pair.range().unwrap_or_else(|| layout.range(orientation));
            for (position, axis) in pair.computed() {
                out.insert(position, axis.clone());
            }
            match pair.axis_type() {
                AxisType::Quant => {
                    for (position, options) in pair.options() {
                        let values =
                            convert(data, position, AxisType::Quant, AxisValue::as_number)?;
                        let datum = InputDatum::new(range, values, options.clone())
                            .with_bars(data.has_bars(position))
                            .with_bar_extent(bar_extent);
                        let axis = compute_quant_axis(&datum, &*self.number_formatter)?;
                        out.insert(position, ComputedAxis::Quant(axis));
                    }
                }
                AxisType::Categorical => {
                    let mut inputs = BTreeMap::new();
                    for (position, options) in pair.options() {
                        let mut values = options
                            .kind
                            .as_categorical()
                            .map(|c| c.values.clone())
                            .unwrap_or_default();
                        if values.is_empty() {
                            values = distinct_categories(data, position)?;
                        }
                        let datum = InputDatum::new(range, values, options.clone())
                            .with_bars(data.has_bars(position));
                        inputs.insert(position, datum);
                    }
                    for (position, axis) in compute_categorical_axes(inputs)? {
                        out.insert(position, ComputedAxis::Categorical(axis));
                    }
                }
                AxisType::Time => {
                    let mut inputs = BTreeMap::new();
                    for (position, options) in pair.options() {
                        let values: Vec<NaiveDateTime> =
                            convert(data, position, AxisType::Time, AxisValue::as_time)?;
                        let datum = InputDatum::new(range, values, options.clone())
                            .with_bars(data.has_bars(position));
                        inputs.insert(position, datum);
                    }
                    for (position, axis) in compute_time_axes(inputs)? {
                        out.insert(position, ComputedAxis::Time(axis));
                    }
                }
            }
        }
        for (position, axis) in &out {
            tracing::trace!(
                %position,
                axis_type = %axis.axis_type(),
                ticks = axis.tick_count(),
                tick_width = axis.tick_width(),
                "computed axis"
            );
        }
        Ok(out)
    }

    /// Computes all axes for `data` drawn into `area`.
    ///
    /// The axes are computed twice: once to measure the margins they need, and once more
    /// inside the plot rectangle those margins leave. The measured margins seed the first
    /// pass of the next draw.
    pub fn draw(
        &mut self,
        data: &ChartData,
        area: Size,
        measurer: &dyn TextMeasurer,
    ) -> AxisResult<&AxesFrame> {
        self.validate(data)?;
        tracing::debug!(?area, axes = self.configs.len(), "drawing axes");

        let seed = self.margins.unwrap_or_else(|| Insets::uniform(self.padding));
        let first = self.compute_axes(data, &PlotLayout::arrange(area, seed))?;

        let measured: BTreeMap<AxisPosition, f64> = first
            .iter()
            .map(|(position, axis)| {
                (*position, axis_margin(axis, position.orientation(), measurer))
            })
            .collect();
        let margins = margins_for(&measured, self.padding);
        tracing::debug!(?margins, "measured axis margins");

        let layout = PlotLayout::arrange(area, margins);
        let axes = self.compute_axes(data, &layout)?;

        let baseline = match (
            primary_type(&axes, Orientation::X),
            primary_type(&axes, Orientation::Y),
        ) {
            (Some(x), Some(y)) => baseline_orientation(x, y),
            _ => Orientation::Y,
        };
        let bar_positions = self.layout_bars(data, &axes, baseline);
        tracing::debug!(
            %baseline,
            bars = bar_positions.as_ref().map_or(0, BarPositions::len),
            "axes drawn"
        );

        self.margins = Some(margins);
        self.previous = self.frame.take().map(|frame| frame.axes);
        Ok(self.frame.insert(AxesFrame {
            axes,
            baseline,
            bar_positions,
            layout,
        }))
    }

    /// Returns the smallest slot the bar groups of `data` fit in, outer spacing included.
    ///
    /// This is the allocator's layout for an empty slot: every variable-width group at its
    /// minimum width, fixed-width groups at their own width.
    fn bar_extent(&self, data: &ChartData) -> f64 {
        if data.bar_series.is_empty() {
            return 0.0;
        }
        let packed = compute_bar_positions((0.0, 0.0), 1, &self.bar_config, &data.bar_series);
        packed.total_width() + self.bar_config.outer_bar_spacing
    }

    fn layout_bars(
        &self,
        data: &ChartData,
        axes: &AxisMap,
        baseline: Orientation,
    ) -> Option<BarPositions> {
        if data.bar_series.is_empty() {
            return None;
        }
        let along = baseline.other();
        let axis = data
            .bar_axes
            .iter()
            .filter(|position| position.orientation() == along)
            .find_map(|position| axes.get(position))
            .or_else(|| {
                along
                    .positions()
                    .iter()
                    .find_map(|position| axes.get(position))
            })?;
        let mut slot = axis.tick_width();
        if slot <= 0.0 {
            slot = axis.length() / axis.tick_count().max(1) as f64;
        }
        let width = (slot - self.bar_config.outer_bar_spacing).max(0.0);
        Some(compute_bar_positions(
            (0.0, width),
            1,
            &self.bar_config,
            &data.bar_series,
        ))
    }

    /// Returns the result of the last successful draw.
    pub fn frame(&self) -> Option<&AxesFrame> {
        self.frame.as_ref()
    }

    /// Returns the axes of the last successful draw.
    pub fn axes(&self) -> Option<&AxisMap> {
        self.frame.as_ref().map(|f| &f.axes)
    }

    /// Returns the computed axis at `position` from the last successful draw.
    pub fn axis(&self, position: AxisPosition) -> Option<&ComputedAxis> {
        self.axes()?.get(&position)
    }

    /// Returns the axes of the draw before the last one.
    pub fn previous_axes(&self) -> Option<&AxisMap> {
        self.previous.as_ref()
    }

    /// Returns the orientation bars grow along.
    pub fn baseline(&self) -> Option<Orientation> {
        self.frame.as_ref().map(|f| f.baseline)
    }

    /// Returns the bar slots of the last successful draw.
    pub fn bar_positions(&self) -> Option<&BarPositions> {
        self.frame.as_ref()?.bar_positions.as_ref()
    }

    /// Returns the margins measured by the last successful draw.
    pub fn margins(&self) -> Option<Insets> {
        self.margins
    }

    /// Returns the time axis series should prefer, if any axis is a time axis.
    ///
    /// Positions from [`Self::with_time_axis_priority`] are tried first, then all positions
    /// in `x1, x2, y1, y2` order.
    pub fn priority_time_axis(&self) -> Option<AxisPosition> {
        self.time_axis_priority
            .iter()
            .chain(AxisPosition::ALL.iter())
            .copied()
            .find(|p| {
                self.configs
                    .get(p)
                    .is_some_and(|c| c.axis_type() == AxisType::Time)
            })
    }

    /// Maps a raw value to a pixel position on the axis at `position`.
    pub fn position_of(&self, position: AxisPosition, value: &AxisValue) -> Option<f64> {
        self.axis(position)?.position_of(value)
    }
}

fn primary_type(axes: &AxisMap, orientation: Orientation) -> Option<AxisType> {
    orientation
        .positions()
        .iter()
        .find_map(|p| axes.get(p))
        .map(ComputedAxis::axis_type)
}

fn convert<'a, T>(
    data: &'a ChartData,
    position: AxisPosition,
    axis_type: AxisType,
    extract: impl Fn(&'a AxisValue) -> Option<T>,
) -> AxisResult<Vec<T>> {
    data.values_at(position)
        .iter()
        .map(|value| {
            extract(value).ok_or_else(|| AxisError::InvalidValue {
                position,
                axis_type,
                value: value.to_string(),
            })
        })
        .collect()
}

fn distinct_categories(data: &ChartData, position: AxisPosition) -> AxisResult<Vec<String>> {
    let texts = convert(data, position, AxisType::Categorical, AxisValue::as_text)?;
    let mut seen = HashSet::with_capacity(texts.len());
    Ok(texts
        .into_iter()
        .filter(|text| seen.insert(*text))
        .map(String::from)
        .collect())
}
