// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time axes.
//!
//! A time axis places one tick per calendar period between its bounds. Paired time axes
//! (`x1`/`x2` or `y1`/`y2`) are aligned first: they must share an interval, and the shorter
//! one is extended period by period until both have the same number of values, so that the
//! n-th period of one axis sits at the same pixel as the n-th period of the other.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use chrono::NaiveDateTime;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::categorical::discrete_rules;
use crate::computed::{AxisComputed, InputDatum, Tick};
use crate::error::{AxisError, AxisResult};
use crate::format::truncate_label;
use crate::interval::{TimeInterval, ticks_in_domain};
use crate::options::{AxisType, FullAxisOptions};
use crate::position::AxisPosition;
use crate::scale::{AxisScale, ScaleBand, adjust_range, compute_tick_width, count_from_f64};

/// Every n-th week tick is shown.
pub const WEEK_TICK_STRIDE: usize = 6;

/// Computes the time axes of one orientation.
pub fn compute_time_axes(
    data: BTreeMap<AxisPosition, InputDatum<NaiveDateTime>>,
) -> AxisResult<BTreeMap<AxisPosition, AxisComputed<NaiveDateTime>>> {
    let aligned = align_axes(data)?;
    let mut out = BTreeMap::new();
    for (position, datum) in aligned {
        let options = datum.options.resolve();
        let interval = time_interval(position, &options)?;
        out.insert(position, compute_time_axis(datum, options, interval));
    }
    Ok(out)
}

/// Replaces each axis' values with the period starts of its domain and equalizes lengths.
///
/// Bounds come from the options, falling back to the extent of the axis values. If any axis
/// has bars, all of them do.
pub fn align_axes(
    data: BTreeMap<AxisPosition, InputDatum<NaiveDateTime>>,
) -> AxisResult<BTreeMap<AxisPosition, InputDatum<NaiveDateTime>>> {
    let mut shared: Option<TimeInterval> = None;
    let has_bars = data.values().any(|d| d.has_bars);
    let mut aligned = BTreeMap::new();

    for (position, mut datum) in data {
        let Some(time) = datum.options.kind.as_time() else {
            return Err(AxisError::TypeMismatch {
                orientation: position.orientation(),
                first: AxisType::Time,
                second: datum.options.axis_type(),
            });
        };
        let interval = time.interval;
        match shared {
            Some(first) if first != interval => {
                return Err(AxisError::IntervalMismatch {
                    first,
                    second: interval,
                });
            }
            _ => shared = Some(interval),
        }

        let start = time.start.or_else(|| datum.values.iter().min().copied());
        let end = time.end.or_else(|| datum.values.iter().max().copied());
        let (Some(start), Some(end)) = (start, end) else {
            return Err(AxisError::MissingTimeBounds(position));
        };

        datum.values = ticks_in_domain(start, end, interval);
        datum.has_bars = has_bars;
        aligned.insert(position, datum);
    }

    let target = aligned.values().map(|d| d.values.len()).max().unwrap_or(0);
    let Some(interval) = shared else {
        return Ok(aligned);
    };
    for (position, datum) in &mut aligned {
        let before = datum.values.len();
        while datum.values.len() < target {
            let Some(next) = datum.values.last().and_then(|t| interval.offset(*t, 1)) else {
                break;
            };
            datum.values.push(next);
        }
        if datum.values.len() != before {
            tracing::debug!(
                %position,
                from = before,
                to = datum.values.len(),
                "extended time axis to match its pair"
            );
        }
    }
    Ok(aligned)
}

fn time_interval(position: AxisPosition, options: &FullAxisOptions) -> AxisResult<TimeInterval> {
    options
        .kind
        .as_time()
        .map(|t| t.interval)
        .ok_or_else(|| AxisError::TypeMismatch {
            orientation: position.orientation(),
            first: AxisType::Time,
            second: options.kind.axis_type(),
        })
}

fn compute_time_axis(
    datum: InputDatum<NaiveDateTime>,
    options: FullAxisOptions,
    interval: TimeInterval,
) -> AxisComputed<NaiveDateTime> {
    let n = datum.values.len();
    let length = (datum.range.1 - datum.range.0).abs();
    let tick_width = compute_tick_width(datum.range, n);
    let scale = ScaleBand::new(adjust_range(datum.range, tick_width), n);

    let stride = if interval == TimeInterval::Week {
        WEEK_TICK_STRIDE
    } else {
        let wanted =
            count_from_f64((length / options.tick_spacing).floor()).max(options.min_ticks);
        n.div_ceil(wanted.clamp(1, n.max(1))).max(1)
    };

    let ticks: Vec<Tick<NaiveDateTime>> = datum
        .values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let label = interval.format(value);
            let label = match options.max_label_chars {
                Some(max) => truncate_label(&label, max),
                None => label,
            };
            Tick {
                value,
                position: scale.x(i),
                label,
                hide_tick: i % stride != 0,
            }
        })
        .collect();
    let rules = discrete_rules(&scale, &ticks, datum.has_bars);

    AxisComputed {
        scale: AxisScale::Band(scale),
        range: datum.range,
        length,
        ticks,
        rules,
        options,
        tick_width,
    }
}
