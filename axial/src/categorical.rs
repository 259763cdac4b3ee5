// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical axes.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::computed::{AxisComputed, InputDatum, Rule, Tick};
use crate::error::{AxisError, AxisResult};
use crate::format::truncate_label;
use crate::position::{AxisPosition, PositionList};
use crate::scale::{AxisScale, ScaleBand, adjust_range, compute_tick_width};

/// Computes the categorical axes of one orientation.
///
/// Categorical axes cannot be paired, so at most one position may be present.
pub fn compute_categorical_axes(
    data: BTreeMap<AxisPosition, InputDatum<String>>,
) -> AxisResult<BTreeMap<AxisPosition, AxisComputed<String>>> {
    if data.len() > 1 {
        return Err(AxisError::CategoricalNotAlignable(
            data.keys().copied().collect::<PositionList>(),
        ));
    }
    Ok(data
        .into_iter()
        .map(|(position, datum)| (position, compute_categorical_axis(datum)))
        .collect())
}

fn compute_categorical_axis(datum: InputDatum<String>) -> AxisComputed<String> {
    let options = datum.options.resolve();
    let length = (datum.range.1 - datum.range.0).abs();
    let tick_width = compute_tick_width(datum.range, datum.values.len());
    let scale = ScaleBand::new(adjust_range(datum.range, tick_width), datum.values.len());

    let ticks: Vec<Tick<String>> = datum
        .values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let label = match options.max_label_chars {
                Some(max) => truncate_label(&value, max),
                None => value.clone(),
            };
            Tick {
                value,
                position: scale.x(i),
                label,
                hide_tick: false,
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

/// Rules for axes whose values occupy one slot each.
///
/// Without bars, rules go through the visible interior ticks. With bars they separate the
/// slots instead, so no rule runs through a bar.
pub(crate) fn discrete_rules<V>(scale: &ScaleBand, ticks: &[Tick<V>], has_bars: bool) -> Vec<Rule> {
    let n = ticks.len();
    if n < 2 {
        return Vec::new();
    }
    if has_bars {
        let half_step = 0.5 * scale.step();
        (1..n)
            .map(|i| Rule {
                position: scale.x(i) - half_step,
            })
            .collect()
    } else {
        ticks[1..n - 1]
            .iter()
            .filter(|t| !t.hide_tick)
            .map(|t| Rule {
                position: t.position,
            })
            .collect()
    }
}
