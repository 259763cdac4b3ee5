// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quantitative axes.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::computed::{AxisComputed, InputDatum, Rule, Tick};
use crate::error::{AxisError, AxisResult};
use crate::format::truncate_label;
use crate::options::{AxisType, QuantOptions};
use crate::scale::{
    AxisScale, ScaleLinear, adjust_range, compute_tick_width, count_from_f64, multiples,
};

/// Relative tolerance used when comparing generated values to domain bounds and intervals.
const EPSILON: f64 = 1e-9;

/// Returns the default domain for `values`: anchored at zero, widened to cover negatives.
pub fn quant_domain(values: &[f64], options: &QuantOptions) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.iter().copied().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    let (lo, hi) = if lo > hi {
        (0.0, 0.0)
    } else {
        (lo.min(0.0), hi.max(0.0))
    };
    (options.start.unwrap_or(lo), options.end.unwrap_or(hi))
}

/// Returns the number of distinct finite values, i.e. the bar slots a quant axis needs.
pub fn distinct_value_count(values: &[f64]) -> usize {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}

/// Computes a quant axis.
///
/// Ticks are "nice" values inside the domain (or multiples of `tick_interval`), labelled with
/// `formatter`. Without an interval the tick count stays between `min_ticks` and the number
/// of `tick_spacing` steps that fit the axis length.
///
/// When bars are drawn against the axis, each distinct value gets one slot and the scale
/// range is inset by half a slot, or by half of [`InputDatum::bar_extent`] when the bar
/// groups need more, so that the outermost bars stay inside the requested range.
///
/// Fails with [`AxisError::UnexpectedAxisType`] when `datum` carries non-quant options.
pub fn compute_quant_axis(
    datum: &InputDatum<f64>,
    formatter: &dyn Fn(f64) -> String,
) -> AxisResult<AxisComputed<f64>> {
    let quant = datum
        .options
        .kind
        .as_quant()
        .ok_or_else(|| AxisError::UnexpectedAxisType {
            expected: AxisType::Quant,
            found: datum.options.axis_type(),
        })?;
    let options = datum.options.resolve();
    let length = (datum.range.1 - datum.range.0).abs();
    let domain = quant_domain(&datum.values, quant);

    let (tick_width, scale_range) = if datum.has_bars {
        let slots = distinct_value_count(&datum.values);
        let width = if slots == 0 {
            0.0
        } else {
            compute_tick_width(datum.range, slots)
        };
        (width, adjust_range(datum.range, width.max(datum.bar_extent)))
    } else {
        (0.0, datum.range)
    };
    let scale = ScaleLinear::new(domain, scale_range);

    let values = match quant.tick_interval.filter(|i| i.is_finite() && *i > 0.0) {
        Some(interval) => multiples(domain.0, domain.1, interval),
        None => {
            let max_ticks =
                count_from_f64((length / options.tick_spacing).floor()).max(options.min_ticks);
            scale.ticks(max_ticks)
        }
    };

    let label_interval = quant.label_interval.filter(|i| i.is_finite() && *i > 0.0);
    let ticks: Vec<Tick<f64>> = values
        .iter()
        .map(|&value| {
            let label = match label_interval {
                Some(interval) if !is_multiple(value, interval) => String::new(),
                _ => {
                    let label = formatter(value);
                    match options.max_label_chars {
                        Some(max) => truncate_label(&label, max),
                        None => label,
                    }
                }
            };
            Tick {
                value,
                position: scale.map(value),
                label,
                hide_tick: false,
            }
        })
        .collect();

    let rule_values = match quant.rule_interval.filter(|i| i.is_finite() && *i > 0.0) {
        Some(interval) => multiples(domain.0, domain.1, interval),
        None => values,
    };
    let span = (domain.1 - domain.0).abs().max(1.0);
    let rules: Vec<Rule> = rule_values
        .into_iter()
        .filter(|v| {
            (v - domain.0).abs() > EPSILON * span && (v - domain.1).abs() > EPSILON * span
        })
        .map(|v| Rule {
            position: scale.map(v),
        })
        .collect();

    tracing::trace!(?domain, ticks = ticks.len(), rules = rules.len(), "computed quant axis");

    Ok(AxisComputed {
        scale: AxisScale::Linear(scale),
        range: datum.range,
        length,
        ticks,
        rules,
        options,
        tick_width,
    })
}

fn is_multiple(value: f64, interval: f64) -> bool {
    let q = value / interval;
    (q - q.round()).abs() < 1e-6
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::format::format_si;
    use crate::options::{AxisOptions, CategoricalOptions};
    use alloc::vec;

    fn datum(values: Vec<f64>, options: AxisOptions) -> InputDatum<f64> {
        InputDatum::new((0.0, 300.0), values, options)
    }

    fn compute(datum: &InputDatum<f64>) -> AxisComputed<f64> {
        compute_quant_axis(datum, &format_si).unwrap()
    }

    #[test]
    fn domain_is_anchored_at_zero() {
        let axis = compute(&datum(vec![10.0, 40.0, 25.0], AxisOptions::quant()));
        let scale = axis.scale.as_linear().unwrap();

        assert_eq!(scale.domain(), (0.0, 40.0));
        assert_eq!(axis.position(0.0), Some(0.0));
        assert_eq!(axis.position(40.0), Some(300.0));
        let values: Vec<f64> = axis.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, [0.0, 20.0, 40.0]);
        assert_eq!(axis.ticks[1].label, "20");
    }

    #[test]
    fn tick_count_fits_the_tick_spacing() {
        // 300px at 80px per tick leaves room for three ticks; step 10 would need five.
        let axis = compute(&datum(vec![10.0, 40.0, 25.0], AxisOptions::quant()));
        assert!(axis.ticks.len() <= 3, "{} ticks", axis.ticks.len());

        for (length, max) in [(160.0, 20.0), (400.0, 43.0), (640.0, 1234.0), (1000.0, 7.0)] {
            let d = InputDatum::new((0.0, length), vec![max], AxisOptions::quant());
            let axis = compute(&d);
            let allowed = (length / 80.0).floor();
            assert!(
                axis.ticks.len() as f64 <= allowed,
                "{} ticks on {length}px for [0, {max}]",
                axis.ticks.len()
            );
            assert!(axis.ticks.len() >= 2, "too few ticks on {length}px");
        }
    }

    #[test]
    fn min_ticks_raises_the_maximum() {
        let options = AxisOptions::quant().with_min_ticks(5);
        let d = InputDatum::new((0.0, 100.0), vec![40.0], options);
        let values: Vec<f64> = compute(&d).ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, [0.0, 10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn negative_values_extend_the_domain() {
        let axis = compute(&datum(vec![-20.0, 40.0], AxisOptions::quant()));
        assert_eq!(axis.scale.as_linear().unwrap().domain(), (-20.0, 40.0));
    }

    #[test]
    fn empty_values_give_a_zero_domain() {
        let axis = compute(&datum(Vec::new(), AxisOptions::quant()));
        assert_eq!(axis.scale.as_linear().unwrap().domain(), (0.0, 0.0));
        assert!(axis.rules.is_empty());
    }

    #[test]
    fn explicit_bounds_win() {
        let options = AxisOptions::new(QuantOptions::default().with_domain(5.0, 50.0));
        let axis = compute(&datum(vec![10.0, 40.0], options));
        assert_eq!(axis.scale.as_linear().unwrap().domain(), (5.0, 50.0));
    }

    #[test]
    fn rules_skip_domain_bounds() {
        let d = InputDatum::new((0.0, 400.0), vec![40.0], AxisOptions::quant());
        let axis = compute(&d);
        let rules: Vec<f64> = axis.rules.iter().map(|r| r.position).collect();
        assert_eq!(rules, [100.0, 200.0, 300.0]);
    }

    #[test]
    fn intervals_override_ticks_rules_and_labels() {
        let options = AxisOptions::new(
            QuantOptions::default()
                .with_tick_interval(5.0)
                .with_rule_interval(20.0)
                .with_label_interval(10.0),
        );
        let axis = compute(&datum(vec![40.0], options));

        assert_eq!(axis.ticks.len(), 9);
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "", "10", "", "20", "", "30", "", "40"]);
        let rules: Vec<f64> = axis.rules.iter().map(|r| r.position).collect();
        assert_eq!(rules, [150.0]);
    }

    #[test]
    fn bars_inset_the_scale_range() {
        let d = datum(vec![10.0, 20.0, 30.0], AxisOptions::quant()).with_bars(true);
        let axis = compute(&d);

        assert_eq!(axis.tick_width, 100.0);
        assert_eq!(axis.scale.range(), (50.0, 250.0));
        assert_eq!(axis.range, (0.0, 300.0));
    }

    #[test]
    fn repeated_values_share_one_bar_slot() {
        // Two series plotting the same three x values.
        let d = InputDatum::new(
            (0.0, 600.0),
            vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0],
            AxisOptions::quant(),
        )
        .with_bars(true);
        let axis = compute(&d);

        assert_eq!(axis.tick_width, 200.0);
        assert_eq!(axis.scale.range(), (100.0, 500.0));
    }

    #[test]
    fn wide_bar_groups_inflate_the_inset() {
        let d = datum(vec![10.0, 20.0, 30.0], AxisOptions::quant())
            .with_bars(true)
            .with_bar_extent(160.0);
        let axis = compute(&d);

        assert_eq!(axis.tick_width, 100.0);
        assert_eq!(axis.scale.range(), (80.0, 220.0));
    }

    #[test]
    fn distinct_values_ignore_repeats_and_non_finite() {
        assert_eq!(distinct_value_count(&[3.0, 1.0, 3.0, f64::NAN, 2.0, 1.0]), 3);
        assert_eq!(distinct_value_count(&[]), 0);
    }

    #[test]
    fn custom_formatter_is_used() {
        let options = AxisOptions::quant().with_max_label_chars(4);
        let axis = compute_quant_axis(&datum(vec![40.0], options), &|v| alloc::format!("{v} units"))
            .unwrap();
        assert_eq!(axis.ticks[0].label, "0 u…");
    }

    #[test]
    fn other_axis_types_are_rejected() {
        let options = AxisOptions::new(CategoricalOptions::default());
        let err = compute_quant_axis(&datum(vec![1.0], options), &format_si).unwrap_err();
        assert_eq!(
            err,
            AxisError::UnexpectedAxisType {
                expected: AxisType::Quant,
                found: AxisType::Categorical,
            }
        );
    }
}
