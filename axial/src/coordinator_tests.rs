// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use chrono::{NaiveDate, NaiveDateTime};
use kurbo::{Rect, Size};

use crate::{
    AxesManager, AxisConfig, AxisError, AxisOptions, AxisPosition, AxisType, AxisValue,
    BarSeriesInfo, ChartData, ComputedAxis, HeuristicTextMeasurer, InputDatum, Orientation,
    PositionList, TimeInterval, compute_quant_axis, format_si,
};

fn month(y: i32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid test date")
}

/// A manager whose axes take no room, so the plot fills the whole area.
fn flush(manager: AxesManager) -> AxesManager {
    manager.with_padding(0.0)
}

fn quant() -> AxisOptions {
    AxisOptions::quant().with_margin(0.0)
}

fn categorical(values: &[&str]) -> AxisOptions {
    AxisOptions::categorical(values.iter().copied()).with_margin(0.0)
}

#[test]
fn quant_axis_is_anchored_at_zero_and_fills_the_plot() {
    let mut axes = flush(
        AxesManager::new()
            .with_axis(AxisPosition::X1, categorical(&["a", "b", "c"]))
            .with_axis(AxisPosition::Y1, quant()),
    );
    let data = ChartData::new().with_values(AxisPosition::Y1, [10.0, 40.0, 25.0]);

    let frame = axes
        .draw(&data, Size::new(300.0, 300.0), &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(frame.layout.plot, Rect::new(0.0, 0.0, 300.0, 300.0));

    let y = frame.axes[&AxisPosition::Y1].as_quant().unwrap();
    assert_eq!(y.scale.as_linear().unwrap().domain(), (0.0, 40.0));
    assert_eq!(y.position(0.0), Some(300.0));
    assert_eq!(y.position(40.0), Some(0.0));
    assert_eq!(
        axes.position_of(AxisPosition::Y1, &AxisValue::Number(40.0)),
        Some(0.0)
    );
    assert_eq!(
        axes.position_of(AxisPosition::X1, &AxisValue::from("b")),
        Some(150.0)
    );
}

#[test]
fn quant_and_categorical_x_axes_cannot_be_aligned() {
    let mut axes = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::quant())
        .with_axis(AxisPosition::X2, AxisOptions::categorical(["a"]))
        .with_axis(AxisPosition::Y1, AxisOptions::quant());

    let err = axes
        .draw(&ChartData::new(), Size::new(300.0, 200.0), &HeuristicTextMeasurer)
        .unwrap_err();
    assert_eq!(
        err,
        AxisError::TypeMismatch {
            orientation: Orientation::X,
            first: AxisType::Quant,
            second: AxisType::Categorical,
        }
    );
    assert!(err.to_string().contains("cannot be aligned"));
    assert!(axes.frame().is_none());
}

#[test]
fn data_on_an_undefined_axis_is_rejected() {
    let mut axes = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::categorical(["a"]))
        .with_axis(AxisPosition::Y1, AxisOptions::quant());
    let data = ChartData::new().with_values(AxisPosition::Y2, [1.0]);

    let err = axes
        .draw(&data, Size::new(300.0, 200.0), &HeuristicTextMeasurer)
        .unwrap_err();
    assert_eq!(
        err,
        AxisError::UndefinedAxes(PositionList(vec![AxisPosition::Y2]))
    );
    assert_eq!(
        err.to_string(),
        "axes y2 are referenced by series data but not defined"
    );
}

#[test]
fn both_orientations_are_required() {
    let axes = AxesManager::new().with_axis(AxisPosition::X1, AxisOptions::quant());
    assert_eq!(
        axes.validate(&ChartData::new()),
        Err(AxisError::MissingOrientation(Orientation::Y))
    );
}

#[test]
fn values_of_the_wrong_kind_are_rejected() {
    let mut axes = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::categorical(["a"]))
        .with_axis(AxisPosition::Y1, AxisOptions::quant());
    let data = ChartData::new().with_values(AxisPosition::Y1, ["a"]);

    let err = axes
        .draw(&data, Size::new(300.0, 200.0), &HeuristicTextMeasurer)
        .unwrap_err();
    assert_eq!(
        err,
        AxisError::InvalidValue {
            position: AxisPosition::Y1,
            axis_type: AxisType::Quant,
            value: String::from("\"a\""),
        }
    );
}

#[test]
fn second_pass_uses_measured_margins() {
    let mut axes = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::categorical(["north", "south"]))
        .with_axis(AxisPosition::Y1, AxisOptions::quant().with_title("Units"));
    let data = ChartData::new().with_values(AxisPosition::Y1, [1200.0, 800.0]);

    let frame = axes
        .draw(&data, Size::new(640.0, 480.0), &HeuristicTextMeasurer)
        .unwrap()
        .clone();

    assert!(frame.layout.plot.x0 > crate::DEFAULT_PADDING);
    assert!(frame.layout.plot.y1 < 480.0 - crate::DEFAULT_PADDING);
    assert_eq!(axes.margins(), Some(frame.layout.margins));
    assert_eq!(
        frame.axes[&AxisPosition::X1].range(),
        frame.layout.range(Orientation::X)
    );
    assert_eq!(
        frame.axes[&AxisPosition::Y1].range(),
        frame.layout.range(Orientation::Y)
    );
}

#[test]
fn identical_inputs_give_identical_axes() {
    let build = || {
        AxesManager::new()
            .with_axis(AxisPosition::X1, AxisOptions::categorical(["a", "b", "c"]))
            .with_axis(AxisPosition::Y1, AxisOptions::quant())
            .with_axis(AxisPosition::Y2, AxisOptions::quant())
    };
    let data = ChartData::new()
        .with_values(AxisPosition::Y1, [3.0, 9.0, 4.0])
        .with_values(AxisPosition::Y2, [0.25, 0.5, 0.75])
        .with_bar_series(AxisPosition::X1, "s", BarSeriesInfo::new(0));
    let size = Size::new(500.0, 320.0);

    let mut first = build();
    let mut second = build();
    let a = first.draw(&data, size, &HeuristicTextMeasurer).unwrap().clone();
    let b = second.draw(&data, size, &HeuristicTextMeasurer).unwrap().clone();
    assert_eq!(a, b);
}

#[test]
fn previous_axes_are_kept_across_draws() {
    let mut axes = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::categorical(["a", "b"]))
        .with_axis(AxisPosition::Y1, AxisOptions::quant());
    let small = ChartData::new().with_values(AxisPosition::Y1, [5.0]);
    let large = ChartData::new().with_values(AxisPosition::Y1, [500.0]);
    let size = Size::new(300.0, 200.0);

    let first = axes
        .draw(&small, size, &HeuristicTextMeasurer)
        .unwrap()
        .axes
        .clone();
    assert!(axes.previous_axes().is_none());

    axes.draw(&large, size, &HeuristicTextMeasurer).unwrap();
    assert_eq!(axes.previous_axes(), Some(&first));

    // A failed draw leaves everything as it was.
    let current = axes.axes().cloned();
    axes.set_axis(AxisPosition::X2, AxisOptions::quant());
    assert!(axes.draw(&large, size, &HeuristicTextMeasurer).is_err());
    assert_eq!(axes.axes().cloned(), current);
    assert_eq!(axes.previous_axes(), Some(&first));
}

#[test]
fn vertical_bars_share_each_category_slot() {
    let mut axes = flush(
        AxesManager::new()
            .with_axis(AxisPosition::X1, categorical(&["q1", "q2", "q3", "q4"]))
            .with_axis(AxisPosition::Y1, quant()),
    );
    let data = ChartData::new()
        .with_values(AxisPosition::Y1, [4.0, 7.0, 3.0, 5.0])
        .with_bar_series(AxisPosition::X1, "a", BarSeriesInfo::new(0))
        .with_bar_series(AxisPosition::X1, "b", BarSeriesInfo::new(1));

    let frame = axes
        .draw(&data, Size::new(400.0, 300.0), &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(frame.baseline, Orientation::Y);

    let bars = frame.bar_positions.as_ref().unwrap();
    // 100px per category, minus 10px outer spacing, minus 2px between the two bars.
    assert_eq!(bars.width("a"), 44.0);
    assert_eq!(bars.width("b"), 44.0);
    assert_eq!(bars.offset("a"), -45.0);
    assert_eq!(bars.offset("b"), 1.0);

    let x = frame.axes[&AxisPosition::X1].as_categorical().unwrap();
    let rules: Vec<f64> = x.rules.iter().map(|r| r.position).collect();
    assert_eq!(rules, [100.0, 200.0, 300.0]);
}

#[test]
fn horizontal_bars_follow_the_categorical_y_axis() {
    let mut axes = flush(
        AxesManager::new()
            .with_axis(AxisPosition::X1, quant())
            .with_axis(AxisPosition::Y1, categorical(&["a", "b"])),
    );
    let data = ChartData::new()
        .with_values(AxisPosition::X1, [12.0, 30.0])
        .with_bar_series(AxisPosition::Y1, "s", BarSeriesInfo::new(0));

    let frame = axes
        .draw(&data, Size::new(200.0, 200.0), &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(frame.baseline, Orientation::X);
    let bars = frame.bar_positions.as_ref().unwrap();
    assert_eq!(bars.width("s"), 90.0);
    assert_eq!(bars.offset("s"), -45.0);
    assert_eq!(axes.baseline(), Some(Orientation::X));
}

#[test]
fn categories_default_to_distinct_data_values() {
    let mut axes = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::categorical(Vec::<String>::new()))
        .with_axis(AxisPosition::Y1, AxisOptions::quant());
    let data = ChartData::new().with_values(AxisPosition::X1, ["b", "a", "b"]);

    let frame = axes
        .draw(&data, Size::new(300.0, 200.0), &HeuristicTextMeasurer)
        .unwrap();
    let x = frame.axes[&AxisPosition::X1].as_categorical().unwrap();
    let values: Vec<&str> = x.ticks.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, ["b", "a"]);
}

#[test]
fn paired_time_axes_are_aligned_period_by_period() {
    let mut axes = AxesManager::new()
        .with_axis(
            AxisPosition::X1,
            AxisOptions::time(month(2024, 1), month(2024, 3), TimeInterval::Month),
        )
        .with_axis(
            AxisPosition::X2,
            AxisOptions::time(month(2023, 1), month(2023, 6), TimeInterval::Month),
        )
        .with_axis(AxisPosition::Y1, AxisOptions::quant());

    let frame = axes
        .draw(&ChartData::new(), Size::new(600.0, 300.0), &HeuristicTextMeasurer)
        .unwrap();
    let x1 = frame.axes[&AxisPosition::X1].as_time().unwrap();
    let x2 = frame.axes[&AxisPosition::X2].as_time().unwrap();
    assert_eq!(x1.ticks.len(), 6);
    assert_eq!(x2.ticks.len(), 6);
    for (a, b) in x1.ticks.iter().zip(&x2.ticks) {
        assert_eq!(a.position, b.position, "{} and {} should line up", a.label, b.label);
    }
    assert_eq!(x1.ticks[5].value, month(2024, 6));
}

#[test]
fn mismatched_time_intervals_fail_the_draw() {
    let mut axes = AxesManager::new()
        .with_axis(
            AxisPosition::X1,
            AxisOptions::time(month(2024, 1), month(2024, 3), TimeInterval::Month),
        )
        .with_axis(
            AxisPosition::X2,
            AxisOptions::time(month(2024, 1), month(2024, 3), TimeInterval::Week),
        )
        .with_axis(AxisPosition::Y1, AxisOptions::quant());

    let err = axes
        .draw(&ChartData::new(), Size::new(600.0, 300.0), &HeuristicTextMeasurer)
        .unwrap_err();
    assert_eq!(
        err,
        AxisError::IntervalMismatch {
            first: TimeInterval::Month,
            second: TimeInterval::Week,
        }
    );
}

#[test]
fn priority_time_axis_prefers_the_configured_order() {
    let time = AxisOptions::time(month(2024, 1), month(2024, 6), TimeInterval::Month);
    let axes = AxesManager::new()
        .with_axis(AxisPosition::X1, time.clone())
        .with_axis(AxisPosition::X2, time)
        .with_axis(AxisPosition::Y1, AxisOptions::quant());
    assert_eq!(axes.priority_time_axis(), Some(AxisPosition::X1));

    let axes = axes.with_time_axis_priority(vec![AxisPosition::Y1, AxisPosition::X2]);
    assert_eq!(axes.priority_time_axis(), Some(AxisPosition::X2));

    let none = AxesManager::new().with_axis(AxisPosition::Y1, AxisOptions::quant());
    assert_eq!(none.priority_time_axis(), None);
}

fn precomputed(range: (f64, f64)) -> AxisConfig {
    let datum = InputDatum::new(range, vec![1.0, 2.0], AxisOptions::quant());
    ComputedAxis::Quant(compute_quant_axis(&datum, &format_si).unwrap()).into()
}

#[test]
fn precomputed_axes_impose_their_range() {
    let mut axes = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::categorical(["a"]))
        .with_axis(AxisPosition::Y1, precomputed((250.0, 20.0)))
        .with_axis(AxisPosition::Y2, AxisOptions::quant());

    let frame = axes
        .draw(&ChartData::new(), Size::new(400.0, 300.0), &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(frame.axes[&AxisPosition::Y2].range(), (250.0, 20.0));
    assert_eq!(frame.axes[&AxisPosition::Y1].range(), (250.0, 20.0));
}

#[test]
fn precomputed_axes_with_different_ranges_fail() {
    let mut axes = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::categorical(["a"]))
        .with_axis(AxisPosition::Y1, precomputed((300.0, 0.0)))
        .with_axis(AxisPosition::Y2, precomputed((200.0, 0.0)));

    let err = axes
        .draw(&ChartData::new(), Size::new(400.0, 300.0), &HeuristicTextMeasurer)
        .unwrap_err();
    assert!(matches!(err, AxisError::RangeMismatch { orientation: Orientation::Y, .. }));
}

#[test]
fn custom_number_formatter_labels_quant_ticks() {
    let mut axes = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::categorical(["a"]))
        .with_axis(AxisPosition::Y1, AxisOptions::quant())
        .with_number_formatter(|v| alloc::format!("${v}"));
    let data = ChartData::new().with_values(AxisPosition::Y1, [40.0]);

    axes.draw(&data, Size::new(300.0, 300.0), &HeuristicTextMeasurer)
        .unwrap();
    let labels = axes.axis(AxisPosition::Y1).unwrap().visible_labels();
    assert_eq!(labels.first(), Some(&"$0"));
}

#[test]
fn series_sharing_x_values_share_quant_bar_slots() {
    let mut axes = flush(
        AxesManager::new()
            .with_axis(AxisPosition::X1, quant())
            .with_axis(AxisPosition::Y1, quant()),
    );
    let data = ChartData::new()
        .with_values(AxisPosition::X1, [1.0, 2.0, 3.0])
        .with_values(AxisPosition::X1, [1.0, 2.0, 3.0])
        .with_values(AxisPosition::Y1, [5.0, 8.0, 2.0, 4.0, 6.0, 3.0])
        .with_bar_series(AxisPosition::X1, "a", BarSeriesInfo::new(0))
        .with_bar_series(AxisPosition::X1, "b", BarSeriesInfo::new(1));

    let frame = axes
        .draw(&data, Size::new(600.0, 300.0), &HeuristicTextMeasurer)
        .unwrap();
    let x = &frame.axes[&AxisPosition::X1];
    assert_eq!(x.tick_width(), 200.0);
    assert_eq!(x.scale().range(), (100.0, 500.0));

    // 200px per value, minus 10px outer spacing, minus 2px between the two bars.
    let bars = frame.bar_positions.as_ref().unwrap();
    assert_eq!(bars.width("a"), 94.0);
    assert_eq!(bars.width("b"), 94.0);
}

#[test]
fn wide_bar_groups_inflate_the_quant_inset() {
    let mut axes = flush(
        AxesManager::new()
            .with_axis(AxisPosition::X1, quant())
            .with_axis(AxisPosition::Y1, quant()),
    );
    let mut data = ChartData::new()
        .with_values(AxisPosition::X1, [1.0, 2.0])
        .with_values(AxisPosition::Y1, [1.0]);
    for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
        data = data.with_bar_series(
            AxisPosition::X1,
            key,
            BarSeriesInfo::new(i).with_bar_width(40.0),
        );
    }

    let frame = axes
        .draw(&data, Size::new(300.0, 300.0), &HeuristicTextMeasurer)
        .unwrap();
    let x = &frame.axes[&AxisPosition::X1];
    // Four 40px bars and three 2px gaps plus 10px outer spacing need 176px, more than the
    // 150px slot, so the range shrinks by 88px on each side.
    assert_eq!(x.tick_width(), 150.0);
    assert_eq!(x.scale().range(), (88.0, 212.0));
}

#[test]
fn bars_are_sized_from_the_axis_they_are_drawn_against() {
    let mut axes = flush(
        AxesManager::new()
            .with_axis(AxisPosition::X1, quant())
            .with_axis(AxisPosition::X2, quant())
            .with_axis(AxisPosition::Y1, quant()),
    );
    let data = ChartData::new()
        .with_values(AxisPosition::X1, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .with_values(AxisPosition::X2, [1.0, 2.0, 3.0])
        .with_values(AxisPosition::Y1, [4.0])
        .with_bar_series(AxisPosition::X2, "a", BarSeriesInfo::new(0))
        .with_bar_series(AxisPosition::X2, "b", BarSeriesInfo::new(1));

    let frame = axes
        .draw(&data, Size::new(600.0, 300.0), &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(frame.axes[&AxisPosition::X1].tick_width(), 0.0);
    assert_eq!(frame.axes[&AxisPosition::X2].tick_width(), 200.0);

    let bars = frame.bar_positions.as_ref().unwrap();
    assert_eq!(bars.width("a"), 94.0);
    assert_eq!(bars.offset("a"), -95.0);
    assert_eq!(bars.offset("b"), 1.0);
}
