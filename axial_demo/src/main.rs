// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis demos for `axial`.
//!
//! Draws a few charts through [`AxesManager`] and writes them to `axial_demo.html`.
//! Set `RUST_LOG=axial=debug` to follow the draw passes.

mod svg;

use std::error::Error;
use std::fmt::Write as _;

use axial::{
    AxesFrame, AxesManager, AxisOptions, AxisPosition, AxisValue, BarSeriesInfo, ChartData,
    HeuristicTextMeasurer, Orientation, QuantOptions, TimeInterval,
};
use chrono::{Months, NaiveDate, NaiveDateTime};
use kurbo::{Point, Rect, Size};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::svg::Shape;

const PALETTE: [&str; 4] = ["#6495ed", "#ffa500", "#3cb371", "#dc143c"];
const CHART_SIZE: Size = Size::new(560.0, 320.0);

struct Section {
    title: &'static str,
    svg: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sections = vec![
        grouped_bars_demo()?,
        paired_time_demo()?,
        horizontal_bars_demo()?,
        weekly_demo()?,
    ];

    let mut html = String::from(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>axial demo</title></head>\n<body>\n",
    );
    for section in &sections {
        let _ = writeln!(html, "<h2>{}</h2>\n{}", section.title, section.svg);
    }
    html.push_str("</body></html>\n");

    std::fs::write("axial_demo.html", html)?;
    tracing::info!(charts = sections.len(), "wrote axial_demo.html");
    Ok(())
}

fn month(offset: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.checked_add_months(Months::new(offset)))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Bar rectangles for one series, one bar per category.
fn bars(
    frame: &AxesFrame,
    bar_axis: AxisPosition,
    value_axis: AxisPosition,
    key: &str,
    series: &[(&str, f64)],
    fill: &'static str,
) -> Vec<Shape> {
    let (Some(slots), Some(along), Some(across)) = (
        frame.bar_positions.as_ref(),
        frame.axes.get(&bar_axis),
        frame.axes.get(&value_axis),
    ) else {
        return Vec::new();
    };
    let Some(slot) = slots.slot(key) else {
        return Vec::new();
    };
    let zero = across.position_of(&AxisValue::Number(0.0)).unwrap_or_default();
    series
        .iter()
        .filter_map(|(category, value)| {
            let centre = along.position_of(&AxisValue::from(*category))?;
            let end = across.position_of(&AxisValue::Number(*value))?;
            let start = centre + slot.offset;
            let rect = match frame.baseline {
                Orientation::Y => Rect::new(start, zero, start + slot.width, end),
                Orientation::X => Rect::new(zero, start, end, start + slot.width),
            };
            Some(Shape::Bar { rect, fill })
        })
        .collect()
}

fn grouped_bars_demo() -> Result<Section, Box<dyn Error>> {
    let quarters = ["Q1", "Q2", "Q3", "Q4"];
    let series: [(&str, [f64; 4]); 2] = [
        ("2023", [120.0, 135.0, 150.0, 170.0]),
        ("2024", [130.0, 160.0, 155.0, 190.0]),
    ];

    let mut manager = AxesManager::new()
        .with_axis(AxisPosition::X1, AxisOptions::categorical(quarters))
        .with_axis(AxisPosition::Y1, AxisOptions::quant().with_title("Revenue"));
    let mut data = ChartData::new();
    for (i, (key, values)) in series.iter().enumerate() {
        data = data
            .with_values(AxisPosition::Y1, values.iter().copied())
            .with_bar_series(AxisPosition::X1, *key, BarSeriesInfo::new(i));
    }

    let frame = manager.draw(&data, CHART_SIZE, &HeuristicTextMeasurer)?;
    let shapes: Vec<Shape> = series
        .iter()
        .enumerate()
        .flat_map(|(i, (key, values))| {
            let points: Vec<(&str, f64)> =
                quarters.iter().copied().zip(values.iter().copied()).collect();
            bars(frame, AxisPosition::X1, AxisPosition::Y1, key, &points, PALETTE[i])
        })
        .collect();
    Ok(Section {
        title: "Grouped bars",
        svg: svg::render(frame, &shapes),
    })
}

fn paired_time_demo() -> Result<Section, Box<dyn Error>> {
    // This year runs to December, last year's data stops in September: the shorter axis is
    // extended so months line up.
    let this_year = [
        42.0, 45.0, 51.0, 48.0, 56.0, 61.0, 64.0, 60.0, 58.0, 66.0, 70.0, 75.0,
    ];
    let last_year = [38.0, 40.0, 44.0, 43.0, 47.0, 52.0, 55.0, 54.0, 50.0];

    let mut manager = AxesManager::new()
        .with_axis(
            AxisPosition::X1,
            AxisOptions::time(month(12), month(23), TimeInterval::Month),
        )
        .with_axis(
            AxisPosition::X2,
            AxisOptions::time(month(0), month(8), TimeInterval::Month),
        )
        .with_axis(AxisPosition::Y1, AxisOptions::quant().with_title("Visits (k)"))
        .with_time_axis_priority(vec![AxisPosition::X1]);
    let data = ChartData::new()
        .with_values(AxisPosition::Y1, this_year.iter().chain(&last_year).copied());

    let frame = manager.draw(&data, CHART_SIZE, &HeuristicTextMeasurer)?;
    let line = |axis: AxisPosition, first: u32, values: &[f64]| -> Shape {
        let points = (first..)
            .zip(values)
            .filter_map(|(m, v)| {
                let x = frame.axes.get(&axis)?;
                let y = frame.axes.get(&AxisPosition::Y1)?;
                let x = x.position_of(&AxisValue::Time(month(m)))?;
                let y = y.position_of(&AxisValue::Number(*v))?;
                Some(Point::new(x, y))
            })
            .collect();
        Shape::Line {
            points,
            stroke: if axis == AxisPosition::X1 { PALETTE[0] } else { PALETTE[1] },
        }
    };
    let shapes = [
        line(AxisPosition::X1, 12, &this_year[..]),
        line(AxisPosition::X2, 0, &last_year[..]),
    ];
    tracing::info!(priority = ?manager.priority_time_axis(), "paired time axes");

    let Some(frame) = manager.frame() else {
        return Err("no frame after a successful draw".into());
    };
    Ok(Section {
        title: "This year vs. last year",
        svg: svg::render(frame, &shapes),
    })
}

fn horizontal_bars_demo() -> Result<Section, Box<dyn Error>> {
    let teams = ["Platform infrastructure", "Developer experience", "Data", "Security"];
    let done = [34.0, 21.0, 17.0, 9.0];
    let open = [6.0, 11.0, 4.0, 8.0];

    let mut manager = AxesManager::new()
        .with_axis(
            AxisPosition::X1,
            AxisOptions::new(
                QuantOptions::default()
                    .with_tick_interval(5.0)
                    .with_label_interval(10.0),
            )
            .with_title("Tickets"),
        )
        .with_axis(
            AxisPosition::Y1,
            AxisOptions::categorical(teams).with_max_label_chars(12),
        );
    let totals: Vec<f64> = done.iter().zip(&open).map(|(d, o)| d + o).collect();
    let data = ChartData::new()
        .with_values(AxisPosition::X1, totals.iter().copied())
        .with_bar_series(AxisPosition::Y1, "done", BarSeriesInfo::new(0).with_stack_index(0))
        .with_bar_series(AxisPosition::Y1, "open", BarSeriesInfo::new(1).with_stack_index(0));

    let frame = manager.draw(&data, CHART_SIZE, &HeuristicTextMeasurer)?;
    let done_points: Vec<(&str, f64)> = teams.iter().copied().zip(done).collect();
    let total_points: Vec<(&str, f64)> =
        teams.iter().copied().zip(totals.iter().copied()).collect();
    // Stacked: draw the totals first, then the lower segment over them.
    let (y, x) = (AxisPosition::Y1, AxisPosition::X1);
    let mut shapes = bars(frame, y, x, "open", &total_points, PALETTE[3]);
    shapes.extend(bars(frame, y, x, "done", &done_points, PALETTE[2]));
    Ok(Section {
        title: "Horizontal stacked bars",
        svg: svg::render(frame, &shapes),
    })
}

fn weekly_demo() -> Result<Section, Box<dyn Error>> {
    let start = month(0);
    let end = month(5);
    let mut manager = AxesManager::new()
        .with_axis(
            AxisPosition::X1,
            AxisOptions::time(start, end, TimeInterval::Week).with_rotated_labels(true),
        )
        .with_axis(AxisPosition::Y1, AxisOptions::quant().with_title("Deploys"))
        .with_axis(AxisPosition::Y2, AxisOptions::quant().with_title("Incidents"));
    let data = ChartData::new()
        .with_values(AxisPosition::Y1, [12.0, 18.0, 25.0])
        .with_values(AxisPosition::Y2, [0.0, 2.0, 3.0]);

    let frame = manager.draw(&data, CHART_SIZE, &HeuristicTextMeasurer)?;
    if let Some(x) = frame.axes.get(&AxisPosition::X1) {
        tracing::info!(
            weeks = x.tick_count(),
            labels = ?x.visible_labels(),
            "weekly axis"
        );
    }
    Ok(Section {
        title: "Weekly axis with paired quant axes",
        svg: svg::render(frame, &[]),
    })
}
