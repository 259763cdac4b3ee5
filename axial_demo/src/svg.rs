// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for computed axes.

use std::fmt::Write as _;

use axial::{AxesFrame, AxisPosition, ComputedAxis, LABEL_PADDING, TICK_SIZE, TITLE_OFFSET};
use kurbo::{Point, Rect};

const AXIS_STROKE: &str = "#555555";
const RULE_STROKE: &str = "#e3e3e3";
const TEXT_FILL: &str = "#333333";

/// Series geometry drawn on top of the axes.
#[derive(Clone, Debug)]
pub(crate) enum Shape {
    Bar { rect: Rect, fill: &'static str },
    Line { points: Vec<Point>, stroke: &'static str },
}

/// Renders the axes of `frame` plus `shapes` into a standalone SVG document.
pub(crate) fn render(frame: &AxesFrame, shapes: &[Shape]) -> String {
    let view = frame.layout.view;
    let plot = frame.layout.plot;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = view.width(),
        h = view.height(),
    );

    for (position, axis) in &frame.axes {
        if axis.options().show_rules {
            push_rules(&mut out, *position, axis, plot);
        }
    }
    for shape in shapes {
        push_shape(&mut out, shape);
    }
    for (position, axis) in &frame.axes {
        push_axis(&mut out, *position, axis, plot);
    }

    out.push_str("</svg>\n");
    out
}

fn push_rules(out: &mut String, position: AxisPosition, axis: &ComputedAxis, plot: Rect) {
    for rule in axis.rules() {
        let (a, b) = match position {
            AxisPosition::X1 | AxisPosition::X2 => (
                Point::new(rule.position, plot.y0),
                Point::new(rule.position, plot.y1),
            ),
            AxisPosition::Y1 | AxisPosition::Y2 => (
                Point::new(plot.x0, rule.position),
                Point::new(plot.x1, rule.position),
            ),
        };
        push_line(out, a, b, RULE_STROKE);
    }
}

fn push_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Bar { rect, fill } => {
            let r = rect.abs();
            let _ = writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
                r.x0,
                r.y0,
                r.width(),
                r.height(),
            );
        }
        Shape::Line { points, stroke } => {
            let coords: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
            let _ = writeln!(
                out,
                r#"<polyline points="{}" fill="none" stroke="{stroke}" stroke-width="2"/>"#,
                coords.join(" "),
            );
        }
    }
}

fn push_axis(out: &mut String, position: AxisPosition, axis: &ComputedAxis, plot: Rect) {
    let options = axis.options();
    // Outward direction of ticks and labels.
    let (edge, outward) = match position {
        AxisPosition::X1 => (plot.y1, 1.0),
        AxisPosition::X2 => (plot.y0, -1.0),
        AxisPosition::Y1 => (plot.x0, -1.0),
        AxisPosition::Y2 => (plot.x1, 1.0),
    };
    let horizontal = matches!(position, AxisPosition::X1 | AxisPosition::X2);
    let at = |along: f64, off: f64| {
        if horizontal {
            Point::new(along, edge + outward * off)
        } else {
            Point::new(edge + outward * off, along)
        }
    };

    let (r0, r1) = axis.range();
    push_line(out, at(r0, 0.0), at(r1, 0.0), AXIS_STROKE);

    let labels = visible_ticks(axis);
    for (tick, label) in &labels {
        if options.show_ticks {
            push_line(out, at(*tick, 0.0), at(*tick, TICK_SIZE), AXIS_STROKE);
        }
        if options.show_labels && !label.is_empty() {
            let p = at(*tick, TICK_SIZE + LABEL_PADDING);
            let (anchor, baseline) = match position {
                AxisPosition::X1 => ("middle", "hanging"),
                AxisPosition::X2 => ("middle", "alphabetic"),
                AxisPosition::Y1 => ("end", "middle"),
                AxisPosition::Y2 => ("start", "middle"),
            };
            let (anchor, rotate) = if options.rotate_labels && horizontal {
                let anchor = if outward > 0.0 { "start" } else { "end" };
                (anchor, format!(r#" transform="rotate(45 {} {})""#, p.x, p.y))
            } else {
                (anchor, String::new())
            };
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="{TEXT_FILL}"{rotate}>{}</text>"#,
                p.x,
                p.y,
                options.font_size,
                escape_xml(label),
            );
        }
    }

    if let Some(title) = &options.title {
        let mid = 0.5 * (r0 + r1);
        let extent = axis_extent(axis);
        let p = at(mid, extent + TITLE_OFFSET);
        let rotate = if horizontal {
            String::new()
        } else {
            format!(r#" transform="rotate(-90 {} {})""#, p.x, p.y)
        };
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" font-weight="bold" fill="{TEXT_FILL}"{rotate}>{}</text>"#,
            p.x,
            p.y,
            options.font_size,
            escape_xml(title),
        );
    }
}

fn visible_ticks(axis: &ComputedAxis) -> Vec<(f64, String)> {
    match axis {
        ComputedAxis::Quant(a) => a
            .visible_ticks()
            .map(|t| (t.position, t.label.clone()))
            .collect(),
        ComputedAxis::Categorical(a) => a
            .visible_ticks()
            .map(|t| (t.position, t.label.clone()))
            .collect(),
        ComputedAxis::Time(a) => a
            .visible_ticks()
            .map(|t| (t.position, t.label.clone()))
            .collect(),
    }
}

/// Rough distance from the axis line to the outer edge of its labels.
fn axis_extent(axis: &ComputedAxis) -> f64 {
    let font_size = axis.options().font_size;
    let widest = axis
        .visible_labels()
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    TICK_SIZE + LABEL_PADDING + (0.6 * font_size * widest as f64).max(font_size)
}

fn push_line(out: &mut String, a: Point, b: Point, stroke: &str) {
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}"/>"#,
        a.x, a.y, b.x, b.y,
    );
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
