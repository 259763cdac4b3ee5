// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement and axis margins.
//!
//! Axial does not shape text. Margins are estimated through a [`TextMeasurer`] supplied by
//! the caller, which can be backed by a real shaping engine or by
//! [`HeuristicTextMeasurer`].

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::computed::ComputedAxis;
use crate::position::Orientation;

/// Length of a tick line.
pub const TICK_SIZE: f64 = 5.0;
/// Gap between a tick and its label.
pub const LABEL_PADDING: f64 = 6.0;
/// Gap between the labels and the axis title.
pub const TITLE_OFFSET: f64 = 10.0;
/// Angle of rotated labels, in radians.
pub const LABEL_ANGLE: f64 = core::f64::consts::FRAC_PI_4;

/// Measures rendered text.
pub trait TextMeasurer {
    /// Returns `(width, height)` of `text` at `font_size`, in pixels.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Estimates text as 0.6 em per character, 1 em tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        (0.6 * font_size * text.chars().count() as f64, font_size)
    }
}

/// Returns the thickness `axis` needs outside the plot when drawn at `orientation`.
///
/// An explicit `margin` option is returned unchanged.
pub fn axis_margin(
    axis: &ComputedAxis,
    orientation: Orientation,
    measurer: &dyn TextMeasurer,
) -> f64 {
    let options = axis.options();
    if let Some(margin) = options.margin {
        return margin.max(0.0);
    }

    let mut out = if options.show_ticks { TICK_SIZE } else { 0.0 };

    if options.show_labels {
        let (sin, cos) = if options.rotate_labels {
            (LABEL_ANGLE.sin(), LABEL_ANGLE.cos())
        } else {
            (0.0, 1.0)
        };
        let extent = axis
            .visible_labels()
            .into_iter()
            .filter(|label| !label.is_empty())
            .map(|label| {
                let (w, h) = measurer.measure(label, options.font_size);
                match orientation {
                    Orientation::X => sin * w + cos * h,
                    Orientation::Y => cos * w + sin * h,
                }
            })
            .fold(0.0_f64, f64::max);
        if extent > 0.0 {
            out += LABEL_PADDING;
            out += extent;
        }
    }

    if let Some(title) = &options.title {
        let (_, h) = measurer.measure(title, options.font_size);
        out += TITLE_OFFSET + h;
    }
    out
}
