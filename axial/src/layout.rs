// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot-area arrangement.
//!
//! Layout is a measure/arrange pair: axes are measured into per-side margins
//! ([`margins_for`]), then the drawing area is split into the plot rectangle and the margins
//! around it ([`PlotLayout::arrange`]).

extern crate alloc;

use alloc::collections::BTreeMap;

use kurbo::{Insets, Rect, Size};

use crate::position::{AxisPosition, Orientation};

/// The result of arranging a drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    /// The whole drawing area.
    pub view: Rect,
    /// The area series are drawn in.
    pub plot: Rect,
    /// Space reserved outside the plot on each side.
    pub margins: Insets,
}

impl PlotLayout {
    /// Splits `area` into a plot rectangle and `margins`.
    ///
    /// Margins larger than the area collapse the plot to zero size; they are never negative.
    pub fn arrange(area: Size, margins: Insets) -> Self {
        let width = area.width.max(0.0);
        let height = area.height.max(0.0);
        let margins = Insets::new(
            margins.x0.max(0.0),
            margins.y0.max(0.0),
            margins.x1.max(0.0),
            margins.y1.max(0.0),
        );
        let x0 = margins.x0.min(width);
        let y0 = margins.y0.min(height);
        let plot = Rect::new(
            x0,
            y0,
            (width - margins.x1).max(x0),
            (height - margins.y1).max(y0),
        );
        Self {
            view: Rect::new(0.0, 0.0, width, height),
            plot,
            margins,
        }
    }

    /// Returns the pixel range axes of `orientation` map onto.
    ///
    /// Vertical ranges descend so that larger values are drawn higher up.
    pub fn range(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::X => (self.plot.x0, self.plot.x1),
            Orientation::Y => (self.plot.y1, self.plot.y0),
        }
    }
}

/// Converts measured axis thicknesses into margins, adding `padding` on every side.
pub fn margins_for(measured: &BTreeMap<AxisPosition, f64>, padding: f64) -> Insets {
    let side = |position: AxisPosition| padding + measured.get(&position).copied().unwrap_or(0.0);
    Insets::new(
        side(AxisPosition::Y1),
        side(AxisPosition::X2),
        side(AxisPosition::Y2),
        side(AxisPosition::X1),
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn arrange_insets_the_plot() {
        let margins = Insets::new(40.0, 10.0, 20.0, 30.0);
        let layout = PlotLayout::arrange(Size::new(400.0, 300.0), margins);
        assert_eq!(layout.plot, Rect::new(40.0, 10.0, 380.0, 270.0));
        assert_eq!(layout.range(Orientation::X), (40.0, 380.0));
        assert_eq!(layout.range(Orientation::Y), (270.0, 10.0));
    }

    #[test]
    fn oversized_margins_collapse_the_plot() {
        let layout = PlotLayout::arrange(Size::new(50.0, 50.0), Insets::uniform(40.0));
        assert_eq!(layout.plot.width(), 0.0);
        assert_eq!(layout.plot.height(), 0.0);
    }

    #[test]
    fn margins_map_positions_to_sides() {
        let mut measured = BTreeMap::new();
        measured.insert(AxisPosition::X1, 30.0);
        measured.insert(AxisPosition::Y1, 45.0);
        let margins = margins_for(&measured, 5.0);
        assert_eq!(margins, Insets::new(50.0, 5.0, 5.0, 35.0));
    }
}
