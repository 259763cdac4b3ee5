// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis slots (`x1`, `x2`, `y1`, `y2`) and their orientations.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the four axis slots of a chart.
///
/// Positions are ordered `X1 < X2 < Y1 < Y2`, so maps keyed by position iterate
/// deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    /// The primary horizontal axis, drawn below the plot.
    X1,
    /// The secondary horizontal axis, drawn above the plot.
    X2,
    /// The primary vertical axis, drawn left of the plot.
    Y1,
    /// The secondary vertical axis, drawn right of the plot.
    Y2,
}

impl AxisPosition {
    /// All positions in iteration order.
    pub const ALL: [Self; 4] = [Self::X1, Self::X2, Self::Y1, Self::Y2];

    /// Returns the orientation this slot belongs to.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::X1 | Self::X2 => Orientation::X,
            Self::Y1 | Self::Y2 => Orientation::Y,
        }
    }

    /// Returns the lowercase name used in configuration and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::X2 => "x2",
            Self::Y1 => "y1",
            Self::Y2 => "y2",
        }
    }
}

impl fmt::Display for AxisPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal (`X`) or vertical (`Y`) grouping of axis positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Horizontal axes (`x1`, `x2`).
    X,
    /// Vertical axes (`y1`, `y2`).
    Y,
}

impl Orientation {
    /// Both orientations, `X` first.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Returns the primary and secondary position of this orientation.
    pub fn positions(self) -> [AxisPosition; 2] {
        match self {
            Self::X => [AxisPosition::X1, AxisPosition::X2],
            Self::Y => [AxisPosition::Y1, AxisPosition::Y2],
        }
    }

    /// Returns the perpendicular orientation.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// A list of positions rendered as `x1, y2` in error messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionList(pub Vec<AxisPosition>);

impl fmt::Display for PositionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(position.as_str())?;
        }
        Ok(())
    }
}

impl FromIterator<AxisPosition> for PositionList {
    fn from_iter<I: IntoIterator<Item = AxisPosition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn positions_group_by_orientation() {
        for position in AxisPosition::ALL {
            assert!(
                position
                    .orientation()
                    .positions()
                    .contains(&position),
                "{position} missing from its own orientation"
            );
        }
        assert_eq!(Orientation::X.other(), Orientation::Y);
    }

    #[test]
    fn position_list_joins_names() {
        let list: PositionList = [AxisPosition::X2, AxisPosition::Y2].into_iter().collect();
        assert_eq!(list.to_string(), "x2, y2");
    }
}
