// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation of the axes sharing one orientation.

extern crate alloc;

use alloc::collections::BTreeMap;

use smallvec::SmallVec;

use crate::computed::ComputedAxis;
use crate::error::{AxisError, AxisResult};
use crate::options::{AxisConfig, AxisOptions, AxisType};
use crate::position::{AxisPosition, Orientation, PositionList};

/// The configured axes of one orientation, checked to be alignable.
///
/// Construction fails unless
/// - at least one axis is configured,
/// - both axes have the same type,
/// - categorical axes are not paired, and
/// - pre-computed axes agree on their pixel range.
#[derive(Clone, Debug)]
pub struct AlignedAxisPair<'a> {
    orientation: Orientation,
    axis_type: AxisType,
    members: SmallVec<[(AxisPosition, &'a AxisConfig); 2]>,
    range: Option<(f64, f64)>,
}

impl<'a> AlignedAxisPair<'a> {
    /// Collects and validates the axes of `orientation` in `configs`.
    pub fn new(
        orientation: Orientation,
        configs: &'a BTreeMap<AxisPosition, AxisConfig>,
    ) -> AxisResult<Self> {
        let members: SmallVec<[(AxisPosition, &'a AxisConfig); 2]> = orientation
            .positions()
            .into_iter()
            .filter_map(|position| configs.get(&position).map(|config| (position, config)))
            .collect();

        let Some(&(_, primary)) = members.first() else {
            return Err(AxisError::MissingOrientation(orientation));
        };
        let axis_type = primary.axis_type();

        if let Some((_, other)) = members.iter().find(|(_, c)| c.axis_type() != axis_type) {
            return Err(AxisError::TypeMismatch {
                orientation,
                first: axis_type,
                second: other.axis_type(),
            });
        }
        if axis_type == AxisType::Categorical && members.len() > 1 {
            return Err(AxisError::CategoricalNotAlignable(
                members.iter().map(|(p, _)| *p).collect::<PositionList>(),
            ));
        }

        let mut range = None;
        for (_, config) in &members {
            let AxisConfig::Computed(axis) = config else {
                continue;
            };
            match range {
                None => range = Some(axis.range()),
                Some(first) if first != axis.range() => {
                    return Err(AxisError::RangeMismatch {
                        orientation,
                        first,
                        second: axis.range(),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            orientation,
            axis_type,
            members,
            range,
        })
    }

    /// Returns the orientation of the pair.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the shared axis type.
    pub fn axis_type(&self) -> AxisType {
        self.axis_type
    }

    /// Returns the range of the pre-computed axes, if any axis is pre-computed.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Returns the number of configured axes (1 or 2).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: a pair holds at least one axis.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the primary (first configured) position.
    pub fn primary(&self) -> AxisPosition {
        self.members[0].0
    }

    /// Returns the configured positions in order.
    pub fn positions(&self) -> impl Iterator<Item = AxisPosition> + '_ {
        self.members.iter().map(|(p, _)| *p)
    }

    /// Returns the axes that still need computing.
    pub fn options(&self) -> impl Iterator<Item = (AxisPosition, &'a AxisOptions)> + '_ {
        self.members.iter().filter_map(|&(p, c)| match c {
            AxisConfig::Options(options) => Some((p, options)),
            AxisConfig::Computed(_) => None,
        })
    }

    /// Returns the pre-computed axes.
    pub fn computed(&self) -> impl Iterator<Item = (AxisPosition, &'a ComputedAxis)> + '_ {
        self.members.iter().filter_map(|&(p, c)| match c {
            AxisConfig::Computed(axis) => Some((p, axis)),
            AxisConfig::Options(_) => None,
        })
    }
}
