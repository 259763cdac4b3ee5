// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while computing axes.
//!
//! Every error is fatal to the current draw: nothing is retried or coerced.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

use crate::interval::TimeInterval;
use crate::options::AxisType;
use crate::position::{AxisPosition, Orientation, PositionList};

/// Errors that can occur while configuring or computing axes.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AxisError {
    /// Series data references positions that have no axis configuration.
    #[error("axes {0} are referenced by series data but not defined")]
    UndefinedAxes(PositionList),

    /// A chart needs at least one axis per orientation.
    #[error("a chart needs at least one {0} axis")]
    MissingOrientation(Orientation),

    /// Paired axes of one orientation resolve to different axis types.
    #[error("{orientation} axes of type {first} and {second} cannot be aligned")]
    TypeMismatch {
        /// The orientation of the pair.
        orientation: Orientation,
        /// Type of the primary axis.
        first: AxisType,
        /// Type of the secondary axis.
        second: AxisType,
    },

    /// More than one categorical axis was requested for one orientation.
    #[error("categorical axes {0} cannot be aligned")]
    CategoricalNotAlignable(PositionList),

    /// Paired time axes use different calendar intervals.
    #[error("time axes with intervals {first} and {second} cannot be aligned")]
    IntervalMismatch {
        /// Interval of the primary axis.
        first: TimeInterval,
        /// Interval of the secondary axis.
        second: TimeInterval,
    },

    /// Paired pre-computed axes disagree on their pixel range.
    #[error("pre-computed {orientation} axes have different ranges {first:?} and {second:?}")]
    RangeMismatch {
        /// The orientation of the pair.
        orientation: Orientation,
        /// Range of the primary axis.
        first: (f64, f64),
        /// Range of the secondary axis.
        second: (f64, f64),
    },

    /// An interval name that is not one of `hour|day|week|month|quarter|year`.
    #[error("unsupported time interval `{0}`")]
    UnsupportedInterval(String),

    /// A time axis without `start`/`end` and without values to derive them from.
    #[error("time axis {0} has no start/end and no values to derive them from")]
    MissingTimeBounds(AxisPosition),

    /// A computer was handed options of another axis type.
    #[error("expected {expected} axis options, found {found}")]
    UnexpectedAxisType {
        /// The type the computer handles.
        expected: AxisType,
        /// The type of the options it was given.
        found: AxisType,
    },

    /// A raw value whose variant does not match the axis type.
    #[error("value {value} cannot be placed on {axis_type} axis {position}")]
    InvalidValue {
        /// The axis the value was plotted against.
        position: AxisPosition,
        /// The type of that axis.
        axis_type: AxisType,
        /// The offending value, formatted.
        value: String,
    },
}

/// Result type for axis operations.
pub type AxisResult<T> = Result<T, AxisError>;
