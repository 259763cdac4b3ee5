// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw series values as handed in by the series layer.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use chrono::NaiveDateTime;

/// A raw value plotted against one axis position.
///
/// Each axis type accepts exactly one variant: quant axes take `Number`,
/// categorical axes take `Text`, time axes take `Time`.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisValue {
    /// A continuous value.
    Number(f64),
    /// A category name.
    Text(String),
    /// A naive (platform-local) timestamp.
    Time(NaiveDateTime),
}

impl AxisValue {
    /// Returns the number, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the timestamp, if this is a `Time`.
    pub fn as_time(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Time(t) => write!(f, "{t}"),
        }
    }
}

impl From<f64> for AxisValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AxisValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for AxisValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDateTime> for AxisValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Time(value)
    }
}
