// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label formatting helpers.

extern crate alloc;

use alloc::format;
use alloc::string::String;

const SI_PREFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];

/// Formats a number in abbreviated SI notation (`1.2k`, `3M`, `0.25`).
///
/// This is the default quant-axis formatter.
pub fn format_si(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let abs = v.abs();
    // Magnitudes that round up to the next thousand take the next prefix: 999_999 is `1M`.
    let mut i = match SI_PREFIXES.iter().position(|(scale, _)| abs >= *scale) {
        Some(i) => i,
        None if abs < 999.995 => return trim_fraction(format!("{v:.2}")),
        None => SI_PREFIXES.len() - 1,
    };
    while i > 0 && abs / SI_PREFIXES[i].0 >= 999.95 {
        i -= 1;
    }
    let (scale, suffix) = SI_PREFIXES[i];
    format!("{}{suffix}", trim_fraction(format!("{:.1}", v / scale)))
}

fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Truncates `label` to at most `max_chars` characters, ending in `…` when shortened.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return String::from(label);
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = label.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
