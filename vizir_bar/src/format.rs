// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip value formatting.
//!
//! The tooltip format is either a number (fixed decimal places) or a small d3-format style
//! specifier: `[$][,][.precision][type]`, where `type` is one of `f`, `d`, `%` or `e`.
//! An empty specifier (or one without a type) keeps the shortest representation, trimming
//! trailing zeros when a precision is given.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Largest accepted precision.
pub const MAX_PRECISION: u8 = 20;

/// Errors returned when parsing a format specifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A `.` was not followed by digits.
    #[error("expected digits after `.` in format specifier")]
    MissingPrecision,
    /// The precision is larger than [`MAX_PRECISION`].
    #[error("format precision must be at most {MAX_PRECISION}")]
    PrecisionOutOfRange,
    /// The type character is not supported.
    #[error("unsupported format type `{0}`")]
    UnknownType(char),
    /// Characters remain after the type.
    #[error("unexpected input at byte {offset} of format specifier")]
    Trailing {
        /// Byte offset of the first unexpected character.
        offset: usize,
    },
}

/// The presentation type of a [`FormatSpec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// No type: shortest representation, or trimmed fixed-point with a precision.
    General,
    /// `f`: fixed-point.
    Fixed,
    /// `d`: rounded integer.
    Integer,
    /// `%`: multiply by 100, fixed-point, then append `%`.
    Percent,
    /// `e`: exponent notation.
    Exponent,
}

/// A parsed format specifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    /// Prefix with `$`.
    pub currency: bool,
    /// Group the integer part in thousands with `,`.
    pub grouping: bool,
    /// Digits after the decimal point.
    pub precision: Option<u8>,
    /// Presentation type.
    pub kind: FormatKind,
}

impl FormatSpec {
    /// Parses a specifier such as `",.2f"` or `".0%"`.
    pub fn parse(spec: &str) -> Result<Self, FormatError> {
        let bytes = spec.as_bytes();
        let mut i = 0;
        let mut out = Self {
            currency: false,
            grouping: false,
            precision: None,
            kind: FormatKind::General,
        };

        if bytes.get(i) == Some(&b'$') {
            out.currency = true;
            i += 1;
        }
        if bytes.get(i) == Some(&b',') {
            out.grouping = true;
            i += 1;
        }
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            let start = i;
            let mut precision: u32 = 0;
            while let Some(d) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
                precision = precision * 10 + u32::from(d - b'0');
                if precision > u32::from(MAX_PRECISION) {
                    return Err(FormatError::PrecisionOutOfRange);
                }
                i += 1;
            }
            if i == start {
                return Err(FormatError::MissingPrecision);
            }
            out.precision = u8::try_from(precision).ok();
        }
        if let Some(c) = spec[i..].chars().next() {
            out.kind = match c {
                'f' => FormatKind::Fixed,
                'd' => FormatKind::Integer,
                '%' => FormatKind::Percent,
                'e' => FormatKind::Exponent,
                other => return Err(FormatError::UnknownType(other)),
            };
            i += c.len_utf8();
        }
        if i < spec.len() {
            return Err(FormatError::Trailing { offset: i });
        }
        Ok(out)
    }

    /// Formats `value`.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{value}");
        }
        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value };

        let (body, suffix) = match self.kind {
            FormatKind::General => {
                let body = match self.precision {
                    Some(p) => trim_fraction(to_fixed(magnitude, usize::from(p))),
                    None => format!("{magnitude}"),
                };
                (body, "")
            }
            FormatKind::Fixed => (to_fixed(magnitude, self.precision_or_default()), ""),
            FormatKind::Integer => (format!("{:.0}", magnitude.round()), ""),
            FormatKind::Percent => (
                to_fixed(magnitude * 100.0, self.precision_or_default()),
                "%",
            ),
            FormatKind::Exponent => (
                signed_exponent(format!("{:.*e}", self.precision_or_default(), magnitude)),
                "",
            ),
        };

        let body = if self.grouping && self.kind != FormatKind::Exponent {
            group_thousands(&body)
        } else {
            body
        };

        let mut out = String::with_capacity(body.len() + 3);
        if negative && body.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            out.push('-');
        }
        if self.currency {
            out.push('$');
        }
        out.push_str(&body);
        out.push_str(suffix);
        out
    }

    fn precision_or_default(&self) -> usize {
        usize::from(self.precision.unwrap_or(6))
    }
}

/// The tooltip value format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueFormat {
    /// A fixed number of decimal places.
    Precision(u8),
    /// A parsed specifier string.
    Specifier(FormatSpec),
}

impl ValueFormat {
    /// Formats `value`.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Precision(p) => FormatSpec {
                currency: false,
                grouping: false,
                precision: Some(*p),
                kind: FormatKind::Fixed,
            }
            .format(value),
            Self::Specifier(spec) => spec.format(value),
        }
    }
}

impl From<u8> for ValueFormat {
    fn from(precision: u8) -> Self {
        Self::Precision(precision)
    }
}

impl FromStr for ValueFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatSpec::parse(s).map(Self::Specifier)
    }
}

/// Formats a value with an optional format, falling back to the shortest representation.
pub fn format_value(value: f64, format: Option<&ValueFormat>) -> String {
    match format {
        Some(f) => f.format(value),
        None => format!("{value}"),
    }
}

/// Fixed-point digits of a non-negative `magnitude`.
///
/// Exact ties round away from zero; `{:.N}` alone would round them to even.
fn to_fixed(magnitude: f64, precision: usize) -> String {
    const EXACT_POW10: usize = 22;
    const EXACT_INT: f64 = 9_007_199_254_740_992.0;

    if precision <= EXACT_POW10 {
        let scale = (0..precision).fold(1.0_f64, |acc, _| acc * 10.0);
        let scaled = magnitude * scale;
        if scaled < EXACT_INT && scaled - scaled.floor() == 0.5 {
            let digits = format!("{:.0}", scaled.floor() + 1.0);
            return insert_point(&digits, precision);
        }
    }
    format!("{magnitude:.precision$}")
}

/// Places a decimal point before the last `precision` digits, zero-padding on the left.
fn insert_point(digits: &str, precision: usize) -> String {
    if precision == 0 {
        return digits.to_string();
    }
    let padded = format!("{digits:0>width$}", width = precision + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - precision);
    format!("{int_part}.{frac_part}")
}

fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}

/// Rewrites Rust's `1.5e3` / `1.5e-3` exponent as `1.5e+3` / `1.5e-3`.
fn signed_exponent(s: String) -> String {
    if let Some((mantissa, exp)) = s.split_once('e')
        && !exp.starts_with('-')
    {
        return format!("{mantissa}e+{exp}");
    }
    s
}

fn group_thousands(s: &str) -> String {
    let (int_part, rest) = match s.find('.') {
        Some(dot) => s.split_at(dot),
        None => (s, ""),
    };
    let len = int_part.len();
    let mut out = String::with_capacity(s.len() + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(rest);
    out
}
