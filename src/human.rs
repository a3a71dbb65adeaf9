//! Human-readable quantities.
//!
//! Counts are written with `""`, `k`, `m`, `b` suffixes and byte sizes with
//! `b`, `kb`, `mb`, `gb` (decimal, powers of 1000). Rendering keeps three
//! significant digits:
//! - scaled value `>= 100` - integer part only (`156k`)
//! - scaled value `>= 10`  - one decimal (`15.5k`)
//! - otherwise             - two decimals (`1.25k`)
//!
//! Trailing zeros and a dangling decimal point are stripped (`1.00k` -> `1k`).

use crate::error::{EstimateError, Result};

/// Count suffixes, each one 1000 times the previous
pub const COUNT_SUFFIXES: [&str; 4] = ["", "k", "m", "b"];
/// Byte size suffixes, each one 1000 times the previous
pub const BYTE_SUFFIXES: [&str; 4] = ["b", "kb", "mb", "gb"];

/// Multipliers accepted by `parse_human`
const PARSE_MULTIPLIERS: [(char, f64); 3] = [('k', 1e3), ('m', 1e6), ('b', 1e9)];

/// Render a count, e.g. `1500` -> `1.5k`
#[inline]
pub fn human_cnt(n: u64) -> String {
    to_human(n, &COUNT_SUFFIXES)
}

/// Render a byte size, e.g. `1500` -> `1.5kb`
#[inline]
pub fn human_bytes(n: u64) -> String {
    to_human(n, &BYTE_SUFFIXES)
}

/// Render a signed byte delta, e.g. `-1500` -> `-1.5kb`
#[inline]
pub fn human_bytes_signed(delta: i64) -> String {
    let sign = if delta < 0 { '-' } else { '+' };
    format!("{}{}", sign, human_bytes(delta.unsigned_abs()))
}

/// Render `val` with the largest suffix keeping the scaled value below 1000.
///
/// Values beyond the last suffix keep the last suffix.
pub fn to_human(val: u64, suffixes: &[&str]) -> String {
    let mut scaled = val;
    let mut idx = 0;
    while scaled >= 1000 && idx + 1 < suffixes.len() {
        scaled /= 1000;
        idx += 1;
    }
    let suffix = suffixes.get(idx).copied().unwrap_or("");

    if scaled >= 100 {
        return format!("{}{}", scaled, suffix);
    }
    let decimals = if scaled >= 10 { 1 } else { 2 };
    let coef = 1000u64.pow(idx as u32) as f64;
    let rendered = format!("{:.*}", decimals, val as f64 / coef);
    format!("{}{}", trim_decimals(&rendered), suffix)
}

/// Strip trailing zeros and a trailing decimal point from a decimal literal
fn trim_decimals(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Parse a human quantity such as `4.2m`, `1B` or `15000`.
///
/// Suffixes `k`, `m`, `b` (case-insensitive) multiply the decimal literal by
/// 10^3, 10^6 and 10^9, the result is truncated toward zero. Without a suffix
/// the literal must be a plain integer.
pub fn parse_human(quant: &str) -> Result<u64> {
    let malformed = || EstimateError::MalformedQuantity(quant.to_string());
    let s = quant.trim();
    let last = s.chars().last().ok_or_else(malformed)?;

    let multiplier = PARSE_MULTIPLIERS
        .iter()
        .find(|(c, _)| last.eq_ignore_ascii_case(c))
        .map(|(_, m)| *m);

    let Some(multiplier) = multiplier else {
        return s.parse::<u64>().map_err(|_| malformed());
    };

    let literal = &s[..s.len() - last.len_utf8()];
    let value = literal.trim().parse::<f64>().map_err(|_| malformed())? * multiplier;
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return Err(malformed());
    }
    Ok(value as u64)
}

/// Parse a non-negative decimal number such as a load factor
pub fn parse_ratio(s: &str) -> Result<f64> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|_| EstimateError::MalformedQuantity(s.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(EstimateError::MalformedQuantity(s.to_string()));
    }
    Ok(value)
}
