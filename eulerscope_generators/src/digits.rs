// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Leading decimal digits of e, starting with the integer part.
///
/// The walk cycles through this table, so its length sets the period of the
/// direction sequence.
pub const E_DIGITS: &[u8] = b"2718281828459045235360287471352662497757247093699959574966967627724";

/// Returns the digit at `index`, wrapping around the table.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "The remainder is smaller than the table length, which fits in usize."
)]
pub fn euler_digit(index: u64) -> (usize, u8) {
    let idx = (index % E_DIGITS.len() as u64) as usize;
    (idx, E_DIGITS[idx] - b'0')
}
