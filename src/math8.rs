//! 8-bit integer helpers

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Subtract with a floor of zero
#[inline]
pub const fn qsub8(value: u8, amount: u8) -> u8 {
    value.saturating_sub(amount)
}
