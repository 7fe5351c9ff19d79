//! Shared arithmetic for the modulus-keyed tables.

/// Remainder of `value / modulus` in `1..=modulus`.
///
/// Primbon tables count from one; a zero remainder aliases to `modulus`,
/// the last entry of the table.
pub const fn wrapped_remainder(value: u32, modulus: u32) -> u32 {
    match value % modulus {
        0 => modulus,
        r => r,
    }
}
