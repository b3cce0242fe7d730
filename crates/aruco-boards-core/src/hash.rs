//! Content hashes for board descriptors.
//!
//! Hashes are polynomial accumulations over 32-bit integers:
//! `h = 17; h = h * 31 + term` for each term, with wrapping arithmetic. Lengths
//! are quantized to thousandths (millimetres when the unit is metres) before
//! mixing, so floating-point jitter below that resolution does not change the
//! hash.

/// Initial accumulator value.
pub const HASH_SEED: i32 = 17;
/// Per-term multiplier.
pub const HASH_MULTIPLIER: i32 = 31;

/// Stable 32-bit token identifying a board kind (FNV-1a over its name).
pub const fn type_token(name: &str) -> i32 {
    let bytes = name.as_bytes();
    let mut hash: u32 = 0x811c_9dc5;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(0x0100_0193);
        i += 1;
    }
    hash as i32
}

/// Scale a length by 1000 and round half to even.
///
/// Non-finite values saturate like `as` casts do (`NaN` maps to 0).
#[inline]
pub fn quantize_length(length: f32) -> i32 {
    (length * 1000.0).round_ties_even() as i32
}

/// Incremental polynomial hasher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArucoHasher {
    state: i32,
}

impl Default for ArucoHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ArucoHasher {
    pub fn new() -> Self {
        Self { state: HASH_SEED }
    }

    /// Start a hash for the given board kind.
    pub fn for_type(token: i32) -> Self {
        let mut hasher = Self::new();
        hasher.write_i32(token);
        hasher
    }

    #[inline]
    pub fn write_i32(&mut self, term: i32) -> &mut Self {
        self.state = self
            .state
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(term);
        self
    }

    /// Mix an unsigned count; values above `i32::MAX` wrap.
    #[inline]
    pub fn write_u32(&mut self, term: u32) -> &mut Self {
        self.write_i32(term as i32)
    }

    /// Mix a length after [`quantize_length`].
    #[inline]
    pub fn write_length(&mut self, length: f32) -> &mut Self {
        self.write_i32(quantize_length(length))
    }

    #[inline]
    pub fn finish(&self) -> i32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_is_seed() {
        assert_eq!(ArucoHasher::new().finish(), HASH_SEED);
    }

    #[test]
    fn accumulates_polynomially() {
        let h = ArucoHasher::new().write_i32(3).write_i32(5).finish();
        assert_eq!(h, (17 * 31 + 3) * 31 + 5);
    }

    #[test]
    fn wraps_instead_of_overflowing() {
        let h = ArucoHasher::new().write_i32(i32::MAX).write_i32(i32::MAX).finish();
        let expected = 17i32
            .wrapping_mul(31)
            .wrapping_add(i32::MAX)
            .wrapping_mul(31)
            .wrapping_add(i32::MAX);
        assert_eq!(h, expected);
    }

    #[test]
    fn quantization_rounds_to_thousandths() {
        assert_eq!(quantize_length(0.04), 40);
        assert_eq!(quantize_length(0.0401), 40);
        assert_eq!(quantize_length(0.0399), 40);
        assert_eq!(quantize_length(0.0406), 41);
        assert_eq!(quantize_length(-0.002), -2);
        assert_eq!(quantize_length(f32::NAN), 0);
    }

    #[test]
    fn whole_units_scale_exactly() {
        assert_eq!(quantize_length(1.0), 1000);
        assert_eq!(quantize_length(2.5), 2500);
        assert_eq!(quantize_length(120.0), 120_000);
    }

    #[test]
    fn type_tokens_are_stable_and_distinct() {
        const TOKEN: i32 = type_token("ArucoCharucoBoard");
        assert_eq!(TOKEN, type_token("ArucoCharucoBoard"));
        assert_ne!(TOKEN, type_token("ArucoGridBoard"));
        assert_eq!(type_token(""), 0x811c_9dc5_u32 as i32);
    }
}
