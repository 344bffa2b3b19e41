//! Room ID generation.

use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Exclusive upper bound of the numeric value behind a room ID.
pub const ROOM_ID_SPACE: u32 = 0xFF_FFFF;

/// Source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator into a [`RandomSource`].
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Reproducible sequence, handy when chasing a bug in a specific room.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Short lowercase hex identifier for a room, e.g. `3fa9c1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomToken(String);

impl RoomToken {
    fn from_value(value: u32) -> Self {
        Self(format!("{:x}", value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value encoded by the token.
    pub fn value(&self) -> u32 {
        // Only ever built from a u32 by `from_value`.
        u32::from_str_radix(&self.0, 16).unwrap_or_default()
    }
}

impl fmt::Display for RoomToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draw a fresh room ID in `[0, 0xFFFFFF)`, unpadded lowercase hex.
///
/// Not unique and not suitable as a secret.
pub fn generate_room_id(source: &mut dyn RandomSource) -> RoomToken {
    let unit = source.next_unit();
    let scaled = (unit * f64::from(ROOM_ID_SPACE)).floor();
    // NaN casts to 0; out-of-range draws are clamped to the last value.
    let value = (scaled as u32).min(ROOM_ID_SPACE - 1);
    RoomToken::from_value(value)
}


#[cfg(test)]
mod tests {
    use super::testing::Sequence;
    use super::*;

    fn is_room_token(s: &str) -> bool {
        (1..=6).contains(&s.len()) && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    #[test]
    fn formats_without_padding() {
        let mut src = Sequence::new([0.0, 1.0 / f64::from(ROOM_ID_SPACE) * 10.5, 0.5]);
        assert_eq!(generate_room_id(&mut src).as_str(), "0");
        assert_eq!(generate_room_id(&mut src).as_str(), "a");
        assert_eq!(generate_room_id(&mut src).as_str(), "7fffff");
    }

    #[test]
    fn largest_draw_stays_below_bound() {
        let mut src = Sequence::new([0.999_999_999_999]);
        let token = generate_room_id(&mut src);
        assert_eq!(token.as_str(), "fffffe");
        assert!(token.value() < 0x100_0000);
    }

    #[test]
    fn misbehaving_source_is_clamped() {
        let mut src = Sequence::new([1.0, 7.5, -3.0, f64::NAN]);
        assert_eq!(generate_room_id(&mut src).as_str(), "fffffe");
        assert_eq!(generate_room_id(&mut src).as_str(), "fffffe");
        assert_eq!(generate_room_id(&mut src).as_str(), "0");
        assert_eq!(generate_room_id(&mut src).as_str(), "0");
    }

    #[test]
    fn tokens_are_short_lowercase_hex() {
        let mut src = RngSource::seeded(7);
        for _ in 0..10_000 {
            let token = generate_room_id(&mut src);
            assert!(is_room_token(token.as_str()), "bad token {token}");
            assert!(token.value() < ROOM_ID_SPACE);
        }
    }

    #[test]
    fn draws_are_spread_uniformly() {
        let mut src = RngSource::seeded(0xC0FFEE);
        let mut buckets = [0u32; 16];
        let draws = 16_000;
        for _ in 0..draws {
            let value = generate_room_id(&mut src).value();
            buckets[(value >> 20) as usize] += 1;
        }
        // Expected 1000 per bucket; std dev is about 31.
        for (i, count) in buckets.iter().enumerate() {
            assert!((850..=1150).contains(count), "bucket {i} has {count}");
        }
    }

    #[test]
    fn entropy_source_yields_valid_tokens() {
        let mut src = RngSource::from_entropy();
        let token = generate_room_id(&mut src);
        assert!(is_room_token(token.as_str()));
    }
}
