use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// A 256-bit seed that reproduces a shuffle exactly.
///
/// Seeds format as 64 lowercase hex digits and parse from 64 hex digits of
/// either case.
///
/// # Examples
///
/// ```
/// use crunch_level::LevelSeed;
///
/// let seed = LevelSeed::random();
/// let parsed: LevelSeed = seed.to_string().parse()?;
/// assert_eq!(parsed, seed);
/// # Ok::<(), crunch_level::ParseLevelSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSeed([u8; 32]);

impl LevelSeed {
    /// Draws a seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn to_rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for LevelSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for LevelSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`LevelSeed`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseLevelSeedError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the input in characters.
        len: usize,
    },
    /// The text contains a character that is not a hex digit.
    #[display("invalid hex digit {ch:?} at index {index}")]
    InvalidDigit {
        /// Character index of the offending digit.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for LevelSeed {
    type Err = ParseLevelSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseLevelSeedError::InvalidLength { len });
        }
        let mut bytes = [0; 32];
        let mut digits = s.chars().enumerate().map(|(index, ch)| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParseLevelSeedError::InvalidDigit { index, ch })
        });
        for byte in &mut bytes {
            // `len` was checked above, so both digits are present.
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                unreachable!()
            };
            *byte = (high? << 4) | low?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::RngExt as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: LevelSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);

        let upper: LevelSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<LevelSeed>(),
            Err(ParseLevelSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", &SEED[..63]);
        assert_eq!(
            bad.parse::<LevelSeed>(),
            Err(ParseLevelSeedError::InvalidDigit { index: 63, ch: 'g' })
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed: LevelSeed = SEED.parse().unwrap();
        let mut a = seed.to_rng();
        let mut b = seed.to_rng();
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }
}
