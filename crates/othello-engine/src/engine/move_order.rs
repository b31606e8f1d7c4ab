use std::{fmt::Write as _, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{
    board::{Board, Player},
    rules::{self, MoveList},
};

/// Seed for deterministic move ordering.
///
/// A 128-bit (16-byte) seed for the generator behind [`MoveOrder`]. The same
/// seed yields the same sequence of move orders, so searches that tie between
/// equally scored moves resolve the tie the same way. Serialized as 32 hex
/// digits.
///
/// # Example
///
/// ```
/// use othello_engine::SearchSeed;
/// use rand::Rng as _;
///
/// let seed: SearchSeed = rand::rng().random();
/// let text = seed.to_string();
/// assert_eq!(text.parse::<SearchSeed>().unwrap(), seed);
/// assert_eq!(SearchSeed::from(42).to_string(), format!("{:032x}", 42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchSeed([u8; 16]);

impl From<u64> for SearchSeed {
    fn from(value: u64) -> Self {
        Self(u128::from(value).to_be_bytes())
    }
}

impl std::fmt::Display for SearchSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let num = u128::from_be_bytes(self.0);
        write!(f, "{num:032x}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed {text:?}: expected 32 hex digits")]
pub struct ParseSeedError {
    pub text: String,
}

impl FromStr for SearchSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSeedError { text: s.to_owned() };
        if s.len() != 32 {
            return Err(err());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SearchSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{self}").map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for SearchSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `SearchSeed` values with `rng.random()`.
impl Distribution<SearchSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SearchSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SearchSeed(seed)
    }
}

/// Source of randomized legal-move orderings.
///
/// Wraps a PCG32 stream; every call to [`Self::legal_moves`] draws a fresh
/// shuffle from it.
///
/// # Example
///
/// ```
/// use othello_engine::{Board, MoveOrder, Player, SearchSeed};
///
/// let mut a = MoveOrder::with_seed(SearchSeed::from(3));
/// let mut b = MoveOrder::with_seed(SearchSeed::from(3));
/// assert_eq!(
///     a.legal_moves(Player::One, &Board::INITIAL),
///     b.legal_moves(Player::One, &Board::INITIAL),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MoveOrder {
    rng: Pcg32,
}

impl Default for MoveOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveOrder {
    /// Creates a move order with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: SearchSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Legal targets of `player`, shuffled.
    pub fn legal_moves(&mut self, player: Player, board: &Board) -> MoveList {
        rules::enumerate_legal_moves(player, board, &mut self.rng)
    }
}
