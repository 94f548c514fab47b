use std::{fmt, str::FromStr, sync::LazyLock};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Block, BlockId, Letter, ShapeKind};

/// Letter groups and the per-character weight of each.
const LETTER_WEIGHTS: &[(&str, usize)] = &[
    ("AEIOU", 39),
    ("RSTLNMCDGHBPF", 30),
    ("YVK", 20),
    ("ZXQJW", 1),
];

const SHAPE_WEIGHTS: &[(ShapeKind, usize)] = &[
    (ShapeKind::Single, 30),
    (ShapeKind::Double, 50),
    (ShapeKind::Triple, 3),
    (ShapeKind::LThree, 3),
    (ShapeKind::Square, 1),
    (ShapeKind::LFour, 1),
];

/// Expanded letter pool: every character repeated by its group weight.
static LETTER_POOL: LazyLock<Vec<Letter>> = LazyLock::new(|| {
    LETTER_WEIGHTS
        .iter()
        .flat_map(|&(chars, weight)| {
            chars
                .bytes()
                .filter_map(Letter::from_byte)
                .flat_map(move |letter| std::iter::repeat_n(letter, weight))
        })
        .collect()
});

static SHAPE_POOL: LazyLock<Vec<ShapeKind>> = LazyLock::new(|| {
    SHAPE_WEIGHTS
        .iter()
        .flat_map(|&(kind, weight)| std::iter::repeat_n(kind, weight))
        .collect()
});

/// Draws a letter uniformly from the weighted pool, skipping `used` letters.
///
/// If every pooled letter is excluded, the draw falls back to the full pool.
pub fn pick_letter<R>(rng: &mut R, used: &[Letter]) -> Letter
where
    R: Rng + ?Sized,
{
    let pool = &*LETTER_POOL;
    let available = pool.iter().filter(|l| !used.contains(l)).count();
    if available == 0 {
        tracing::warn!(used = used.len(), "no unique letters left, drawing from the full pool");
        return pool[rng.random_range(0..pool.len())];
    }
    let nth = rng.random_range(0..available);
    pool.iter()
        .filter(|l| !used.contains(l))
        .nth(nth)
        .copied()
        .unwrap_or(pool[0])
}

/// Draws a shape kind from the weighted pool.
pub fn pick_shape<R>(rng: &mut R) -> ShapeKind
where
    R: Rng + ?Sized,
{
    let pool = &*SHAPE_POOL;
    pool[rng.random_range(0..pool.len())]
}

/// Seed for deterministic tile generation.
///
/// A 128-bit seed for the generator's RNG. The same seed yields the same
/// sequence of shapes and letters, which makes games reproducible.
///
/// Serializes as a 32-character hex string, and parses from one.
///
/// # Example
///
/// ```
/// use wordgrid_engine::TileSeed;
///
/// let seed: TileSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// assert_eq!(seed.to_string(), "0123456789abcdef0123456789abcdef");
/// assert!("xyz".parse::<TileSeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed {input:?}: expected 32 hex characters")]
pub struct ParseTileSeedError {
    #[error(not(source))]
    input: String,
}

impl TileSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for TileSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for TileSeed {
    type Err = ParseTileSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTileSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 {
            return Err(err());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for TileSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TileSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Enables `rng.random::<TileSeed>()`.
impl Distribution<TileSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TileSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        TileSeed(seed)
    }
}

/// Produces fresh blocks for the choosable slots.
///
/// Block ids increase monotonically from zero for the lifetime of the
/// generator.
#[derive(Debug, Clone)]
pub struct TileGenerator {
    rng: Pcg32,
    next_id: u64,
}

impl Default for TileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TileGenerator {
    /// Creates a generator seeded from the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: TileSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Generates a block of `kind` with no letter repeated inside it.
    pub fn generate(&mut self, kind: ShapeKind) -> Block {
        let id = self.next_id();
        let rng = &mut self.rng;
        Block::generate(id, kind, |used| pick_letter(rng, used))
    }

    /// Generates a block of a randomly drawn shape.
    pub fn random_block(&mut self) -> Block {
        let kind = pick_shape(&mut self.rng);
        self.generate(kind)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn seed() -> TileSeed {
        TileSeed::from_bytes([
            0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
            0x77, 0x88,
        ])
    }

    #[test]
    fn test_letter_pool_weights() {
        let mut counts = HashMap::new();
        for &l in LETTER_POOL.iter() {
            *counts.entry(l).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 26);
        assert_eq!(counts[&letter('A')], 39);
        assert_eq!(counts[&letter('R')], 30);
        assert_eq!(counts[&letter('K')], 20);
        assert_eq!(counts[&letter('Q')], 1);
        assert_eq!(LETTER_POOL.len(), 5 * 39 + 13 * 30 + 3 * 20 + 5);
    }

    #[test]
    fn test_shape_pool_weights() {
        assert_eq!(SHAPE_POOL.len(), 88);
        let doubles = SHAPE_POOL.iter().filter(|&&k| k == ShapeKind::Double).count();
        assert_eq!(doubles, 50);
        for kind in ShapeKind::ALL {
            assert!(SHAPE_POOL.contains(&kind), "{kind:?}");
        }
    }

    #[test]
    fn test_pick_letter_excludes_used() {
        let mut rng = Pcg32::from_seed(seed().0);
        let used: Vec<_> = "ABCDEFGHIJKLMNOPQRSTUVWXY".chars().map(letter).collect();
        for _ in 0..20 {
            assert_eq!(pick_letter(&mut rng, &used), letter('Z'));
        }
    }

    #[test]
    fn test_pick_letter_falls_back_when_all_used() {
        let mut rng = Pcg32::from_seed(seed().0);
        let used: Vec<_> = ('A'..='Z').map(letter).collect();
        let picked = pick_letter(&mut rng, &used);
        assert!(picked.as_char().is_ascii_uppercase());
    }

    #[test]
    fn test_generated_blocks_have_unique_letters_and_increasing_ids() {
        let mut generator = TileGenerator::with_seed(seed());
        let mut last = None;
        for _ in 0..200 {
            let block = generator.random_block();
            let mut letters: Vec<_> = block.letters().collect();
            assert_eq!(letters.len(), block.kind().cell_count());
            letters.sort();
            letters.dedup();
            assert_eq!(letters.len(), block.kind().cell_count(), "{block}");
            if let Some(last) = last {
                assert!(block.id() > last);
            }
            last = Some(block.id());
        }
    }

    #[test]
    fn test_same_seed_same_blocks() {
        let mut a = TileGenerator::with_seed(seed());
        let mut b = TileGenerator::with_seed(seed());
        for _ in 0..50 {
            assert_eq!(a.random_block(), b.random_block());
        }
    }

    mod tile_seed_serialization {
        use super::*;

        #[test]
        fn test_known_value() {
            let serialized = serde_json::to_string(&seed()).unwrap();
            assert_eq!(serialized, "\"123456789abcdef01122334455667788\"");
            let deserialized: TileSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized, seed());
        }

        #[test]
        fn test_uppercase_hex_accepted() {
            let parsed: TileSeed = "123456789ABCDEF01122334455667788".parse().unwrap();
            assert_eq!(parsed, seed());
        }

        #[test]
        fn test_invalid_seeds_rejected() {
            for input in ["", "0123", "ghijklmnopqrstuvwxyzghijklmnopqr", "0123456789abcdef0123456789abcdef0"] {
                let err = input.parse::<TileSeed>().unwrap_err();
                assert!(err.to_string().contains("invalid hex"), "{input}");
                assert!(serde_json::from_str::<TileSeed>(&format!("\"{input}\"")).is_err());
            }
        }

        #[test]
        fn test_random_seed_roundtrip() {
            let seed: TileSeed = rand::rng().random();
            assert_eq!(seed.to_string().parse::<TileSeed>().unwrap(), seed);
        }
    }
}
