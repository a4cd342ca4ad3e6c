//! RNG module - reproducible randomness from a date string
//!
//! Puzzles must come out identical on every platform that asks for the same
//! date, so the generator is a plain LCG seeded by a 31-multiplier string
//! hash. Both halves are bit-exact with 32-bit wraparound, and changing either
//! changes every puzzle.

/// Hash a seed string to a non-negative 32-bit value
///
/// `hash = hash * 31 + unit` over UTF-16 code units with signed 32-bit
/// wraparound, then the absolute value. `i32::MIN` maps to `2^31`.
pub fn hash_seed(seed: &str) -> u32 {
    let hash = seed
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32));
    (hash as i64).unsigned_abs() as u32
}

/// Seeded LCG (Linear Congruential Generator)
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a generator from a string seed
    pub fn new(seed: &str) -> Self {
        Self::from_state(hash_seed(seed))
    }

    /// Create a generator from a raw 32-bit state
    ///
    /// Zero is a valid state here: the increment moves it on.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the raw state
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Next value in [0, 1)
    pub fn next(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Random integer in [min, max] (inclusive)
    ///
    /// An empty range (`max < min`) returns `min` after consuming one draw.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1).max(0) as f64;
        (self.next() * span).floor() as i64 + min
    }

    /// Fair coin
    pub fn next_bool(&mut self) -> bool {
        self.next() < 0.5
    }

    /// Uniform choice; `None` for an empty slice (no draw consumed)
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_int(0, items.len() as i64 - 1) as usize;
        items.get(index)
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_int(0, i as i64) as usize;
            slice.swap(i, j);
        }
    }

    /// Shuffled copy, leaving the input untouched
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }
}
