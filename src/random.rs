//! Copyright © 2025-2026 The Augkit Developers. All Rights Reserved.
//!
//! This file is part of Augkit.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Augkit Randomness Module
//!
//! Deterministic, seedable randomness for the orchestration core. Every
//! candidate generation runs on its own [`RandomSource`] derived from the
//! augmenter's seed and the candidate's absolute slot (`round * n + slot`),
//! so a parallel run draws exactly the same numbers as a sequential one.

use std::fmt;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seedable source of randomness backing count policy, index selection,
/// `Sometimes` gating, and lucky-draw candidate selection.
pub struct RandomSource {
    rng: SmallRng,
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RandomSource")
    }
}

impl RandomSource {
    /// Source seeded directly from `seed`.
    pub fn seeded(seed: u64) -> Self {
        RandomSource {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Independent stream `stream` of the generator family rooted at `seed`.
    ///
    /// Streams with distinct indices are statistically independent, and the
    /// derivation is pure, so candidate k always sees the same draws no
    /// matter which worker thread runs it.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        Self::seeded(mix(seed, stream))
    }

    /// Uniform draw in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// `count` distinct indices drawn uniformly without replacement from
    /// `[0, len)`. When `count >= len` every index is returned.
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        if count >= len {
            return (0..len).collect();
        }
        rand::seq::index::sample(&mut self.rng, len, count).into_vec()
    }

    /// A single random integer in `[1, bound - 1]`.
    ///
    /// Callers guarantee `bound >= 2`; used to pick split points inside a
    /// token.
    pub fn bounded_int(&mut self, bound: usize) -> usize {
        debug_assert!(bound >= 2);
        self.rng.gen_range(1..bound)
    }

    /// Uniform choice among `items`, `None` when empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

/// splitmix64 finalizer over the seed/stream pair.
fn mix(seed: u64, stream: u64) -> u64 {
    let mut z = seed ^ stream.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
