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

//! # Augkit Count Policy Module
//!
//! Computes how many elements of an input of size N to augment, given a
//! percentage, a floor, and an optional ceiling, and selects which indices
//! to touch.

use crate::random::RandomSource;

/// Percentage applied when neither the call nor the augmenter configures one.
pub const DEFAULT_AUG_PERCENT: f64 = 0.3;

/// Number of elements to augment for an input of `size` elements.
///
/// `floor(percent * size)`, clamped to at least `aug_min` and, when a
/// ceiling is configured, at most `aug_max`.
pub fn aug_count(size: usize, aug_min: usize, aug_max: Option<usize>, percent: f64) -> usize {
    let count = (percent * size as f64) as usize;
    if count < aug_min {
        return aug_min;
    }
    if let Some(max) = aug_max {
        if count > max {
            return max;
        }
    }
    count
}

/// Draws `count` distinct element indices uniformly from `[0, len)`.
pub fn select_indices(rng: &mut RandomSource, len: usize, count: usize) -> Vec<usize> {
    rng.sample_indices(len, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percentage_of_size() {
        assert_eq!(aug_count(10, 1, None, 0.3), 3);
    }

    #[test]
    fn floor_clamps_up() {
        assert_eq!(aug_count(2, 1, None, 0.3), 1);
        assert_eq!(aug_count(0, 1, None, 0.3), 1);
    }

    #[test]
    fn ceiling_clamps_down() {
        assert_eq!(aug_count(100, 1, Some(5), 0.3), 5);
        assert_eq!(aug_count(100, 1, None, 0.3), 30);
    }

    #[test]
    fn selected_indices_are_distinct() {
        let mut rng = RandomSource::seeded(11);
        let count = aug_count(20, 1, Some(10), 0.5);
        let mut indices = select_indices(&mut rng, 20, count);
        assert_eq!(indices.len(), 10);
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), 10);
    }

    proptest! {
        #[test]
        fn count_respects_bounds(
            size in 0usize..10_000,
            aug_min in 0usize..64,
            aug_max in 0usize..64,
            percent in 0.0f64..1.0,
        ) {
            let count = aug_count(size, aug_min, Some(aug_max), percent);
            prop_assert!(count >= aug_min || count == aug_max.min(aug_min));
            if aug_max >= aug_min {
                prop_assert!(count <= aug_max || count == aug_min);
            }
        }

        #[test]
        fn uncapped_count_is_floor_or_min(size in 0usize..10_000, percent in 0.0f64..1.0) {
            let count = aug_count(size, 1, None, percent);
            let floor = (percent * size as f64) as usize;
            prop_assert_eq!(count, floor.max(1));
        }
    }
}
