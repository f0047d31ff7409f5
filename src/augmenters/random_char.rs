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

use serde::Deserialize;
use serde_json::Value;

use crate::augmenter::{Action, ActionAugmenter, Augment, AugProfile, Method};
use crate::data::AugData;
use crate::errors::{AugError, Result};
use crate::random::RandomSource;

/// Character-level augmenter over free text: inserts, substitutes, swaps,
/// or deletes characters at policy-selected positions. Split is a word
/// notion and is not supported here.
#[derive(Debug)]
pub struct RandomCharAug {
    profile: AugProfile,
    candidates: Vec<char>,
}

fn default_candidates() -> Vec<char> {
    ('a'..='z').chain('A'..='Z').chain('0'..='9').collect()
}

impl RandomCharAug {
    pub fn new(action: Action) -> Self {
        RandomCharAug {
            profile: AugProfile::new("RandomChar_Aug", Method::Char, action),
            candidates: default_candidates(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.profile.seed = seed;
        self
    }

    pub fn with_percent(mut self, aug_p: f64) -> Self {
        self.profile.aug_p = Some(aug_p);
        self
    }

    pub fn with_bounds(mut self, aug_min: usize, aug_max: Option<usize>) -> Self {
        self.profile.aug_min = aug_min;
        self.profile.aug_max = aug_max;
        self
    }

    /// Pool of replacement/insertion characters.
    pub fn with_candidates(mut self, candidates: Vec<char>) -> Self {
        self.candidates = candidates;
        self
    }

    fn chars_of(&self, data: &AugData) -> Result<Vec<char>> {
        match data {
            AugData::Text(text) => Ok(text.chars().collect()),
            other => Err(AugError::validation(format!(
                "augmenter '{}' expects text input, got {other:?}",
                self.profile.name
            ))),
        }
    }

    /// Descending policy draw over character positions.
    fn aug_indices(&self, len: usize, rng: &mut RandomSource) -> Vec<usize> {
        let mut picked = self.profile.select_indices(rng, len);
        picked.sort_unstable_by(|a, b| b.cmp(a));
        picked
    }
}

impl ActionAugmenter for RandomCharAug {
    fn profile(&self) -> &AugProfile {
        &self.profile
    }

    fn clean(&self, data: &AugData) -> Result<AugData> {
        match data {
            AugData::Text(text) => Ok(AugData::Text(text.trim().to_string())),
            other => Ok(other.clone()),
        }
    }

    fn insert(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut chars = self.chars_of(data)?;
        if chars.is_empty() || self.candidates.is_empty() {
            return Ok(data.clone());
        }
        for idx in self.aug_indices(chars.len(), rng) {
            if let Some(new_char) = rng.choose(&self.candidates) {
                chars.insert(idx, *new_char);
            }
        }
        Ok(AugData::Text(chars.into_iter().collect()))
    }

    fn substitute(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut chars = self.chars_of(data)?;
        if chars.is_empty() || self.candidates.is_empty() {
            return Ok(data.clone());
        }
        for idx in self.aug_indices(chars.len(), rng) {
            if let Some(new_char) = rng.choose(&self.candidates) {
                chars[idx] = *new_char;
            }
        }
        Ok(AugData::Text(chars.into_iter().collect()))
    }

    fn swap(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut chars = self.chars_of(data)?;
        if chars.len() < 2 {
            return Ok(data.clone());
        }
        for idx in self.aug_indices(chars.len(), rng) {
            let partner = if idx + 1 < chars.len() { idx + 1 } else { idx - 1 };
            chars.swap(idx, partner);
        }
        Ok(AugData::Text(chars.into_iter().collect()))
    }

    fn delete(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut chars = self.chars_of(data)?;
        if chars.is_empty() {
            return Ok(data.clone());
        }
        for idx in self.aug_indices(chars.len(), rng) {
            chars.remove(idx);
        }
        Ok(AugData::Text(chars.into_iter().collect()))
    }
}

#[derive(Debug, Deserialize)]
struct RandomCharConfig {
    action: String,
    #[serde(default)]
    aug_min: Option<usize>,
    #[serde(default)]
    aug_max: Option<usize>,
    #[serde(default)]
    aug_p: Option<f64>,
    #[serde(default)]
    seed: Option<u64>,
}

/// Factory for the `random.char` registry entry.
pub fn random_char_factory(config: &Value) -> Result<Box<dyn Augment>> {
    let config: RandomCharConfig = serde_json::from_value(config.clone())?;
    let action: Action = config.action.parse()?;

    let mut aug = RandomCharAug::new(action);
    if let Some(aug_min) = config.aug_min {
        aug.profile.aug_min = aug_min;
    }
    if let Some(aug_max) = config.aug_max {
        aug.profile.aug_max = Some(aug_max);
    }
    if let Some(aug_p) = config.aug_p {
        aug = aug.with_percent(aug_p);
    }
    if let Some(seed) = config.seed {
        aug = aug.with_seed(seed);
    }
    Ok(Box::new(aug))
}
