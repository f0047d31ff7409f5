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

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::augmenter::{Action, ActionAugmenter, Augment, AugProfile, Method};
use crate::augmenters::{rebuild_words, word_tokens};
use crate::data::AugData;
use crate::errors::Result;
use crate::random::RandomSource;
use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Word-level augmenter that needs no auxiliary model: substitutes selected
/// words with placeholder targets, swaps neighbors, deletes, or splits a
/// word in two at a random cut point. Insert is not supported (inserting
/// needs a vocabulary; see `WordEmbsAug`).
#[derive(Debug)]
pub struct RandomWordAug {
    profile: AugProfile,
    tokenizer: Box<dyn Tokenizer>,
    target_words: Vec<String>,
    stopwords: Option<HashSet<String>>,
}

impl RandomWordAug {
    pub fn new(action: Action) -> Self {
        RandomWordAug {
            profile: AugProfile::new("RandomWord_Aug", Method::Word, action),
            tokenizer: Box::new(WhitespaceTokenizer),
            target_words: vec!["_".to_string()],
            stopwords: None,
        }
    }

    pub fn with_profile(mut self, profile: AugProfile) -> Self {
        self.profile = profile;
        self
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

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Substitution pool; defaults to a single `_` placeholder.
    pub fn with_target_words(mut self, target_words: Vec<String>) -> Self {
        self.target_words = target_words;
        self
    }

    /// Words skipped by every operation.
    pub fn with_stopwords(mut self, stopwords: impl IntoIterator<Item = String>) -> Self {
        self.stopwords = Some(stopwords.into_iter().collect());
        self
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.stopwords
            .as_ref()
            .map(|words| words.contains(token))
            .unwrap_or(false)
    }

    /// Indices eligible for augmentation, stopwords excluded.
    fn eligible_indices(&self, tokens: &[String]) -> Vec<usize> {
        tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| !self.is_stopword(token))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Policy-sized draw of token indices, descending so removals and
    /// insertions do not shift later targets.
    fn aug_indices(&self, tokens: &[String], rng: &mut RandomSource) -> Vec<usize> {
        let eligible = self.eligible_indices(tokens);
        let count = self.profile.aug_count(eligible.len(), None);
        let mut picked: Vec<usize> = rng
            .sample_indices(eligible.len(), count)
            .into_iter()
            .map(|pos| eligible[pos])
            .collect();
        picked.sort_unstable_by(|a, b| b.cmp(a));
        picked
    }
}

impl ActionAugmenter for RandomWordAug {
    fn profile(&self) -> &AugProfile {
        &self.profile
    }

    fn clean(&self, data: &AugData) -> Result<AugData> {
        match data {
            AugData::Text(text) => Ok(AugData::Text(text.trim().to_string())),
            other => Ok(other.clone()),
        }
    }

    fn substitute(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut tokens = word_tokens(self.tokenizer.as_ref(), &self.profile.name, data)?;
        if tokens.is_empty() || self.target_words.is_empty() {
            return Ok(data.clone());
        }
        for idx in self.aug_indices(&tokens, rng) {
            if let Some(target) = rng.choose(&self.target_words) {
                tokens[idx] = target.clone();
            }
        }
        Ok(rebuild_words(self.tokenizer.as_ref(), data, tokens))
    }

    fn swap(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut tokens = word_tokens(self.tokenizer.as_ref(), &self.profile.name, data)?;
        if tokens.len() < 2 {
            return Ok(data.clone());
        }
        for idx in self.aug_indices(&tokens, rng) {
            let partner = if idx + 1 < tokens.len() { idx + 1 } else { idx - 1 };
            tokens.swap(idx, partner);
        }
        Ok(rebuild_words(self.tokenizer.as_ref(), data, tokens))
    }

    fn delete(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut tokens = word_tokens(self.tokenizer.as_ref(), &self.profile.name, data)?;
        if tokens.is_empty() {
            return Ok(data.clone());
        }
        for idx in self.aug_indices(&tokens, rng) {
            tokens.remove(idx);
        }
        Ok(rebuild_words(self.tokenizer.as_ref(), data, tokens))
    }

    fn split(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut tokens = word_tokens(self.tokenizer.as_ref(), &self.profile.name, data)?;
        if tokens.is_empty() {
            return Ok(data.clone());
        }
        for idx in self.aug_indices(&tokens, rng) {
            let chars: Vec<char> = tokens[idx].chars().collect();
            if chars.len() < 2 {
                continue;
            }
            let cut = rng.bounded_int(chars.len());
            let head: String = chars[..cut].iter().collect();
            let tail: String = chars[cut..].iter().collect();
            tokens[idx] = head;
            tokens.insert(idx + 1, tail);
        }
        Ok(rebuild_words(self.tokenizer.as_ref(), data, tokens))
    }
}

#[derive(Debug, Deserialize)]
struct RandomWordConfig {
    action: String,
    #[serde(default)]
    aug_min: Option<usize>,
    #[serde(default)]
    aug_max: Option<usize>,
    #[serde(default)]
    aug_p: Option<f64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    stopwords: Option<Vec<String>>,
    #[serde(default)]
    target_words: Option<Vec<String>>,
}

/// Factory for the `random.word` registry entry.
pub fn random_word_factory(config: &Value) -> Result<Box<dyn Augment>> {
    let config: RandomWordConfig = serde_json::from_value(config.clone())?;
    let action: Action = config.action.parse()?;

    let mut aug = RandomWordAug::new(action);
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
    if let Some(stopwords) = config.stopwords {
        aug = aug.with_stopwords(stopwords);
    }
    if let Some(target_words) = config.target_words {
        aug = aug.with_target_words(target_words);
    }
    Ok(Box::new(aug))
}
