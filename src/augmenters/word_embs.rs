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
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::augmenter::{Action, ActionAugmenter, AugProfile, Method};
use crate::augmenters::{rebuild_words, word_tokens};
use crate::data::AugData;
use crate::errors::{AugError, Result};
use crate::model::{EmbeddingLoader, ModelCache, WordEmbedding};
use crate::random::RandomSource;
use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Candidate-pool bound applied when none is configured.
pub const DEFAULT_TOP_K: usize = 100;

/// Kind of word-embedding model backing a [`WordEmbsAug`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingKind {
    Word2vec,
    Glove,
    Fasttext,
}

impl EmbeddingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbeddingKind::Word2vec => "word2vec",
            EmbeddingKind::Glove => "glove",
            EmbeddingKind::Fasttext => "fasttext",
        }
    }
}

impl fmt::Display for EmbeddingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbeddingKind {
    type Err = AugError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "word2vec" => Ok(EmbeddingKind::Word2vec),
            "glove" => Ok(EmbeddingKind::Glove),
            "fasttext" => Ok(EmbeddingKind::Fasttext),
            other => Err(AugError::validation(format!(
                "model kind must be one of [word2vec, glove, fasttext] while '{other}' is passed"
            ))),
        }
    }
}

/// Augmenter that leverages word embeddings to find similar words.
///
/// `insert` injects a random vocabulary word at policy-selected positions;
/// `substitute` replaces selected words with a lucky draw among the model's
/// top-k ranked candidates. The model itself is reached through the
/// [`WordEmbedding`] trait and shared via [`ModelCache`]; this augmenter
/// never parses embedding files.
#[derive(Debug)]
pub struct WordEmbsAug {
    profile: AugProfile,
    kind: EmbeddingKind,
    model: Arc<dyn WordEmbedding>,
    tokenizer: Box<dyn Tokenizer>,
    n_gram_separator: char,
    stopwords: Option<HashSet<String>>,
    top_k: usize,
}

impl WordEmbsAug {
    /// Builds on a pre-loaded model.
    pub fn with_model(
        kind: EmbeddingKind,
        model: Arc<dyn WordEmbedding>,
        action: Action,
    ) -> Self {
        WordEmbsAug {
            profile: AugProfile::new(format!("WordEmbs_Aug({kind})"), Method::Word, action),
            kind,
            model,
            tokenizer: Box::new(WhitespaceTokenizer),
            n_gram_separator: '_',
            stopwords: None,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Builds by loading (or reusing) the model at `path` through `cache`.
    ///
    /// Loading is expensive; construct once and reuse across `augment`
    /// calls. `force_reload` bypasses and replaces the cached entry.
    #[allow(clippy::too_many_arguments)]
    pub fn from_cache(
        kind: EmbeddingKind,
        path: &Path,
        cache: &ModelCache,
        loader: &dyn EmbeddingLoader,
        action: Action,
        top_k: Option<usize>,
        force_reload: bool,
    ) -> Result<Self> {
        let model = cache.load(path, loader, top_k, force_reload)?;
        let mut aug = WordEmbsAug::with_model(kind, model, action);
        aug.top_k = top_k.unwrap_or(DEFAULT_TOP_K);
        Ok(aug)
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

    pub fn with_stopwords(mut self, stopwords: impl IntoIterator<Item = String>) -> Self {
        self.stopwords = Some(stopwords.into_iter().collect());
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn kind(&self) -> EmbeddingKind {
        self.kind
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.stopwords
            .as_ref()
            .map(|words| words.contains(token))
            .unwrap_or(false)
    }

    /// Words without a vector are excluded from the lucky draw.
    fn substitutable_indices(&self, tokens: &[String]) -> Vec<usize> {
        tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| !self.is_stopword(token) && self.model.contains(token))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Vocabulary draw, cut at the n-gram separator.
    fn draw_vocab_word(&self, rng: &mut RandomSource) -> Option<String> {
        let word = rng.choose(self.model.vocab())?;
        Some(
            word.split(self.n_gram_separator)
                .next()
                .unwrap_or(word)
                .to_string(),
        )
    }
}

impl ActionAugmenter for WordEmbsAug {
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
        let mut tokens = word_tokens(self.tokenizer.as_ref(), &self.profile.name, data)?;
        if tokens.is_empty() || self.model.vocab().is_empty() {
            return Ok(data.clone());
        }
        let count = self.profile.aug_count(tokens.len(), None);
        let mut positions = rng.sample_indices(tokens.len(), count);
        positions.sort_unstable_by(|a, b| b.cmp(a));
        for position in positions {
            if let Some(word) = self.draw_vocab_word(rng) {
                tokens.insert(position, word);
            }
        }
        Ok(rebuild_words(self.tokenizer.as_ref(), data, tokens))
    }

    fn substitute(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut tokens = word_tokens(self.tokenizer.as_ref(), &self.profile.name, data)?;
        let eligible = self.substitutable_indices(&tokens);
        if eligible.is_empty() {
            return Ok(data.clone());
        }
        let count = self.profile.aug_count(eligible.len(), None);
        let picked = rng.sample_indices(eligible.len(), count);
        for pos in picked {
            let idx = eligible[pos];
            let candidates = self.model.predict(&tokens[idx], self.top_k);
            if let Some(substitute) = rng.choose(&candidates) {
                tokens[idx] = substitute.clone();
            }
        }
        Ok(rebuild_words(self.tokenizer.as_ref(), data, tokens))
    }
}
