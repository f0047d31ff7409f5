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

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde_json::json;

use augkit::augmenter::{Action, Augment, AugOutput, AugProfile, AugRequest, Device, Method};
use augkit::augmenters::{AugmenterRegistry, EmbeddingKind, RandomCharAug, RandomWordAug, WordEmbsAug};
use augkit::data::AugData;
use augkit::errors::{AugError, Result};
use augkit::model::{EmbeddingLoader, ModelCache, WordEmbedding};
use augkit::tokenizer::{Tokenizer, WhitespaceTokenizer};

#[derive(Debug)]
struct FakeEmbedding {
    vocab: Vec<String>,
    top_k: RwLock<Option<usize>>,
}

impl FakeEmbedding {
    fn shared(words: &[&str]) -> Arc<dyn WordEmbedding> {
        Arc::new(FakeEmbedding {
            vocab: words.iter().map(|w| w.to_string()).collect(),
            top_k: RwLock::new(None),
        })
    }
}

impl WordEmbedding for FakeEmbedding {
    fn contains(&self, word: &str) -> bool {
        self.vocab.iter().any(|known| known == word)
    }

    fn vocab(&self) -> &[String] {
        &self.vocab
    }

    fn predict(&self, word: &str, n: usize) -> Vec<String> {
        self.vocab
            .iter()
            .filter(|candidate| candidate.as_str() != word)
            .take(n)
            .cloned()
            .collect()
    }

    fn top_k(&self) -> Option<usize> {
        *self.top_k.read().unwrap()
    }

    fn set_top_k(&self, top_k: Option<usize>) {
        *self.top_k.write().unwrap() = top_k;
    }
}

struct CountingLoader {
    loads: AtomicUsize,
}

impl CountingLoader {
    fn new() -> Self {
        CountingLoader {
            loads: AtomicUsize::new(0),
        }
    }
}

impl EmbeddingLoader for CountingLoader {
    fn load(&self, _path: &Path) -> Result<Arc<dyn WordEmbedding>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(FakeEmbedding::shared(&[
            "alpha", "beta", "gamma", "delta", "epsilon",
        ]))
    }
}

fn sentence() -> AugData {
    AugData::from("one two three four five six seven eight nine ten")
}

#[test]
fn single_request_returns_single_value() {
    let aug = RandomWordAug::new(Action::Swap).with_seed(5);
    let out = aug.run(&sentence(), &AugRequest::new(1)).unwrap();
    match out {
        AugOutput::Single(result) => assert_ne!(result, sentence()),
        AugOutput::Many(_) => panic!("n == 1 must not return a sequence"),
    }
}

#[test]
fn many_request_returns_bounded_distinct_sequence() {
    let aug = RandomWordAug::new(Action::Swap).with_seed(5);
    let out = aug.run(&sentence(), &AugRequest::new(4)).unwrap();
    let results = match out {
        AugOutput::Many(results) => results,
        AugOutput::Single(_) => panic!("n > 1 must return a sequence"),
    };
    assert!(!results.is_empty());
    assert!(results.len() <= 4);
    for (i, result) in results.iter().enumerate() {
        assert_ne!(result, &sentence());
        for other in &results[i + 1..] {
            assert_ne!(result, other);
        }
    }
}

#[test]
fn empty_input_degrades_without_error() {
    let aug = RandomCharAug::new(Action::Substitute).with_seed(5);
    assert_eq!(
        aug.augment(&AugData::Text(String::new())).unwrap(),
        AugData::Text(String::new())
    );
    assert_eq!(
        aug.augment(&AugData::Tokens(Vec::new())).unwrap(),
        AugData::Tokens(Vec::new())
    );
    assert!(aug
        .augment_n(&AugData::Text(String::new()), 3, 1)
        .unwrap()
        .is_empty());
}

#[test]
fn count_policy_governs_how_much_changes() {
    // 10 tokens at the default 30 percent: exactly 3 deleted.
    let aug = RandomWordAug::new(Action::Delete).with_seed(5);
    let out = aug.augment(&sentence()).unwrap();
    assert_eq!(WhitespaceTokenizer.tokenize(out.as_text().unwrap()).len(), 7);

    // Two tokens at 30 percent floors to zero but the minimum lifts it to 1.
    let out = aug.augment(&AugData::from("only two")).unwrap();
    assert_eq!(WhitespaceTokenizer.tokenize(out.as_text().unwrap()).len(), 1);

    // A ceiling of 2 caps the 30 percent of 10.
    let capped = RandomWordAug::new(Action::Delete)
        .with_seed(5)
        .with_bounds(1, Some(2));
    let out = capped.augment(&sentence()).unwrap();
    assert_eq!(WhitespaceTokenizer.tokenize(out.as_text().unwrap()).len(), 8);
}

#[test]
fn unsupported_operation_is_reported_with_names() {
    let aug = RandomCharAug::new(Action::Split);
    match aug.augment(&AugData::from("abc def")).unwrap_err() {
        AugError::Unsupported { operation, augmenter } => {
            assert_eq!(operation, "split");
            assert_eq!(augmenter, "RandomChar_Aug");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn thread_budget_never_changes_output() {
    let aug = RandomCharAug::new(Action::Insert).with_seed(9);
    let input = sentence();
    let serial = aug.augment_n(&input, 5, 1).unwrap();
    let parallel = aug.augment_n(&input, 5, 4).unwrap();
    assert_eq!(serial, parallel);

    let wide = aug.run(&input, &AugRequest::parallel(5)).unwrap().into_vec();
    assert_eq!(serial, wide);
}

#[test]
fn gpu_profile_ignores_thread_request() {
    let gpu = RandomWordAug::new(Action::Swap).with_profile(
        AugProfile::new("RandomWord_Aug", Method::Word, Action::Swap)
            .with_device(Device::Gpu)
            .with_seed(13),
    );
    let cpu = RandomWordAug::new(Action::Swap).with_seed(13);

    let input = sentence();
    assert_eq!(
        gpu.augment_n(&input, 3, 4).unwrap(),
        cpu.augment_n(&input, 3, 1).unwrap()
    );
}

#[test]
fn same_seed_reproduces_different_seed_diverges() {
    let input = sentence();
    let first = RandomWordAug::new(Action::Delete).with_seed(100);
    let second = RandomWordAug::new(Action::Delete).with_seed(100);
    assert_eq!(
        first.augment_n(&input, 3, 1).unwrap(),
        second.augment_n(&input, 3, 1).unwrap()
    );

    let third = RandomWordAug::new(Action::Delete).with_seed(101);
    assert_ne!(
        first.augment_n(&input, 3, 1).unwrap(),
        third.augment_n(&input, 3, 1).unwrap()
    );
}

#[test]
fn word_embeddings_share_one_cached_model() {
    let cache = ModelCache::new();
    let loader = CountingLoader::new();
    let path = Path::new("embeddings/wiki-news.vec");

    let substitute = WordEmbsAug::from_cache(
        EmbeddingKind::Fasttext,
        path,
        &cache,
        &loader,
        Action::Substitute,
        Some(50),
        false,
    )
    .unwrap()
    .with_seed(3);
    let insert = WordEmbsAug::from_cache(
        EmbeddingKind::Fasttext,
        path,
        &cache,
        &loader,
        Action::Insert,
        Some(20),
        false,
    )
    .unwrap()
    .with_seed(4);

    // Two augmenters, one model load.
    assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);

    let input = AugData::from("alpha unknown beta");
    let substituted = substitute.augment(&input).unwrap();
    assert_ne!(substituted, input);
    let tokens = WhitespaceTokenizer.tokenize(substituted.as_text().unwrap());
    assert_eq!(tokens[1], "unknown");

    let inserted = insert.augment(&input).unwrap();
    assert!(inserted.len() > input.len());
}

#[test]
fn force_reload_and_invalidate_refresh_the_model() {
    let cache = ModelCache::new();
    let loader = CountingLoader::new();
    let path = Path::new("embeddings/wiki-news.vec");

    let _ = WordEmbsAug::from_cache(
        EmbeddingKind::Word2vec,
        path,
        &cache,
        &loader,
        Action::Substitute,
        None,
        false,
    )
    .unwrap();
    let _ = WordEmbsAug::from_cache(
        EmbeddingKind::Word2vec,
        path,
        &cache,
        &loader,
        Action::Substitute,
        None,
        true,
    )
    .unwrap();
    assert_eq!(loader.loads.load(Ordering::SeqCst), 2);

    assert!(cache.invalidate(path));
    let _ = WordEmbsAug::from_cache(
        EmbeddingKind::Word2vec,
        path,
        &cache,
        &loader,
        Action::Substitute,
        None,
        false,
    )
    .unwrap();
    assert_eq!(loader.loads.load(Ordering::SeqCst), 3);
}

#[test]
fn registry_assembles_runnable_pipelines() {
    let registry = AugmenterRegistry::with_defaults();
    let steps = json!([
        {"augmenter": "random.word", "config": {"action": "swap", "seed": 40}},
        {"augmenter": "random.word", "config": {
            "action": "substitute",
            "seed": 41,
            "target_words": ["REDACTED"],
            "stopwords": ["fox"]
        }}
    ]);
    let steps = steps.as_array().unwrap().clone();

    let flow = registry.build_sequential(&steps).unwrap();
    let input = AugData::from("the quick brown fox");
    let results = flow.augment_n(&input, 3, 1).unwrap();
    assert!(results.len() > 1);
    for result in &results {
        assert_ne!(result, &input);
        let text = result.as_text().unwrap();
        assert!(text.contains("REDACTED"));
        assert!(text.contains("fox"));
    }

    let sometimes = registry.build_sometimes(&steps, 0.9).unwrap();
    assert_eq!(sometimes.len(), 2);
    assert_ne!(sometimes.augment(&input).unwrap(), input);
}

#[test]
fn bad_configuration_fails_at_construction_not_at_runtime() {
    let registry = AugmenterRegistry::with_defaults();

    let err = registry
        .build("random.word", &json!({"action": "backtranslate"}))
        .unwrap_err();
    assert!(matches!(err, AugError::Validation { .. }));

    let err = registry
        .build("embedding.word", &json!({"action": "substitute"}))
        .unwrap_err();
    assert!(matches!(err, AugError::Validation { .. }));
}
