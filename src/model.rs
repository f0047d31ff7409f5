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

//! # Augkit Embedding Model Module
//!
//! The embedding-model capability consumed by word-embedding-backed
//! augmenters, plus an explicit [`ModelCache`]. Loading an embedding file is
//! expensive, so models are loaded once per path and shared; the cache is an
//! owned object injected into augmenter construction, never hidden global
//! state. File-format parsing (word2vec/GloVe/fastText) belongs to
//! [`EmbeddingLoader`] implementations outside this crate's scope.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::errors::Result;

/// Read-only query surface of a loaded word-embedding model.
///
/// `set_top_k` is the one mutation the contract allows, and callers must
/// apply it before generation begins, never concurrently with it.
/// Implementations are expected to back it with interior mutability.
pub trait WordEmbedding: Send + Sync + fmt::Debug {
    /// Whether `word` has a vector in this model.
    fn contains(&self, word: &str) -> bool;

    /// Every word in the model's vocabulary.
    fn vocab(&self) -> &[String];

    /// Up to `n` candidate words ranked by similarity to `word`.
    fn predict(&self, word: &str, n: usize) -> Vec<String>;

    /// Current bound on the lucky-draw candidate pool, `None` for unbounded.
    fn top_k(&self) -> Option<usize>;

    /// Adjusts the candidate-pool bound. Only valid between generations.
    fn set_top_k(&self, top_k: Option<usize>);
}

/// Loads a model from disk. Implemented by format-specific parsers
/// (word2vec/GloVe/fastText) outside this crate.
pub trait EmbeddingLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Arc<dyn WordEmbedding>>;
}

/// Path-keyed cache of loaded embedding models.
///
/// Lifecycle: a model is created on first load per path and reused until a
/// force-reload replaces it or [`ModelCache::invalidate`] drops it. A cache
/// hit re-applies the requested `top_k` to the shared model, so adjust it
/// before generation starts.
#[derive(Default)]
pub struct ModelCache {
    models: RwLock<HashMap<PathBuf, Arc<dyn WordEmbedding>>>,
}

impl fmt::Debug for ModelCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCache").field("entries", &self.len()).finish()
    }
}

impl ModelCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the model for `path`, loading it through `loader` on a miss
    /// or when `force_reload` is set.
    pub fn load(
        &self,
        path: &Path,
        loader: &dyn EmbeddingLoader,
        top_k: Option<usize>,
        force_reload: bool,
    ) -> Result<Arc<dyn WordEmbedding>> {
        if !force_reload {
            let models = self.models.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(model) = models.get(path) {
                model.set_top_k(top_k);
                return Ok(Arc::clone(model));
            }
        }

        let model = loader.load(path)?;
        model.set_top_k(top_k);
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        models.insert(path.to_path_buf(), Arc::clone(&model));
        Ok(model)
    }

    /// Drops the cached model for `path`; true when an entry existed.
    pub fn invalidate(&self, path: &Path) -> bool {
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        models.remove(path).is_some()
    }

    /// Number of cached models.
    pub fn len(&self) -> usize {
        self.models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no models.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct FakeModel {
        vocab: Vec<String>,
        top_k: RwLock<Option<usize>>,
    }

    impl FakeModel {
        fn shared(words: &[&str]) -> Arc<dyn WordEmbedding> {
            Arc::new(FakeModel {
                vocab: words.iter().map(|w| w.to_string()).collect(),
                top_k: RwLock::new(None),
            })
        }
    }

    impl WordEmbedding for FakeModel {
        fn contains(&self, word: &str) -> bool {
            self.vocab.iter().any(|known| known == word)
        }

        fn vocab(&self) -> &[String] {
            &self.vocab
        }

        fn predict(&self, _word: &str, n: usize) -> Vec<String> {
            self.vocab.iter().take(n).cloned().collect()
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

    impl EmbeddingLoader for CountingLoader {
        fn load(&self, _path: &Path) -> Result<Arc<dyn WordEmbedding>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(FakeModel::shared(&["alpha", "beta", "gamma"]))
        }
    }

    #[test]
    fn loads_once_per_path() {
        let cache = ModelCache::new();
        let loader = CountingLoader { loads: AtomicUsize::new(0) };
        let path = Path::new("embeddings/news.vec");

        let first = cache.load(path, &loader, Some(50), false).unwrap();
        let second = cache.load(path, &loader, Some(10), false).unwrap();

        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        // Cache hit re-applied the requested bound.
        assert_eq!(second.top_k(), Some(10));
    }

    #[test]
    fn force_reload_replaces_entry() {
        let cache = ModelCache::new();
        let loader = CountingLoader { loads: AtomicUsize::new(0) };
        let path = Path::new("embeddings/news.vec");

        let first = cache.load(path, &loader, None, false).unwrap();
        let second = cache.load(path, &loader, None, true).unwrap();

        assert_eq!(loader.loads.load(Ordering::SeqCst), 2);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalidate_drops_entry() {
        let cache = ModelCache::new();
        let loader = CountingLoader { loads: AtomicUsize::new(0) };
        let path = Path::new("embeddings/news.vec");

        cache.load(path, &loader, None, false).unwrap();
        assert!(cache.invalidate(path));
        assert!(!cache.invalidate(path));
        assert!(cache.is_empty());

        cache.load(path, &loader, None, false).unwrap();
        assert_eq!(loader.loads.load(Ordering::SeqCst), 2);
    }
}
