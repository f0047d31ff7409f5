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

//! # Augkit Library
//!
//! Augkit is a data-augmentation toolkit: given textual, audio, or
//! spectrogram input it produces one or more perturbed variants (insertion,
//! substitution, swap, deletion, split) for training-data enrichment. This
//! crate is the augmentation orchestration core — how one augmentation
//! operation is validated, retried, parallelized, deduplicated, and composed
//! into pipelines.
//!
//! ## Module Overview
//!
//! - **data**: the `AugData` datum (text, token sequence, numeric array)
//! - **augmenter**: the abstract core — traits, profile, request/output
//!   shapes, and the retry/parallel generation loop
//! - **flow**: `Sequential` and `Sometimes` pipeline composition
//! - **random**: deterministic seedable randomness (`RandomSource`)
//! - **policy**: the augment-count policy and index selection
//! - **dedup**: the duplicate filter
//! - **pool**: the bounded worker pool for CPU candidate fan-out
//! - **tokenizer**: the tokenize/detokenize capability
//! - **model**: the word-embedding capability and `ModelCache`
//! - **augmenters**: bundled concrete augmenters and the config registry
//!
//! ## Quick Start
//!
//! ```rust
//! use augkit::augmenter::{Action, Augment};
//! use augkit::augmenters::{RandomCharAug, RandomWordAug};
//! use augkit::data::AugData;
//! use augkit::flow::Sequential;
//!
//! let flow = Sequential::new(vec![
//!     Box::new(RandomCharAug::new(Action::Insert)),
//!     Box::new(RandomWordAug::new(Action::Swap)),
//! ]);
//!
//! let input = AugData::from("the quick brown fox");
//! let variants = flow.augment_n(&input, 3, 1).unwrap();
//! assert!(variants.iter().all(|variant| variant != &input));
//! ```
//!
//! ## Error Handling
//!
//! Construction-time contract violations (unknown action/method/device/model
//! kind) raise `AugError::Validation`; empty per-call input never raises and
//! degrades to an empty value of matching shape. See the `errors` module.

pub mod augmenter;
pub mod augmenters;
pub mod data;
pub mod dedup;
pub mod errors;
pub mod flow;
pub mod model;
pub mod policy;
pub mod pool;
pub mod random;
pub mod tokenizer;

pub use augmenter::{
    run_augment, Action, ActionAugmenter, Augment, AugOutput, AugProfile, AugRequest, Device,
    Method, DEFAULT_SEED, MAX_RETRY_TIMES,
};
pub use augmenters::{AugmenterRegistry, EmbeddingKind, RandomCharAug, RandomWordAug, WordEmbsAug};
pub use data::AugData;
pub use errors::{AugError, Result};
pub use flow::{Sequential, Sometimes, DEFAULT_PIPELINE_P};
pub use model::{EmbeddingLoader, ModelCache, WordEmbedding};
pub use pool::WorkerPool;
pub use random::RandomSource;
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
