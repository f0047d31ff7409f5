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

//! # Augkit Tokenizer Module
//!
//! The tokenization capability consumed by word-level augmenters. Concrete
//! tokenizer implementations are collaborators; augmenters only rely on this
//! trait pair of `tokenize`/`detokenize`, pluggable per augmenter instance.

use std::fmt;

/// Splits text into ordered tokens and joins them back.
pub trait Tokenizer: Send + Sync + fmt::Debug {
    /// Ordered token sequence for `text`.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Inverse of [`Tokenizer::tokenize`].
    fn detokenize(&self, tokens: &[String]) -> String;
}

/// Default tokenizer: whitespace split, single-space join.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn detokenize(&self, tokens: &[String]) -> String {
        tokens.join(" ")
    }
}
