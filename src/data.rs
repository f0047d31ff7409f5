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

//! # Augkit Data Module
//!
//! The fundamental datum flowing through augmenters and flows. A datum is
//! one of three shapes: free text, an ordered token sequence, or a numeric
//! array (audio samples or a flattened spectrogram). Structural equality is
//! exact string equality for text and element-wise equality for sequences
//! and arrays, which is what the duplicate filter relies on.

use serde::{Deserialize, Serialize};

/// A single augmentation input or output.
///
/// Every augmentation preserves the shape of its input: a `Text` in yields a
/// `Text` out, and likewise for the other variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AugData {
    /// Free-form text.
    Text(String),
    /// An ordered sequence of tokens.
    Tokens(Vec<String>),
    /// A numeric array: audio samples or a flattened spectrogram.
    Array(Vec<f32>),
}

impl AugData {
    /// Length of the datum: characters for text, elements otherwise.
    pub fn len(&self) -> usize {
        match self {
            AugData::Text(text) => text.chars().count(),
            AugData::Tokens(tokens) => tokens.len(),
            AugData::Array(values) => values.len(),
        }
    }

    /// Whether the datum holds no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An empty value of the same shape as `self`.
    ///
    /// This is what `augment` returns for empty input instead of raising.
    pub fn empty_like(&self) -> AugData {
        match self {
            AugData::Text(_) => AugData::Text(String::new()),
            AugData::Tokens(_) => AugData::Tokens(Vec::new()),
            AugData::Array(_) => AugData::Array(Vec::new()),
        }
    }

    /// Borrow the text content, if this is a `Text` datum.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AugData::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the token sequence, if this is a `Tokens` datum.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            AugData::Tokens(tokens) => Some(tokens),
            _ => None,
        }
    }

    /// Borrow the numeric content, if this is an `Array` datum.
    pub fn as_array(&self) -> Option<&[f32]> {
        match self {
            AugData::Array(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for AugData {
    fn from(text: &str) -> Self {
        AugData::Text(text.to_string())
    }
}

impl From<String> for AugData {
    fn from(text: String) -> Self {
        AugData::Text(text)
    }
}

impl From<Vec<String>> for AugData {
    fn from(tokens: Vec<String>) -> Self {
        AugData::Tokens(tokens)
    }
}

impl From<Vec<f32>> for AugData {
    fn from(values: Vec<f32>) -> Self {
        AugData::Array(values)
    }
}
