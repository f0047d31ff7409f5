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

//! # Augkit Bundled Augmenters
//!
//! Concrete augmenters shipped with the toolkit, plus a registry that knows
//! how to instantiate them from JSON configuration and assemble them into
//! flows.

pub mod random_char;
pub mod random_word;
pub mod word_embs;

pub use random_char::RandomCharAug;
pub use random_word::RandomWordAug;
pub use word_embs::{EmbeddingKind, WordEmbsAug};

use std::collections::HashMap;

use serde_json::Value;

use crate::augmenter::Augment;
use crate::data::AugData;
use crate::errors::{AugError, Result};
use crate::flow::{Sequential, Sometimes};
use crate::tokenizer::Tokenizer;

/// Token view of a textual datum. Numeric arrays are rejected: word-level
/// augmenters only operate on text and token sequences.
pub(crate) fn word_tokens(
    tokenizer: &dyn Tokenizer,
    augmenter: &str,
    data: &AugData,
) -> Result<Vec<String>> {
    match data {
        AugData::Text(text) => Ok(tokenizer.tokenize(text)),
        AugData::Tokens(tokens) => Ok(tokens.clone()),
        AugData::Array(_) => Err(AugError::validation(format!(
            "augmenter '{augmenter}' expects textual input, got a numeric array"
        ))),
    }
}

/// Rebuilds a datum of the same shape as `shape` from mutated tokens.
pub(crate) fn rebuild_words(
    tokenizer: &dyn Tokenizer,
    shape: &AugData,
    tokens: Vec<String>,
) -> AugData {
    match shape {
        AugData::Tokens(_) => AugData::Tokens(tokens),
        _ => AugData::Text(tokenizer.detokenize(&tokens)),
    }
}

type AugmenterFactory = fn(&Value) -> Result<Box<dyn Augment>>;

/// Builder that knows how to instantiate augmenters from configuration.
pub struct AugmenterRegistry {
    factories: HashMap<String, AugmenterFactory>,
}

impl AugmenterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        AugmenterRegistry {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry pre-loaded with the bundled augmenters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("random.word", random_word::random_word_factory);
        registry.register("random.char", random_char::random_char_factory);
        registry
    }

    /// Registers a factory for the given augmenter name.
    pub fn register(&mut self, name: impl Into<String>, factory: AugmenterFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Instantiates one augmenter by registered name.
    pub fn build(&self, name: &str, config: &Value) -> Result<Box<dyn Augment>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| AugError::validation(format!("unknown augmenter '{name}'")))?;
        factory(config)
    }

    /// Builds the children described by a sequence of configuration steps.
    ///
    /// Each step is an object with a string `augmenter` and an optional
    /// `config` payload.
    pub fn build_children(&self, steps: &[Value]) -> Result<Vec<Box<dyn Augment>>> {
        let mut children = Vec::with_capacity(steps.len());
        for (index, step) in steps.iter().enumerate() {
            let object = step.as_object().ok_or_else(|| {
                AugError::validation(format!("pipeline step #{index} must be an object"))
            })?;
            let name = object
                .get("augmenter")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    AugError::validation(format!(
                        "pipeline step #{index} missing string 'augmenter'"
                    ))
                })?;
            let config = object.get("config").cloned().unwrap_or(Value::Null);
            children.push(self.build(name, &config)?);
        }
        Ok(children)
    }

    /// Assembles a [`Sequential`] flow from configuration steps.
    pub fn build_sequential(&self, steps: &[Value]) -> Result<Sequential> {
        Ok(Sequential::new(self.build_children(steps)?))
    }

    /// Assembles a [`Sometimes`] flow from configuration steps.
    pub fn build_sometimes(&self, steps: &[Value], pipeline_p: f64) -> Result<Sometimes> {
        Ok(Sometimes::new(self.build_children(steps)?, pipeline_p))
    }
}

impl Default for AugmenterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::augmenter::Augment;
    use serde_json::json;

    #[test]
    fn registry_builds_flow_from_config() {
        let registry = AugmenterRegistry::with_defaults();
        let steps = json!([
            {"augmenter": "random.char", "config": {"action": "insert", "seed": 5}},
            {"augmenter": "random.word", "config": {"action": "swap", "seed": 6}}
        ]);
        let flow = registry
            .build_sequential(steps.as_array().unwrap())
            .unwrap();
        assert_eq!(flow.len(), 2);

        let out = flow.augment(&AugData::from("the quick brown fox")).unwrap();
        assert_ne!(out, AugData::from("the quick brown fox"));
    }

    #[test]
    fn unknown_augmenter_is_rejected() {
        let registry = AugmenterRegistry::with_defaults();
        let steps = json!([{"augmenter": "backtranslate", "config": {}}]);
        let err = registry
            .build_sequential(steps.as_array().unwrap())
            .unwrap_err();
        match err {
            AugError::Validation { message } => assert!(message.contains("backtranslate")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_action_string_is_rejected() {
        let registry = AugmenterRegistry::with_defaults();
        let err = registry
            .build("random.word", &json!({"action": "translate"}))
            .unwrap_err();
        match err {
            AugError::Validation { message } => assert!(message.contains("translate")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
