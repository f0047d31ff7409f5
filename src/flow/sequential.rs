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

use crate::augmenter::{Augment, DEFAULT_SEED};
use crate::data::AugData;
use crate::errors::Result;
use crate::flow::apply_child;
use crate::random::RandomSource;

/// Pipeline that applies every child in order, feeding each child's output
/// into the next. Composition is fully recursive; an empty `Sequential` (or
/// a `Sequential` of empty `Sequential`s) is the identity transform.
#[derive(Debug)]
pub struct Sequential {
    name: String,
    children: Vec<Box<dyn Augment>>,
    seed: u64,
    verbose: u8,
}

impl Sequential {
    pub fn new(children: Vec<Box<dyn Augment>>) -> Self {
        Sequential {
            name: "Sequential_Pipeline".to_string(),
            children,
            seed: DEFAULT_SEED,
            verbose: 0,
        }
    }

    pub fn empty() -> Self {
        Sequential::new(Vec::new())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn push(&mut self, child: Box<dyn Augment>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Augment for Sequential {
    fn name(&self) -> &str {
        &self.name
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn verbosity(&self) -> u8 {
        self.verbose
    }

    fn generate(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let mut current = data.clone();
        for child in &self.children {
            current = apply_child(child.as_ref(), &current, rng)?;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::augmenter::{Action, ActionAugmenter, AugProfile, Method};

    #[derive(Debug)]
    struct Tag(AugProfile, &'static str);

    impl Tag {
        fn boxed(label: &'static str) -> Box<dyn Augment> {
            Box::new(Tag(
                AugProfile::new(label, Method::Word, Action::Insert),
                label,
            ))
        }
    }

    impl ActionAugmenter for Tag {
        fn profile(&self) -> &AugProfile {
            &self.0
        }

        fn insert(&self, data: &AugData, _rng: &mut RandomSource) -> Result<AugData> {
            let text = data.as_text().unwrap_or_default();
            Ok(AugData::Text(format!("{text}+{}", self.1)))
        }
    }

    #[test]
    fn children_apply_in_order() {
        let flow = Sequential::new(vec![Tag::boxed("one"), Tag::boxed("two")]);
        let out = flow.augment(&AugData::from("start")).unwrap();
        assert_eq!(out, AugData::from("start+one+two"));
    }

    #[test]
    fn empty_flow_is_identity() {
        let flow = Sequential::empty();
        let input = AugData::from("unchanged");
        assert_eq!(flow.augment(&input).unwrap(), input);

        let nested = Sequential::new(vec![Box::new(Sequential::empty())]);
        assert_eq!(nested.augment(&input).unwrap(), input);
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let flow = Sequential::new(vec![Box::new(Sequential::empty())]);
        let out = flow.augment(&AugData::Tokens(Vec::new())).unwrap();
        assert_eq!(out, AugData::Tokens(Vec::new()));
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn flows_nest_recursively() {
        let inner = Sequential::new(vec![Tag::boxed("a"), Tag::boxed("b")]);
        let outer = Sequential::new(vec![Box::new(inner), Tag::boxed("c")]);
        let out = outer.augment(&AugData::from("x")).unwrap();
        assert_eq!(out, AugData::from("x+a+b+c"));
    }
}
