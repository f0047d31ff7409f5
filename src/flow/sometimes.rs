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

/// Probability applied when a `Sometimes` flow is not explicitly configured.
pub const DEFAULT_PIPELINE_P: f64 = 0.5;

/// Pipeline that visits children in order but applies each one only when an
/// independent uniform draw lands below `pipeline_p`. Skipped children pass
/// their input through unchanged. Draws are independent per child, per
/// candidate, per invocation.
#[derive(Debug)]
pub struct Sometimes {
    name: String,
    children: Vec<Box<dyn Augment>>,
    pipeline_p: f64,
    seed: u64,
    verbose: u8,
}

impl Sometimes {
    pub fn new(children: Vec<Box<dyn Augment>>, pipeline_p: f64) -> Self {
        Sometimes {
            name: "Sometimes_Pipeline".to_string(),
            children,
            pipeline_p,
            seed: DEFAULT_SEED,
            verbose: 0,
        }
    }

    pub fn with_default_p(children: Vec<Box<dyn Augment>>) -> Self {
        Sometimes::new(children, DEFAULT_PIPELINE_P)
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

    pub fn pipeline_p(&self) -> f64 {
        self.pipeline_p
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Augment for Sometimes {
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
            // pipeline_p >= 1 always passes; skipping the draw keeps the
            // stream aligned with Sequential so both produce identical
            // candidates under the same seed.
            if self.pipeline_p < 1.0 && rng.uniform() >= self.pipeline_p {
                continue;
            }
            current = apply_child(child.as_ref(), &current, rng)?;
        }
        Ok(current)
    }
}
