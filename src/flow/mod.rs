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

//! # Augkit Flow Module
//!
//! Composes augmenters (or nested flows) into pipelines. [`Sequential`]
//! applies every child in order; [`Sometimes`] applies each child with an
//! independent probability per candidate. Both implement [`Augment`], so the
//! retry/duplicate-filter loop and the shape contract apply to a whole
//! pipeline exactly as to a single augmenter, and flows nest freely.
//!
//! Inside a flow, children run single-candidate generation on the *flow's*
//! RNG stream; a child's own seed only matters when it is augmented through
//! directly. An empty pipeline is the identity transform.

mod sequential;
mod sometimes;

pub use sequential::Sequential;
pub use sometimes::{Sometimes, DEFAULT_PIPELINE_P};

use crate::augmenter::Augment;
use crate::data::AugData;
use crate::errors::Result;
use crate::random::RandomSource;

/// One child pass: the child's `clean` followed by one candidate generation.
pub(crate) fn apply_child(
    child: &dyn Augment,
    data: &AugData,
    rng: &mut RandomSource,
) -> Result<AugData> {
    if data.is_empty() {
        // A child cannot improve on empty input; pass it through.
        return Ok(data.clone());
    }
    let cleaned = child.clean(data)?;
    child.generate(&cleaned, rng)
}
