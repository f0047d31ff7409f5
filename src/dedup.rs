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

//! # Augkit Duplicate Filter Module
//!
//! Decides whether a freshly produced candidate duplicates the original
//! input or any already-accepted result. Equality is the structural
//! [`AugData`] equality: exact for text, element-wise for token sequences
//! and numeric arrays. Augmenters may override the check through the
//! `Augment::is_duplicate` hook; the core only guarantees the filter is
//! consulted before any candidate is accepted.

use crate::data::AugData;

/// True when `candidate` equals the original input or any accepted result.
pub fn is_duplicate(accepted: &[AugData], original: &AugData, candidate: &AugData) -> bool {
    candidate == original || accepted.iter().any(|seen| seen == candidate)
}
