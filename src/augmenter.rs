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

//! # Augkit Augmenter Module
//!
//! The abstract augmentation core: validation, the retry/parallel generation
//! loop, duplicate filtering, and dispatch to one of the five mutating
//! operations.
//!
//! ## Augmenter Design
//!
//! Two traits split the contract:
//!
//! - [`Augment`] is the public surface every augmenter and flow exposes:
//!   `augment` / `augment_n` / `run` plus the hooks the orchestration loop
//!   consults (`clean`, `generate`, `is_duplicate`). Flows implement it
//!   directly.
//! - [`ActionAugmenter`] is what concrete leaf augmenters implement: an
//!   [`AugProfile`] plus whichever of `insert`/`substitute`/`swap`/`delete`/
//!   `split` they support. A blanket impl turns any `ActionAugmenter` into an
//!   [`Augment`] by dispatching on the profile's [`Action`]; unimplemented
//!   operations surface [`AugError::Unsupported`].
//!
//! ## The generation loop
//!
//! `run` validates the input (empty input degrades to an empty value of the
//! same shape, it never errors), cleans it once, then attempts up to
//! `MAX_RETRY_TIMES + 1` rounds. Each round produces `n` candidates —
//! sequentially, or fanned out on a bounded worker pool when
//! `num_threads > 1` on a CPU-affine augmenter — and accepts each candidate
//! that the duplicate filter clears, stopping once `n` results exist. If
//! every round comes back empty the original input is returned unchanged.
//!
//! ## Determinism
//!
//! Candidate `k` of round `r` draws from the RNG stream `r * n + k` derived
//! from the augmenter's seed, so a run with `num_threads = 3` produces
//! exactly the candidates of a single-threaded run.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::data::AugData;
use crate::dedup;
use crate::errors::{AugError, Result};
use crate::policy;
use crate::pool::WorkerPool;
use crate::random::RandomSource;

/// Retries beyond the first attempt before degrading to the original input.
pub const MAX_RETRY_TIMES: usize = 3;

/// Seed applied when an augmenter is not explicitly seeded.
pub const DEFAULT_SEED: u64 = 0x1bad_5eed;

/// The augmentation operation kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Insert,
    Substitute,
    Swap,
    Delete,
    Split,
}

impl Action {
    /// Every member of the enumeration, for error messages.
    pub const ALL: [Action; 5] = [
        Action::Insert,
        Action::Substitute,
        Action::Swap,
        Action::Delete,
        Action::Split,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Insert => "insert",
            Action::Substitute => "substitute",
            Action::Swap => "swap",
            Action::Delete => "delete",
            Action::Split => "split",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AugError;

    fn from_str(value: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == value)
            .ok_or_else(|| {
                AugError::validation(format!(
                    "action must be one of [insert, substitute, swap, delete, split] while '{value}' is passed"
                ))
            })
    }
}

/// The domain of data an augmenter acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Char,
    Word,
    Sentence,
    Audio,
    Spectrogram,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Char => "char",
            Method::Word => "word",
            Method::Sentence => "sentence",
            Method::Audio => "audio",
            Method::Spectrogram => "spectrogram",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = AugError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "char" => Ok(Method::Char),
            "word" => Ok(Method::Word),
            "sentence" => Ok(Method::Sentence),
            "audio" => Ok(Method::Audio),
            "spectrogram" => Ok(Method::Spectrogram),
            other => Err(AugError::validation(format!(
                "method must be one of [char, word, sentence, audio, spectrogram] while '{other}' is passed"
            ))),
        }
    }
}

/// Device affinity of an augmenter.
///
/// Parallel candidate fan-out only happens on [`Device::Cpu`]; a GPU-affine
/// augmenter generates sequentially regardless of the requested thread count
/// rather than silently reinterpreting the request as CPU parallelism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cpu,
    Gpu,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
            Device::Gpu => "gpu",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = AugError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "cpu" => Ok(Device::Cpu),
            "gpu" => Ok(Device::Gpu),
            other => Err(AugError::validation(format!(
                "unsupported device mode '{other}'; only cpu and gpu are supported"
            ))),
        }
    }
}

/// Identity and bounds of a leaf augmenter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AugProfile {
    /// Human-readable augmenter name used in logs and error messages.
    pub name: String,
    pub action: Action,
    pub method: Method,
    /// Floor on the number of elements augmented per candidate.
    pub aug_min: usize,
    /// Optional ceiling; `None` leaves the percentage unclamped from above.
    pub aug_max: Option<usize>,
    /// Fraction of elements to augment; falls back to 0.3 when unset.
    pub aug_p: Option<f64>,
    pub device: Device,
    /// Soft input warnings are logged when this is above zero.
    pub verbose: u8,
    pub seed: u64,
}

impl AugProfile {
    pub fn new(name: impl Into<String>, method: Method, action: Action) -> Self {
        AugProfile {
            name: name.into(),
            action,
            method,
            aug_min: 1,
            aug_max: Some(10),
            aug_p: Some(0.3),
            device: Device::Cpu,
            verbose: 0,
            seed: DEFAULT_SEED,
        }
    }

    /// String-validated construction; unknown enumeration values fail here.
    pub fn parse(name: impl Into<String>, method: &str, action: &str) -> Result<Self> {
        Ok(AugProfile::new(name, method.parse()?, action.parse()?))
    }

    pub fn with_bounds(mut self, aug_min: usize, aug_max: Option<usize>) -> Self {
        self.aug_min = aug_min;
        self.aug_max = aug_max;
        self
    }

    pub fn with_percent(mut self, aug_p: f64) -> Self {
        self.aug_p = Some(aug_p);
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Elements to augment for an input of `size` elements.
    ///
    /// A request-level `override_p` wins over the instance percentage; both
    /// absent falls back to [`policy::DEFAULT_AUG_PERCENT`].
    pub fn aug_count(&self, size: usize, override_p: Option<f64>) -> usize {
        let percent = override_p
            .or(self.aug_p)
            .unwrap_or(policy::DEFAULT_AUG_PERCENT);
        policy::aug_count(size, self.aug_min, self.aug_max, percent)
    }

    /// Distinct element indices to augment for an input of `len` elements.
    pub fn select_indices(&self, rng: &mut RandomSource, len: usize) -> Vec<usize> {
        let count = self.aug_count(len, None);
        policy::select_indices(rng, len, count)
    }
}

impl fmt::Display for AugProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name:{}, Action:{}, Method:{}",
            self.name, self.action, self.method
        )
    }
}

/// One `augment` invocation: requested output count and thread budget.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AugRequest {
    /// Requested number of distinct outputs, at least 1.
    pub n: usize,
    /// Worker threads for candidate generation, at least 1.
    pub num_threads: usize,
}

impl AugRequest {
    pub fn new(n: usize) -> Self {
        AugRequest {
            n: n.max(1),
            num_threads: 1,
        }
    }

    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }

    /// Request using every logical CPU for generation.
    pub fn parallel(n: usize) -> Self {
        AugRequest::new(n).with_threads(WorkerPool::available_threads())
    }
}

impl Default for AugRequest {
    fn default() -> Self {
        AugRequest::new(1)
    }
}

/// Shape-preserving result of one `augment` invocation.
///
/// `n == 1` yields `Single`; any larger request yields `Many` with at most
/// `n` entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AugOutput {
    Single(AugData),
    Many(Vec<AugData>),
}

impl AugOutput {
    /// Flattens either shape into a vector.
    pub fn into_vec(self) -> Vec<AugData> {
        match self {
            AugOutput::Single(data) => vec![data],
            AugOutput::Many(results) => results,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AugOutput::Single(_) => 1,
            AugOutput::Many(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Contract every augmenter and flow fulfills.
///
/// The provided `augment`/`augment_n`/`run` methods carry the whole
/// orchestration loop; implementors supply identity, a `generate` producing
/// one fully-formed candidate, and optionally override `clean` and
/// `is_duplicate`.
pub trait Augment: Send + Sync + fmt::Debug {
    /// Human-readable name for logs and error messages.
    fn name(&self) -> &str;

    /// Seed rooting this component's RNG streams.
    fn seed(&self) -> u64;

    fn device(&self) -> Device {
        Device::Cpu
    }

    fn verbosity(&self) -> u8 {
        0
    }

    /// Domain-specific normalization applied once before generation; the
    /// cleaned value, not the raw one, is what `generate` sees.
    fn clean(&self, data: &AugData) -> Result<AugData> {
        Ok(data.clone())
    }

    /// Produces one fully-formed candidate variant of `data`.
    fn generate(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData>;

    /// Whether `candidate` duplicates the original or an accepted result.
    fn is_duplicate(
        &self,
        accepted: &[AugData],
        original: &AugData,
        candidate: &AugData,
    ) -> bool {
        dedup::is_duplicate(accepted, original, candidate)
    }

    /// Single-output convenience: `run` with the default request.
    fn augment(&self, data: &AugData) -> Result<AugData> {
        match run_augment(self, data, &AugRequest::default())? {
            AugOutput::Single(result) => Ok(result),
            AugOutput::Many(mut results) => {
                Ok(results.pop().unwrap_or_else(|| data.empty_like()))
            }
        }
    }

    /// Up to `n` distinct outputs, generated on `num_threads` workers.
    fn augment_n(&self, data: &AugData, n: usize, num_threads: usize) -> Result<Vec<AugData>> {
        let request = AugRequest::new(n).with_threads(num_threads);
        Ok(run_augment(self, data, &request)?.into_vec())
    }

    /// Full-control entry point.
    fn run(&self, data: &AugData, request: &AugRequest) -> Result<AugOutput> {
        run_augment(self, data, request)
    }
}

/// Leaf augmenter contract: a profile plus the supported subset of the five
/// mutating operations. Unimplemented operations signal
/// [`AugError::Unsupported`] when the profile's action selects them.
pub trait ActionAugmenter: Send + Sync + fmt::Debug {
    fn profile(&self) -> &AugProfile;

    fn clean(&self, data: &AugData) -> Result<AugData> {
        Ok(data.clone())
    }

    fn insert(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let _ = (data, rng);
        Err(AugError::unsupported("insert", &self.profile().name))
    }

    fn substitute(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let _ = (data, rng);
        Err(AugError::unsupported("substitute", &self.profile().name))
    }

    fn swap(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let _ = (data, rng);
        Err(AugError::unsupported("swap", &self.profile().name))
    }

    fn delete(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let _ = (data, rng);
        Err(AugError::unsupported("delete", &self.profile().name))
    }

    fn split(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        let _ = (data, rng);
        Err(AugError::unsupported("split", &self.profile().name))
    }

    fn is_duplicate(
        &self,
        accepted: &[AugData],
        original: &AugData,
        candidate: &AugData,
    ) -> bool {
        dedup::is_duplicate(accepted, original, candidate)
    }
}

impl<T: ActionAugmenter> Augment for T {
    fn name(&self) -> &str {
        &self.profile().name
    }

    fn seed(&self) -> u64 {
        self.profile().seed
    }

    fn device(&self) -> Device {
        self.profile().device
    }

    fn verbosity(&self) -> u8 {
        self.profile().verbose
    }

    fn clean(&self, data: &AugData) -> Result<AugData> {
        ActionAugmenter::clean(self, data)
    }

    fn generate(&self, data: &AugData, rng: &mut RandomSource) -> Result<AugData> {
        match self.profile().action {
            Action::Insert => self.insert(data, rng),
            Action::Substitute => self.substitute(data, rng),
            Action::Swap => self.swap(data, rng),
            Action::Delete => self.delete(data, rng),
            Action::Split => self.split(data, rng),
        }
    }

    fn is_duplicate(
        &self,
        accepted: &[AugData],
        original: &AugData,
        candidate: &AugData,
    ) -> bool {
        ActionAugmenter::is_duplicate(self, accepted, original, candidate)
    }
}

/// The generate-and-filter loop shared by every augmenter and flow.
pub fn run_augment<A: Augment + ?Sized>(
    augmenter: &A,
    data: &AugData,
    request: &AugRequest,
) -> Result<AugOutput> {
    // Soft-warning path: empty input degrades, it never raises.
    if data.is_empty() {
        if augmenter.verbosity() > 0 {
            warn!(
                "augmenter '{}' received empty input; returning empty output",
                augmenter.name()
            );
        }
        return Ok(if request.n == 1 {
            AugOutput::Single(data.empty_like())
        } else {
            AugOutput::Many(Vec::new())
        });
    }

    let cleaned = augmenter.clean(data)?;

    // One pool per invocation, reused across retry rounds. GPU-affine
    // augmenters never fan out.
    let pool = if request.num_threads > 1 && augmenter.device() == Device::Cpu {
        Some(WorkerPool::bounded(request.num_threads)?)
    } else {
        None
    };

    let seed = augmenter.seed();
    let mut accepted: Vec<AugData> = Vec::new();

    'rounds: for round in 0..=MAX_RETRY_TIMES {
        let base = (round * request.n) as u64;
        let candidates = match &pool {
            Some(pool) => pool.run_round(request.n, |slot| {
                let mut rng = RandomSource::for_stream(seed, base + slot as u64);
                augmenter.generate(&cleaned, &mut rng)
            })?,
            None => {
                let mut out = Vec::with_capacity(request.n);
                for slot in 0..request.n {
                    let mut rng = RandomSource::for_stream(seed, base + slot as u64);
                    out.push(augmenter.generate(&cleaned, &mut rng)?);
                }
                out
            }
        };

        for candidate in candidates {
            if !augmenter.is_duplicate(&accepted, data, &candidate) {
                accepted.push(candidate);
            }
            if accepted.len() >= request.n {
                break 'rounds;
            }
        }

        debug!(
            "augmenter '{}' round {} accepted {}/{}",
            augmenter.name(),
            round,
            accepted.len(),
            request.n
        );
    }

    // Retries exhausted without a single distinct variant: degrade to the
    // original input.
    if accepted.is_empty() {
        return Ok(if request.n == 1 {
            AugOutput::Single(data.clone())
        } else {
            AugOutput::Many(vec![data.clone()])
        });
    }

    accepted.truncate(request.n);
    Ok(if request.n == 1 {
        AugOutput::Single(accepted.swap_remove(0))
    } else {
        AugOutput::Many(accepted)
    })
}
