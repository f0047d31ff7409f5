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

//! # Augkit Worker Pool Module
//!
//! Bounded worker pool for fanning one round of candidate generations out
//! across CPU threads. The pool is created once per `augment` invocation and
//! reused across retry rounds; [`WorkerPool::run_round`] blocks until every
//! job of the round has drained, so duplicate filtering never races candidate
//! generation. Results come back in submission order, not completion order.

use std::fmt;

use rayon::prelude::*;

use crate::errors::{AugError, Result};

/// A bounded pool of worker threads scoped to one `augment` invocation.
pub struct WorkerPool {
    inner: rayon::ThreadPool,
}

impl fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("threads", &self.inner.current_num_threads())
            .finish()
    }
}

impl WorkerPool {
    /// Builds a pool with exactly `num_threads` workers.
    pub fn bounded(num_threads: usize) -> Result<Self> {
        let inner = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads.max(1))
            .build()
            .map_err(|err| AugError::pool(err.to_string()))?;
        Ok(WorkerPool { inner })
    }

    /// Runs `jobs` tasks on the pool and joins before returning.
    ///
    /// Each task receives its slot index in `[0, jobs)`. Output order matches
    /// slot order regardless of which worker finished first.
    pub fn run_round<T, F>(&self, jobs: usize, job: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> Result<T> + Send + Sync,
    {
        self.inner
            .install(|| (0..jobs).into_par_iter().map(|slot| job(slot)).collect())
    }

    /// Number of logical CPUs available to this process.
    pub fn available_threads() -> usize {
        num_cpus::get()
    }
}
