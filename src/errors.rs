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

//! # Augkit Error Module
//!
//! This module defines the error types and utilities used throughout Augkit
//! for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Augkit splits failures into two worlds:
//!
//! - **Construction-time contract violations always raise.** An action,
//!   method, device, or embedding-model kind outside its closed enumeration
//!   is an [`AugError::Validation`] at parse/construction time.
//! - **Per-call input problems never raise.** Empty or missing input to
//!   `augment` degrades to a well-typed empty result (with a verbosity-gated
//!   warning), so a pipeline of many augmenters does not abort on one bad
//!   item.
//!
//! Failures inside collaborators (embedding models, loaders) are not caught
//! by the orchestration core; they propagate as fatal errors up through
//! `augment`.
//!
//! ## Error Categories
//!
//! - **Validation**: invalid parameters or enumeration values
//! - **Unsupported**: an operation the concrete augmenter does not implement
//! - **Model**: failures raised by embedding-model collaborators
//! - **Pool**: worker-pool construction failures
//! - **Io**: filesystem errors from model loaders
//! - **Serde**: serialization/deserialization errors from JSON configs
//! - **Internal**: unexpected internal failures

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Augkit.
pub type Result<T> = std::result::Result<T, AugError>;

/// Canonical error enumeration for Augkit.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum AugError {
    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// An augmentation operation the concrete augmenter does not support.
    #[error("augmenter '{augmenter}' does not support operation '{operation}'")]
    Unsupported {
        operation: String,
        augmenter: String,
    },

    /// Any failure raised by an embedding-model collaborator.
    #[error("model error: {message}")]
    Model { message: String },

    /// Failures while building or running the worker pool.
    #[error("worker pool error: {0}")]
    Pool(String),

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AugError {
    fn from(err: io::Error) -> Self {
        AugError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AugError {
    fn from(err: serde_json::Error) -> Self {
        AugError::Serde(err.to_string())
    }
}

impl AugError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        AugError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct unsupported-operation errors.
    pub fn unsupported(operation: impl Into<String>, augmenter: impl Into<String>) -> Self {
        AugError::Unsupported {
            operation: operation.into(),
            augmenter: augmenter.into(),
        }
    }

    /// Helper to construct model errors.
    pub fn model<T: Into<String>>(message: T) -> Self {
        AugError::Model {
            message: message.into(),
        }
    }

    /// Helper to construct worker-pool errors.
    pub fn pool<T: Into<String>>(message: T) -> Self {
        AugError::Pool(message.into())
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        AugError::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = AugError::unsupported("insert", "RandomWord_Aug");
        assert_eq!(
            err.to_string(),
            "augmenter 'RandomWord_Aug' does not support operation 'insert'"
        );

        let err = AugError::validation("aug_p must be in [0,1]");
        assert_eq!(err.to_string(), "validation error: aug_p must be in [0,1]");
    }

    #[test]
    fn io_errors_convert() {
        let err: AugError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        match err {
            AugError::Io(message) => assert!(message.contains("missing")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
