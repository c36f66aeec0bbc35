// ABOUTME: Unified error types for the Nosh nutrition engine
// ABOUTME: Structured EngineError variants with an EngineResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! # Engine Error Types
//!
//! Centralized error handling for the nutrition engine. Variants carry
//! structured context so the (out-of-scope) HTTP layer can map them to
//! response codes without parsing message strings.

/// Result alias used throughout the engine crates
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by the nutrition engine
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// A referenced catalog resource does not exist or is not visible to the user
    #[error("{resource} '{id}' not found")]
    NotFound {
        /// Kind of resource that was looked up (food, custom food, recipe)
        resource: &'static str,
        /// Identifier that failed to resolve
        id: String,
    },

    /// A logged portion is outside the accepted range
    #[error("invalid portion: {reason}")]
    InvalidPortion {
        /// Why the portion was rejected
        reason: &'static str,
    },

    /// A scaling factor was negative or non-finite
    #[error("invalid scale factor {factor}")]
    InvalidFactor {
        /// The offending factor
        factor: f64,
    },

    /// Persisted target data failed validation at the decode boundary
    #[error("invalid target: {reason}")]
    InvalidTarget {
        /// Why the target was rejected
        reason: String,
    },

    /// A persistence collaborator failed to supply rows
    #[error("storage error: {message}")]
    Storage {
        /// Collaborator-supplied failure description
        message: String,
    },
}

impl EngineError {
    /// Shorthand for a not-found condition on a catalog resource
    #[must_use]
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Shorthand for a storage collaborator failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
