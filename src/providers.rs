// ABOUTME: Persistence collaborator trait supplying journal rows to the engine
// ABOUTME: NutritionStore fetch methods plus lenient decoding of the target blob
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Persistence collaborator interface
//!
//! The engine never touches storage itself: a [`NutritionStore`]
//! implementation (SQL-backed in the application, in-memory in tests) hands
//! it row snapshots per request. Targets cross this boundary as an opaque
//! serialized blob; [`decode_target`] is the only place it is interpreted,
//! and a malformed blob degrades to "no target configured".

use async_trait::async_trait;
use chrono::NaiveDate;
use nosh_core::errors::EngineResult;
use nosh_core::models::{ActivityRecord, JournalEvent, LoggedEntry, Target, WeightSample};
use uuid::Uuid;

pub use nosh_intelligence::calculator::FoodCatalog;

/// Persistence collaborator supplying a user's journal rows
///
/// Every fetch returns a storage error when the underlying store cannot be
/// read; the engine propagates it unchanged.
#[async_trait]
pub trait NutritionStore: Send + Sync {
    /// Logged entries within `[start, end]` inclusive
    ///
    /// # Errors
    ///
    /// Returns a storage error when the journal cannot be read.
    async fn fetch_logged_entries(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<LoggedEntry>>;

    /// Activity records within `[start, end]` inclusive
    ///
    /// # Errors
    ///
    /// Returns a storage error when the journal cannot be read.
    async fn fetch_activity(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ActivityRecord>>;

    /// Weight samples within `[start, end]` inclusive
    ///
    /// # Errors
    ///
    /// Returns a storage error when the journal cannot be read.
    async fn fetch_weight_samples(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<WeightSample>>;

    /// Journal events within `[start, end]` inclusive
    ///
    /// # Errors
    ///
    /// Returns a storage error when the journal cannot be read.
    async fn fetch_events(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<JournalEvent>>;

    /// The user's persisted target blob, if one exists
    ///
    /// # Errors
    ///
    /// Returns a storage error when the target row cannot be read.
    async fn fetch_target(&self, user_id: Uuid) -> EngineResult<Option<String>>;
}

/// Decode a persisted target blob, degrading to `None` on malformed data
///
/// A corrupt target row must never block daily or trend computation, so
/// decode failures are logged and swallowed here rather than propagated.
#[must_use]
pub fn decode_target(blob: Option<&str>) -> Option<Target> {
    blob.and_then(Target::from_blob)
}
