// ABOUTME: Request-scoped orchestration between the store, catalog, and engine
// ABOUTME: Daily stats, longitudinal trends, weight trend, and log-time snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Engine services
//!
//! Each call fetches the rows it needs from the collaborators, runs the
//! pure engine over them, and returns a presentation-ready result. Nothing
//! is persisted or cached between calls; an abandoned request is simply
//! discarded.

use chrono::{NaiveDate, Utc};
use nosh_core::errors::EngineResult;
use nosh_core::models::{LoggableItemRef, NutrientKey};
use nosh_intelligence::calculator::{CalculatedNutrients, FoodCatalog, NutrientCalculator};
use nosh_intelligence::daily::{DailyAggregator, DailyBucket};
use nosh_intelligence::trend::{LongitudinalTrend, TimeRange, TrendAggregator, TrendRequest};
use nosh_intelligence::weight::{WeightTrendClassifier, WeightTrendDirection};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::providers::{decode_target, NutritionStore};

/// Daily summaries over an inclusive date range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStatsResult {
    /// One bucket per calendar day, ascending
    pub daily_summaries: Vec<DailyBucket>,
    /// Range start
    pub start_date: NaiveDate,
    /// Range end
    pub end_date: NaiveDate,
}

/// Longitudinal trend series exposed to the presentation layer
pub type LongitudinalTrendResult = LongitudinalTrend;

/// Read-side service: daily stats, trends, and weight classification
pub struct NutritionService<S: NutritionStore> {
    store: S,
}

impl<S: NutritionStore> NutritionService<S> {
    /// Create a service over a store collaborator
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Gap-filled daily summaries for `[start, end]` inclusive
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the store collaborator.
    pub async fn daily_stats(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<DailyStatsResult> {
        let entries = self.store.fetch_logged_entries(user_id, start, end).await?;
        let activity = self.store.fetch_activity(user_id, start, end).await?;
        let daily_summaries = DailyAggregator::aggregate(&entries, &activity, start, end);
        info!(%user_id, %start, %end, days = daily_summaries.len(), "computed daily stats");
        Ok(DailyStatsResult {
            daily_summaries,
            start_date: start,
            end_date: end,
        })
    }

    /// Daily summaries for the last `n` calendar days including today
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the store collaborator.
    pub async fn daily_stats_last_n_days(
        &self,
        user_id: Uuid,
        n: u32,
    ) -> EngineResult<DailyStatsResult> {
        let (start, end) = DailyAggregator::last_n_days(Utc::now().date_naive(), n);
        self.daily_stats(user_id, start, end).await
    }

    /// Longitudinal trend for one nutrient over a named range
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the store collaborator.
    pub async fn trend(
        &self,
        user_id: Uuid,
        nutrient: NutrientKey,
        time_range: TimeRange,
    ) -> EngineResult<LongitudinalTrendResult> {
        self.trend_at(user_id, nutrient, time_range, Utc::now().date_naive())
            .await
    }

    /// [`Self::trend`] with an explicit "today", for deterministic callers
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the store collaborator.
    pub async fn trend_at(
        &self,
        user_id: Uuid,
        nutrient: NutrientKey,
        time_range: TimeRange,
        today: NaiveDate,
    ) -> EngineResult<LongitudinalTrendResult> {
        let (start, end) = time_range.resolve(today);

        let entries = self.store.fetch_logged_entries(user_id, start, end).await?;
        let activity = self.store.fetch_activity(user_id, start, end).await?;
        let weights = self.store.fetch_weight_samples(user_id, start, end).await?;
        let events = self.store.fetch_events(user_id, start, end).await?;
        let target_blob = self.store.fetch_target(user_id).await?;
        let target = decode_target(target_blob.as_deref());

        let daily = DailyAggregator::aggregate(&entries, &activity, start, end);
        let result = TrendAggregator::build(&TrendRequest {
            nutrient,
            time_range,
            start,
            end,
            daily: &daily,
            weights: &weights,
            events: &events,
            target: target.as_ref(),
        });
        info!(
            %user_id,
            nutrient = nutrient.as_str(),
            range = time_range.as_str(),
            points = result.nutrient_data.len(),
            "computed longitudinal trend"
        );
        Ok(result)
    }

    /// Classify the user's recent weight trend
    ///
    /// Looks back over the all-time range; the classifier itself only uses
    /// the most recent samples.
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the store collaborator.
    pub async fn weight_trend(&self, user_id: Uuid) -> EngineResult<WeightTrendDirection> {
        self.weight_trend_at(user_id, Utc::now().date_naive()).await
    }

    /// [`Self::weight_trend`] with an explicit "today"
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the store collaborator.
    pub async fn weight_trend_at(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> EngineResult<WeightTrendDirection> {
        let (start, end) = TimeRange::All.resolve(today);
        let mut samples = self.store.fetch_weight_samples(user_id, start, end).await?;
        // Classifier expects most recent first
        samples.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(WeightTrendClassifier::classify(&samples))
    }
}

/// Write-side helper: computes the nutrient snapshot captured onto a journal
/// entry at log time
pub struct CalculatorService<C: FoodCatalog> {
    catalog: C,
}

impl<C: FoodCatalog> CalculatorService<C> {
    /// Create a service over a catalog collaborator
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Nutrient vector and display name for one loggable item
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`](nosh_core::errors::EngineError) variants for
    /// invalid portions, unresolvable ids, or catalog failures.
    pub async fn snapshot(
        &self,
        user_id: Uuid,
        item: &LoggableItemRef,
    ) -> EngineResult<CalculatedNutrients> {
        NutrientCalculator::new(&self.catalog)
            .calculate(user_id, item)
            .await
    }
}
