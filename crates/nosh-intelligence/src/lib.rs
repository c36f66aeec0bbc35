// ABOUTME: Nutrient aggregation and trend analysis engine for the Nosh platform
// ABOUTME: Daily rollups, target evaluation, longitudinal trends, weight classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

#![deny(unsafe_code)]

//! # Nosh Intelligence
//!
//! Pure, request-scoped computation over journal rows supplied by
//! collaborators. Nothing here performs I/O, caches between requests, or
//! mutates its inputs; identical inputs always recompute to identical
//! outputs.
//!
//! ## Modules
//!
//! - **calculator**: nutrient vectors for loggable items at a stated portion
//! - **daily**: gap-filled daily rollups of logged entries and activity
//! - **targets**: dynamic calorie budgets and directional progress status
//! - **trend**: longitudinal series with adaptive weekly bucketing
//! - **weight**: weight trend classification over recent samples

/// Nutrient calculation for loggable items
pub mod calculator;

/// Daily aggregation into gap-filled calendar buckets
pub mod daily;

/// Target evaluation and progress banding
pub mod targets;

/// Longitudinal trend series construction
pub mod trend;

/// Weight trend classification
pub mod weight;

pub use calculator::{
    CalculatedNutrients, CatalogCustomFood, CatalogFood, CatalogRecipe, FoodCatalog,
    NutrientCalculator,
};
pub use daily::{DailyAggregator, DailyBucket};
pub use targets::{ProgressBand, ProgressEvaluation, ProgressStatus, TargetEvaluator};
pub use trend::{
    fill_segments, ActivityPoint, LongitudinalTrend, TimeRange, TrendAggregator, TrendPoint,
    TrendRequest, WeightPoint,
};
pub use weight::{WeightTrendClassifier, WeightTrendDirection};
