// ABOUTME: Nosh nutrition engine facade consumed by the application's HTTP layer
// ABOUTME: Collaborator traits, orchestration services, and logging bootstrap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

#![deny(unsafe_code)]

//! # Nosh Engine
//!
//! Nutrient aggregation and trend analysis for the Nosh tracker. The engine
//! is a pure, request-scoped transformation over rows supplied by two
//! collaborators: a [`providers::NutritionStore`] (journal persistence) and
//! a [`providers::FoodCatalog`] (food/recipe catalog). It performs no I/O of
//! its own and persists nothing it computes.
//!
//! The heavy lifting lives in the workspace crates:
//!
//! - [`nosh_core`]: nutrient registry, vectors, targets, errors
//! - [`nosh_intelligence`]: daily rollups, target evaluation, trend series,
//!   weight classification
//!
//! This crate wires them to the collaborators and exposes the result shapes
//! the presentation layer renders.

/// Structured logging bootstrap
pub mod logging;

/// Collaborator traits (persistence store, food catalog)
pub mod providers;

/// Request-scoped orchestration services
pub mod services;

pub use nosh_core::{
    errors::{EngineError, EngineResult},
    models::{
        registry, ActivityRecord, JournalEvent, LoggableItemRef, LoggedEntry, MealCategory,
        NutrientDef, NutrientGoal, NutrientKey, NutrientUnit, NutrientVector, Target,
        TargetDirection, WeightSample, WeightUnit,
    },
};
pub use nosh_intelligence::{
    calculator::{CalculatedNutrients, CatalogCustomFood, CatalogFood, CatalogRecipe},
    daily::{DailyAggregator, DailyBucket},
    targets::{ProgressBand, ProgressEvaluation, ProgressStatus, TargetEvaluator},
    trend::{ActivityPoint, LongitudinalTrend, TimeRange, TrendPoint, WeightPoint},
    weight::{WeightTrendClassifier, WeightTrendDirection},
};
pub use providers::{FoodCatalog, NutritionStore};
pub use services::{CalculatorService, DailyStatsResult, LongitudinalTrendResult, NutritionService};
