// ABOUTME: Core data models for the Nosh nutrition engine
// ABOUTME: Nutrient vectors, journal rows, and nutrition targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Core data models

/// Journal rows: logged entries, activity, weight samples, events
pub mod log;

/// Nutrient keys, registry, and vector algebra
pub mod nutrient;

/// Nutrition targets with directional goals
pub mod target;

pub use log::{
    ActivityRecord, JournalEvent, LoggableItemRef, LoggedEntry, MealCategory, WeightSample,
    WeightUnit,
};
pub use nutrient::{registry, NutrientDef, NutrientKey, NutrientUnit, NutrientVector};
pub use target::{NutrientGoal, Target, TargetDirection};
