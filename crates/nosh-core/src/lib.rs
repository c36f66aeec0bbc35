// ABOUTME: Core types and constants for the Nosh nutrition engine
// ABOUTME: Foundation crate with nutrient models, targets, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

#![deny(unsafe_code)]

//! # Nosh Core
//!
//! Foundation crate providing shared types for the Nosh nutrition engine.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with [`EngineError`] and [`EngineResult`]
//! - **constants**: Engine-wide constants organized by domain
//! - **models**: Nutrient registry/vectors, journal rows, nutrition targets

/// Unified error handling for the engine
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (nutrients, journal rows, targets)
pub mod models;

pub use errors::{EngineError, EngineResult};
pub use models::{
    registry, ActivityRecord, JournalEvent, LoggableItemRef, LoggedEntry, MealCategory,
    NutrientDef, NutrientGoal, NutrientKey, NutrientUnit, NutrientVector, Target, TargetDirection,
    WeightSample, WeightUnit,
};
