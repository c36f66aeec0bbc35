// ABOUTME: Shared test fixtures for engine integration tests
// ABOUTME: In-memory store/catalog collaborators and journal row constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
#![allow(missing_docs)]

//! Shared test fixtures for `nosh_engine` integration tests

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use nosh_engine::providers::NutritionStore;
use nosh_engine::{
    ActivityRecord, CatalogCustomFood, CatalogFood, CatalogRecipe, EngineResult, FoodCatalog,
    JournalEvent, LoggedEntry, MealCategory, NutrientKey, NutrientVector, WeightSample, WeightUnit,
};
use uuid::Uuid;

/// Parse a `YYYY-MM-DD` literal
pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date literal")
}

/// Vector with just calories set
pub fn calories_vector(calories: f64) -> NutrientVector {
    NutrientVector::empty().with(NutrientKey::Calories, calories)
}

/// Entry with a calories-only snapshot
pub fn entry(day: &str, calories: f64) -> LoggedEntry {
    LoggedEntry {
        date: date(day),
        meal: MealCategory::Lunch,
        nutrients: calories_vector(calories),
        source_ref: "fixture food".to_owned(),
    }
}

pub fn activity(day: &str, activity_calories: f64) -> ActivityRecord {
    ActivityRecord {
        date: date(day),
        activity_calories,
    }
}

pub fn weight(day: &str, value: f64, unit: WeightUnit) -> WeightSample {
    WeightSample {
        date: date(day),
        value,
        unit,
    }
}

/// In-memory `NutritionStore` backed by plain vectors
#[derive(Default)]
pub struct InMemoryStore {
    pub entries: Vec<LoggedEntry>,
    pub activity: Vec<ActivityRecord>,
    pub weights: Vec<WeightSample>,
    pub events: Vec<JournalEvent>,
    pub target_blob: Option<String>,
}

#[async_trait]
impl NutritionStore for InMemoryStore {
    async fn fetch_logged_entries(
        &self,
        _user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<LoggedEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect())
    }

    async fn fetch_activity(
        &self,
        _user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ActivityRecord>> {
        Ok(self
            .activity
            .iter()
            .filter(|a| a.date >= start && a.date <= end)
            .copied()
            .collect())
    }

    async fn fetch_weight_samples(
        &self,
        _user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<WeightSample>> {
        Ok(self
            .weights
            .iter()
            .filter(|w| w.date >= start && w.date <= end)
            .copied()
            .collect())
    }

    async fn fetch_events(
        &self,
        _user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<JournalEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect())
    }

    async fn fetch_target(&self, _user_id: Uuid) -> EngineResult<Option<String>> {
        Ok(self.target_blob.clone())
    }
}

/// In-memory `FoodCatalog` backed by hash maps
#[derive(Default)]
pub struct InMemoryCatalog {
    pub foods: HashMap<Uuid, CatalogFood>,
    pub custom: HashMap<(Uuid, Uuid), CatalogCustomFood>,
    pub recipes: HashMap<(Uuid, Uuid), CatalogRecipe>,
}

#[async_trait]
impl FoodCatalog for InMemoryCatalog {
    async fn per_100g(&self, food_id: Uuid) -> EngineResult<Option<CatalogFood>> {
        Ok(self.foods.get(&food_id).cloned())
    }

    async fn per_serving(
        &self,
        custom_food_id: Uuid,
        user_id: Uuid,
    ) -> EngineResult<Option<CatalogCustomFood>> {
        Ok(self.custom.get(&(custom_food_id, user_id)).cloned())
    }

    async fn recipe_total(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> EngineResult<Option<CatalogRecipe>> {
        Ok(self.recipes.get(&(recipe_id, user_id)).cloned())
    }
}
