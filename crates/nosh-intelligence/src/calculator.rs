// ABOUTME: Nutrient calculation for loggable items at a stated portion
// ABOUTME: FoodCatalog trait seam plus per-100g, per-serving, and recipe-total rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Nutrient calculation for one loggable item
//!
//! Produces the [`NutrientVector`] captured onto a journal entry at log
//! time. The three source kinds scale differently: raw foods by grams
//! against the catalog's per-100g vector, custom foods by servings against
//! their per-serving vector, and recipes return the stored grand total
//! (see [`NutrientCalculator::calculate`] for the recipe caveat).

use async_trait::async_trait;
use nosh_core::constants::units;
use nosh_core::errors::{EngineError, EngineResult};
use nosh_core::models::{LoggableItemRef, NutrientVector};
use tracing::debug;
use uuid::Uuid;

/// Raw catalog food: nutrients per 100 grams
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFood {
    /// Display name
    pub name: String,
    /// Nutrient vector per 100g
    pub per_100g: NutrientVector,
}

/// User-defined food: nutrients per serving
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCustomFood {
    /// Display name
    pub name: String,
    /// Nutrient vector per serving
    pub per_serving: NutrientVector,
}

/// User recipe: nutrient grand total across all servings
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecipe {
    /// Display name
    pub name: String,
    /// Grand total across every serving the recipe yields
    pub total: NutrientVector,
    /// Number of servings the recipe yields
    pub servings: f64,
}

impl CatalogRecipe {
    /// Calories per serving for display, guarded against non-positive yields
    #[must_use]
    pub fn calories_per_serving(&self) -> f64 {
        if self.servings <= 0.0 {
            return 0.0;
        }
        self.total.calories.unwrap_or(0.0) / self.servings
    }
}

/// Food-catalog collaborator consumed by the calculator
///
/// Implementations resolve ids against the current catalog snapshot.
/// `None` means the id does not exist or is not visible to the requesting
/// user (custom foods and recipes are per-user). Lookup failures surface as
/// [`EngineError::Storage`](nosh_core::errors::EngineError::Storage).
#[async_trait]
pub trait FoodCatalog: Send + Sync {
    /// Per-100g vector for a raw catalog food
    ///
    /// # Errors
    ///
    /// Returns a storage error when the catalog cannot be read.
    async fn per_100g(&self, food_id: Uuid) -> EngineResult<Option<CatalogFood>>;

    /// Per-serving vector for one of the user's custom foods
    ///
    /// # Errors
    ///
    /// Returns a storage error when the catalog cannot be read.
    async fn per_serving(
        &self,
        custom_food_id: Uuid,
        user_id: Uuid,
    ) -> EngineResult<Option<CatalogCustomFood>>;

    /// Grand-total vector and serving count for one of the user's recipes
    ///
    /// # Errors
    ///
    /// Returns a storage error when the catalog cannot be read.
    async fn recipe_total(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> EngineResult<Option<CatalogRecipe>>;
}

/// Calculated nutrients for one loggable item, ready to snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedNutrients {
    /// Display name of the source item
    pub name: String,
    /// Nutrient vector at the stated portion
    pub nutrients: NutrientVector,
}

/// Computes the nutrient vector for a loggable item at a stated portion
pub struct NutrientCalculator<'a, C: FoodCatalog> {
    catalog: &'a C,
}

impl<'a, C: FoodCatalog> NutrientCalculator<'a, C> {
    /// Create a calculator over a catalog snapshot
    #[must_use]
    pub const fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Calculate the nutrient vector for `item` on behalf of `user_id`
    ///
    /// An unknown or foreign id aborts with [`EngineError::NotFound`]; no
    /// partial vector is ever returned.
    ///
    /// Recipes return the stored grand-total vector as-is, unscaled by
    /// either the recipe's serving yield or the portion being logged.
    /// Downstream display code divides by the yield where it needs
    /// per-serving figures; changing this here would double-scale those
    /// paths.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPortion`] for an out-of-range portion,
    /// [`EngineError::NotFound`] for an unresolvable id, or a storage error
    /// propagated from the catalog.
    pub async fn calculate(
        &self,
        user_id: Uuid,
        item: &LoggableItemRef,
    ) -> EngineResult<CalculatedNutrients> {
        item.validate_portion()?;
        match *item {
            LoggableItemRef::Food { id, grams } => {
                let food = self
                    .catalog
                    .per_100g(id)
                    .await?
                    .ok_or_else(|| EngineError::not_found("food", id.to_string()))?;
                let nutrients = food.per_100g.scale(grams / units::REFERENCE_PORTION_GRAMS)?;
                debug!(food = %food.name, grams, "calculated raw food nutrients");
                Ok(CalculatedNutrients {
                    name: food.name,
                    nutrients,
                })
            }
            LoggableItemRef::CustomFood { id, servings } => {
                let food = self
                    .catalog
                    .per_serving(id, user_id)
                    .await?
                    .ok_or_else(|| EngineError::not_found("custom food", id.to_string()))?;
                let nutrients = food.per_serving.scale(servings)?;
                Ok(CalculatedNutrients {
                    name: food.name,
                    nutrients,
                })
            }
            LoggableItemRef::Recipe { id, .. } => {
                let recipe = self
                    .catalog
                    .recipe_total(id, user_id)
                    .await?
                    .ok_or_else(|| EngineError::not_found("recipe", id.to_string()))?;
                Ok(CalculatedNutrients {
                    name: recipe.name,
                    nutrients: recipe.total,
                })
            }
        }
    }
}
