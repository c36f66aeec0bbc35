// ABOUTME: Journal models for logged food entries, activity, weight, and events
// ABOUTME: LoggedEntry snapshots, LoggableItemRef portions, WeightSample units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Journal row models supplied by the persistence collaborator
//!
//! A [`LoggedEntry`] carries the nutrient vector snapshotted when the entry
//! was created. Historical entries are never recomputed from current catalog
//! data; edits to a food after logging do not rewrite the journal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{portions, units};
use crate::errors::{EngineError, EngineResult};
use crate::models::nutrient::NutrientVector;

/// Meal slot of a logged entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal slot
    Other,
}

impl MealCategory {
    /// Parse meal category from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// Reference to exactly one loggable catalog item at a stated portion
///
/// Raw foods are portioned in grams against the catalog's per-100g vector;
/// custom foods and recipes are portioned in servings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoggableItemRef {
    /// Raw catalog food, portioned by weight
    Food {
        /// Catalog food id
        id: Uuid,
        /// Portion weight in grams
        grams: f64,
    },
    /// User-defined food, portioned by servings
    CustomFood {
        /// Custom food id
        id: Uuid,
        /// Number of servings
        servings: f64,
    },
    /// User recipe, portioned by servings
    Recipe {
        /// Recipe id
        id: Uuid,
        /// Number of servings
        servings: f64,
    },
}

impl LoggableItemRef {
    /// Validate the portion amount for this reference
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPortion`] when the amount is non-finite,
    /// below 0.1g for gram portions, or non-positive for serving portions.
    pub fn validate_portion(&self) -> EngineResult<()> {
        match *self {
            Self::Food { grams, .. } => {
                if !grams.is_finite() || grams < portions::MIN_PORTION_GRAMS {
                    return Err(EngineError::InvalidPortion {
                        reason: "gram portions must be at least 0.1g",
                    });
                }
            }
            Self::CustomFood { servings, .. } | Self::Recipe { servings, .. } => {
                if !servings.is_finite() || servings <= 0.0 {
                    return Err(EngineError::InvalidPortion {
                        reason: "serving portions must be positive",
                    });
                }
            }
        }
        Ok(())
    }
}

/// One journal row: a food logged on a calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggedEntry {
    /// Calendar day the entry belongs to
    pub date: NaiveDate,
    /// Meal slot
    pub meal: MealCategory,
    /// Nutrient vector snapshotted at log time
    pub nutrients: NutrientVector,
    /// Display reference to the logged source (food/custom food/recipe name)
    pub source_ref: String,
}

/// Logged activity calories for one calendar day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    /// Calendar day
    pub date: NaiveDate,
    /// Calories burned through logged exercise
    pub activity_calories: f64,
}

/// Unit a weight sample was recorded in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms
    Kg,
    /// Pounds
    Lb,
}

impl WeightUnit {
    /// Convert a value in this unit to kilograms
    #[must_use]
    pub fn to_kg(self, value: f64) -> f64 {
        match self {
            Self::Kg => value,
            Self::Lb => value * units::KG_PER_LB,
        }
    }

    /// Convert a kilogram value into this unit
    #[must_use]
    pub fn from_kg(self, kg: f64) -> f64 {
        match self {
            Self::Kg => kg,
            Self::Lb => kg / units::KG_PER_LB,
        }
    }
}

/// One body-weight measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightSample {
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Measured value, in `unit`
    pub value: f64,
    /// Unit the measurement was recorded in
    pub unit: WeightUnit,
}

impl WeightSample {
    /// Measured value normalized to kilograms
    #[must_use]
    pub fn as_kg(&self) -> f64 {
        self.unit.to_kg(self.value)
    }
}

/// A dated journal annotation shown on trend charts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEvent {
    /// Calendar day of the event
    pub date: NaiveDate,
    /// Short description ("started cut", "race day")
    pub description: String,
    /// Display color tag, passed through untouched
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_category_parse_is_lossy() {
        assert_eq!(MealCategory::from_str_lossy("Lunch"), MealCategory::Lunch);
        assert_eq!(MealCategory::from_str_lossy("brunch"), MealCategory::Other);
    }

    #[test]
    fn portion_validation_bounds() {
        let id = Uuid::new_v4();
        assert!(LoggableItemRef::Food { id, grams: 0.1 }
            .validate_portion()
            .is_ok());
        assert!(LoggableItemRef::Food { id, grams: 0.05 }
            .validate_portion()
            .is_err());
        assert!(LoggableItemRef::Recipe { id, servings: 0.0 }
            .validate_portion()
            .is_err());
        assert!(LoggableItemRef::CustomFood { id, servings: 1.5 }
            .validate_portion()
            .is_ok());
    }

    #[test]
    fn weight_unit_round_trip() {
        let lb = WeightUnit::Lb.from_kg(100.0);
        let back = WeightUnit::Lb.to_kg(lb);
        assert!((back - 100.0).abs() < 1e-9);
    }
}
