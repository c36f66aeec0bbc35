// ABOUTME: User nutrition targets with directional per-nutrient goals
// ABOUTME: Basal calorie budget plus min/max goals, opaque blob (de)serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Nutrition targets
//!
//! The persistence collaborator stores targets as an opaque JSON blob.
//! Decoding happens only at that boundary: a malformed blob degrades to "no
//! target configured" instead of failing the enclosing computation, so a
//! corrupt row can never block daily or trend queries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::targets;
use crate::errors::{EngineError, EngineResult};
use crate::models::nutrient::NutrientKey;

/// Whether a nutrient goal is a floor to reach or a ceiling to stay under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TargetDirection {
    /// Floor: progress is met at or above the goal (protein, fiber)
    Min,
    /// Ceiling: progress is exceeded above the goal (sodium, added sugar)
    Max,
}

/// One per-nutrient goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientGoal {
    /// Goal amount in the nutrient's registry unit
    pub value: f64,
    /// Goal direction
    pub direction: TargetDirection,
}

/// A user's configured nutrition target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Target {
    /// Basal daily calorie budget, before activity adjustment
    pub basal_calories: u32,
    /// Optional per-nutrient goals
    pub goals: HashMap<NutrientKey, NutrientGoal>,
}

impl Target {
    /// Build a validated target
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTarget`] when validation fails; see
    /// [`Self::validate`].
    pub fn new(
        basal_calories: u32,
        goals: HashMap<NutrientKey, NutrientGoal>,
    ) -> EngineResult<Self> {
        let target = Self {
            basal_calories,
            goals,
        };
        target.validate()?;
        Ok(target)
    }

    /// Validate basal bounds and goal values
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTarget`] when the basal budget is
    /// outside 500..=10000 kcal or a goal value is negative or non-finite.
    pub fn validate(&self) -> EngineResult<()> {
        if self.basal_calories < targets::MIN_BASAL_CALORIES
            || self.basal_calories > targets::MAX_BASAL_CALORIES
        {
            return Err(EngineError::InvalidTarget {
                reason: format!(
                    "basal calories {} outside {}..={}",
                    self.basal_calories,
                    targets::MIN_BASAL_CALORIES,
                    targets::MAX_BASAL_CALORIES
                ),
            });
        }
        for (key, goal) in &self.goals {
            if !goal.value.is_finite() || goal.value < 0.0 {
                return Err(EngineError::InvalidTarget {
                    reason: format!("goal for {} must be non-negative", key.as_str()),
                });
            }
        }
        Ok(())
    }

    /// Goal for one nutrient, if configured
    #[must_use]
    pub fn goal(&self, key: NutrientKey) -> Option<&NutrientGoal> {
        self.goals.get(&key)
    }

    /// Decode a persisted target blob, degrading to `None` on malformed data
    #[must_use]
    pub fn from_blob(blob: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(blob) {
            Ok(target) => match target.validate() {
                Ok(()) => Some(target),
                Err(err) => {
                    warn!("persisted target failed validation, ignoring: {err}");
                    None
                }
            },
            Err(err) => {
                warn!("persisted target blob is malformed, ignoring: {err}");
                None
            }
        }
    }

    /// Encode this target for persistence
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTarget`] when serialization fails.
    pub fn to_blob(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(|err| EngineError::InvalidTarget {
            reason: format!("serialization failed: {err}"),
        })
    }
}
