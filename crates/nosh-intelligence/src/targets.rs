// ABOUTME: Target evaluation with dynamic calorie budgets and directional progress status
// ABOUTME: Computes progress percentage, met/under/over status, and presentation bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Target evaluation
//!
//! The daily calorie allowance is dynamic: logged exercise grows the budget
//! (`basal + activity`). Per-nutrient progress is direction-aware: a min
//! goal surpassed is still `Met`, never `Over`.

use nosh_core::constants::targets;
use nosh_core::models::TargetDirection;
use serde::{Deserialize, Serialize};

/// Progress status of a value against a directional target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    /// A min-direction target reached or surpassed
    Met,
    /// Below the target
    Under,
    /// A max-direction target exceeded
    Over,
}

/// Presentation band driving user-visible status color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// On track
    Green,
    /// Approaching the boundary
    Amber,
    /// Off track
    Red,
}

/// Result of evaluating one value against one target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressEvaluation {
    /// Percentage of target reached; 0 when the target is not positive
    pub percentage: f64,
    /// Direction-aware status
    pub status: ProgressStatus,
    /// Presentation band
    pub band: ProgressBand,
}

/// Evaluates progress against directional targets
pub struct TargetEvaluator;

impl TargetEvaluator {
    /// Daily calorie allowance: basal budget plus logged activity calories
    #[must_use]
    pub fn calorie_budget(basal_calories: u32, activity_calories: f64) -> f64 {
        f64::from(basal_calories) + activity_calories
    }

    /// Evaluate `current` against `target` in the given direction
    ///
    /// A non-positive target never divides: the percentage is 0.
    #[must_use]
    pub fn evaluate_progress(
        current: f64,
        target: f64,
        direction: TargetDirection,
    ) -> ProgressEvaluation {
        let percentage = if target > 0.0 {
            current / target * 100.0
        } else {
            0.0
        };

        let status = match direction {
            TargetDirection::Min => {
                if percentage >= targets::MET_PERCENTAGE {
                    ProgressStatus::Met
                } else {
                    ProgressStatus::Under
                }
            }
            TargetDirection::Max => {
                if percentage <= targets::MET_PERCENTAGE {
                    ProgressStatus::Under
                } else {
                    ProgressStatus::Over
                }
            }
        };

        let band = match direction {
            TargetDirection::Min => {
                if percentage >= targets::MET_PERCENTAGE {
                    ProgressBand::Green
                } else if percentage >= targets::MIN_AMBER_PERCENTAGE {
                    ProgressBand::Amber
                } else {
                    ProgressBand::Red
                }
            }
            TargetDirection::Max => {
                if percentage <= targets::MAX_GREEN_PERCENTAGE {
                    ProgressBand::Green
                } else if percentage <= targets::MET_PERCENTAGE {
                    ProgressBand::Amber
                } else {
                    ProgressBand::Red
                }
            }
        };

        ProgressEvaluation {
            percentage,
            status,
            band,
        }
    }
}
