// ABOUTME: Weight trend classification over recent body-weight samples
// ABOUTME: Kg-normalized consecutive deltas averaged and thresholded into up/down/stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Weight trend classification
//!
//! Looks at the most recent samples (newest first, up to seven), normalizes
//! them to kilograms, and averages the consecutive newer-minus-older deltas.
//! The average is per logged pair, not per elapsed day, so an irregular
//! logging cadence skews the result toward whichever period logged more
//! often.

use nosh_core::constants::weight;
use nosh_core::models::WeightSample;
use serde::{Deserialize, Serialize};

/// Direction of the recent weight trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrendDirection {
    /// Average change above +0.1 kg per pair
    Up,
    /// Average change below -0.1 kg per pair
    Down,
    /// Average change within the stable band
    Stable,
    /// Fewer than two samples; no classification possible
    NoTrend,
}

/// Classifies the direction of recent weight change
pub struct WeightTrendClassifier;

impl WeightTrendClassifier {
    /// Classify the trend over `samples`, ordered most recent first
    #[must_use]
    pub fn classify(samples: &[WeightSample]) -> WeightTrendDirection {
        let window = &samples[..samples.len().min(weight::MAX_TREND_SAMPLES)];
        if window.len() < weight::MIN_TREND_SAMPLES {
            return WeightTrendDirection::NoTrend;
        }

        let kg: Vec<f64> = window.iter().map(WeightSample::as_kg).collect();
        let pair_count = kg.len() - 1;
        let total_change: f64 = kg.windows(2).map(|pair| pair[0] - pair[1]).sum();
        let avg_change = total_change / pair_count as f64;

        if avg_change > weight::TREND_CHANGE_THRESHOLD_KG {
            WeightTrendDirection::Up
        } else if avg_change < -weight::TREND_CHANGE_THRESHOLD_KG {
            WeightTrendDirection::Down
        } else {
            WeightTrendDirection::Stable
        }
    }
}
