// ABOUTME: Domain constants for the Nosh nutrition engine grouped by concern
// ABOUTME: Unit conversion factors, trend thresholds, target bounds, portion limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Engine-wide constants organized by domain

/// Unit conversion factors
pub mod units {
    /// Kilograms per pound
    pub const KG_PER_LB: f64 = 0.453_592;

    /// Grams in the catalog's reference portion for raw foods
    pub const REFERENCE_PORTION_GRAMS: f64 = 100.0;
}

/// Portion validation bounds
pub mod portions {
    /// Smallest gram-based portion accepted for a raw food
    pub const MIN_PORTION_GRAMS: f64 = 0.1;
}

/// Calorie/nutrient target bounds
pub mod targets {
    /// Lowest accepted basal calorie target
    pub const MIN_BASAL_CALORIES: u32 = 500;

    /// Highest accepted basal calorie target
    pub const MAX_BASAL_CALORIES: u32 = 10_000;

    /// Progress percentage at which a min-direction target is met
    pub const MET_PERCENTAGE: f64 = 100.0;

    /// Lower bound of the amber presentation band for min-direction targets
    pub const MIN_AMBER_PERCENTAGE: f64 = 75.0;

    /// Upper bound of the green presentation band for max-direction targets
    pub const MAX_GREEN_PERCENTAGE: f64 = 75.0;
}

/// Longitudinal trend analysis thresholds
pub mod trend {
    /// Daily point count above which a range switches to weekly buckets
    pub const WEEKLY_BUCKET_THRESHOLD_DAYS: usize = 60;

    /// Calendar anchor for the all-time range: (year, month, day)
    pub const ALL_TIME_EPOCH: (i32, u32, u32) = (2000, 1, 1);
}

/// Weight trend classification parameters
pub mod weight {
    /// Maximum number of recent samples considered
    pub const MAX_TREND_SAMPLES: usize = 7;

    /// Minimum number of samples required to classify a trend
    pub const MIN_TREND_SAMPLES: usize = 2;

    /// Average per-pair change in kg beyond which the trend is up/down
    pub const TREND_CHANGE_THRESHOLD_KG: f64 = 0.1;
}
