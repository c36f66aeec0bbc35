// ABOUTME: Daily rollup of logged entries and activity into gap-filled calendar buckets
// ABOUTME: Groups journal rows by date, sums snapshots, fills every day in range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Daily aggregation of journal rows
//!
//! Rolls a user's logged entries and activity records into one
//! [`DailyBucket`] per calendar day of the requested range. Every day in
//! `[start, end]` gets a bucket: days with no entries carry an all-zero
//! totals vector and an entry count of zero, so consumers never have to
//! special-case gaps.

use std::collections::HashMap;

use chrono::NaiveDate;
use nosh_core::models::{ActivityRecord, LoggedEntry, NutrientVector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One calendar day's aggregated journal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyBucket {
    /// Calendar day
    pub date: NaiveDate,
    /// Summed nutrient totals; fully numeric, zero where nothing was logged
    pub totals: NutrientVector,
    /// Number of logged entries on this day
    pub entry_count: usize,
    /// Calories burned through logged exercise on this day
    pub activity_calories: f64,
}

/// Aggregates journal rows into gap-filled daily buckets
pub struct DailyAggregator;

impl DailyAggregator {
    /// Roll up entries and activity into one bucket per day of `[start, end]`
    ///
    /// Output is ascending by date regardless of input order. A reversed
    /// range (`start > end`) yields an empty series: the fill loop simply
    /// performs zero iterations.
    #[must_use]
    pub fn aggregate(
        entries: &[LoggedEntry],
        activity: &[ActivityRecord],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<DailyBucket> {
        if start > end {
            debug!(%start, %end, "reversed date range, returning empty series");
            return Vec::new();
        }

        let mut by_date: HashMap<NaiveDate, Vec<&NutrientVector>> = HashMap::new();
        for entry in entries {
            if entry.date >= start && entry.date <= end {
                by_date.entry(entry.date).or_default().push(&entry.nutrients);
            }
        }

        let mut activity_by_date: HashMap<NaiveDate, f64> = HashMap::new();
        for record in activity {
            if record.date >= start && record.date <= end {
                *activity_by_date.entry(record.date).or_insert(0.0) += record.activity_calories;
            }
        }

        let mut buckets = Vec::new();
        let mut day = start;
        while day <= end {
            let vectors = by_date.get(&day);
            let totals = vectors.map_or_else(
                || NutrientVector::sum([]),
                |v| NutrientVector::sum(v.iter().copied()),
            );
            buckets.push(DailyBucket {
                date: day,
                totals,
                entry_count: vectors.map_or(0, Vec::len),
                activity_calories: activity_by_date.get(&day).copied().unwrap_or(0.0),
            });
            let Some(next) = day.succ_opt() else { break };
            day = next;
        }
        buckets
    }

    /// Resolve a "last N days" query to an inclusive date range ending today
    ///
    /// N calendar days including today: `last_n_days(today, 7)` covers
    /// `today - 6` through `today`. `n` of zero is treated as one day.
    #[must_use]
    pub fn last_n_days(today: NaiveDate, n: u32) -> (NaiveDate, NaiveDate) {
        let span = n.saturating_sub(1);
        let start = today - chrono::Duration::days(i64::from(span));
        (start, today)
    }
}
