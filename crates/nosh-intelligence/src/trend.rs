// ABOUTME: Longitudinal trend series over nutrient, weight, activity, and event history
// ABOUTME: Named time ranges, adaptive weekly bucketing, fill segments, unit re-expression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Longitudinal trend analysis
//!
//! Builds a presentation-ready series for one nutrient over a named time
//! range, merging the gap-filled daily series with sparse weight, activity,
//! and event records. Ranges longer than 60 daily points aggregate into
//! calendar-week buckets keyed by each week's Sunday. Each point carries a
//! fill-segment pair so the chart can stack "over target" and "under
//! target" areas without double-counting.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate};
use nosh_core::constants::trend;
use nosh_core::models::{
    JournalEvent, NutrientKey, Target, TargetDirection, WeightSample, WeightUnit,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::daily::DailyBucket;
use crate::targets::TargetEvaluator;

/// Named time range resolved against "today"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeRange {
    /// Last 7 days including today
    #[serde(rename = "week")]
    Week,
    /// Last 30 days including today
    #[serde(rename = "month")]
    Month,
    /// Last 3 calendar months
    #[serde(rename = "3months")]
    ThreeMonths,
    /// Last 6 calendar months
    #[serde(rename = "6months")]
    SixMonths,
    /// January 1 of the current year through today
    #[serde(rename = "year")]
    Year,
    /// The previous calendar year, fixed (not "through today")
    #[serde(rename = "lastyear")]
    LastYear,
    /// Everything since the tracking epoch
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    /// Wire identifier for this range
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::Year => "year",
            Self::LastYear => "lastyear",
            Self::All => "all",
        }
    }

    /// Parse a wire identifier
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "3months" => Some(Self::ThreeMonths),
            "6months" => Some(Self::SixMonths),
            "year" => Some(Self::Year),
            "lastyear" => Some(Self::LastYear),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Resolve this range to an inclusive `[start, end]` pair
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Week => (today - Duration::days(6), today),
            Self::Month => (today - Duration::days(29), today),
            Self::ThreeMonths => (
                today.checked_sub_months(Months::new(3)).unwrap_or(today),
                today,
            ),
            Self::SixMonths => (
                today.checked_sub_months(Months::new(6)).unwrap_or(today),
                today,
            ),
            Self::Year => (
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
                today,
            ),
            Self::LastYear => {
                let year = today.year() - 1;
                (
                    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today),
                    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today),
                )
            }
            Self::All => {
                let (y, m, d) = trend::ALL_TIME_EPOCH;
                (NaiveDate::from_ymd_opt(y, m, d).unwrap_or(today), today)
            }
        }
    }
}

/// One point of the nutrient series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// Calendar day, or the week's Sunday in weekly mode
    pub date: NaiveDate,
    /// Nutrient value; null where nothing was logged
    pub value: Option<f64>,
    /// Target for this point; dynamic for calories, static otherwise
    pub target: Option<f64>,
    /// Base of the stacked fill area
    pub fill_base: Option<f64>,
    /// Portion of the value above the target
    pub over_fill: Option<f64>,
    /// Headroom left below the target
    pub under_fill: Option<f64>,
}

/// One point of the weight series, re-expressed in the display unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightPoint {
    /// Calendar day, or the week's Sunday in weekly mode
    pub date: NaiveDate,
    /// Weight in the series display unit
    pub value: f64,
    /// Display unit shared by the whole series
    pub unit: WeightUnit,
}

/// One point of the activity series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityPoint {
    /// Calendar day, or the week's Sunday in weekly mode
    pub date: NaiveDate,
    /// Activity calories; a daily value, or the bucket mean in weekly mode
    pub activity_calories: f64,
}

/// Inputs for one trend computation
#[derive(Debug, Clone, Copy)]
pub struct TrendRequest<'a> {
    /// Nutrient the series projects
    pub nutrient: NutrientKey,
    /// Named range the daily series was resolved from
    pub time_range: TimeRange,
    /// Resolved range start
    pub start: NaiveDate,
    /// Resolved range end
    pub end: NaiveDate,
    /// Gap-filled daily series over `[start, end]`
    pub daily: &'a [DailyBucket],
    /// Weight samples within the range, any order
    pub weights: &'a [WeightSample],
    /// Journal events within the range, any order
    pub events: &'a [JournalEvent],
    /// The user's configured target, if any
    pub target: Option<&'a Target>,
}

/// Presentation-ready longitudinal series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LongitudinalTrend {
    /// Resolved range start
    pub start_date: NaiveDate,
    /// Resolved range end
    pub end_date: NaiveDate,
    /// Named range the series covers
    pub time_range: TimeRange,
    /// Nutrient series with fill segments
    pub nutrient_data: Vec<TrendPoint>,
    /// Weight series, unit-consistent per request
    pub weight_data: Vec<WeightPoint>,
    /// Activity series
    pub activity_data: Vec<ActivityPoint>,
    /// Event annotations, ascending by date
    pub event_data: Vec<JournalEvent>,
    /// Resolved static target value for the nutrient
    pub nutrient_target: Option<f64>,
    /// Direction of the nutrient target, for direction-aware rendering
    pub nutrient_target_direction: Option<TargetDirection>,
}

/// Builds longitudinal trend series with adaptive bucketing
pub struct TrendAggregator;

impl TrendAggregator {
    /// Build the trend series for one request
    #[must_use]
    pub fn build(request: &TrendRequest<'_>) -> LongitudinalTrend {
        let display_unit = display_unit(request.weights);
        let weights = weights_by_date(request.weights, request.start, request.end);

        let weekly = request.daily.len() > trend::WEEKLY_BUCKET_THRESHOLD_DAYS;
        debug!(
            range = request.time_range.as_str(),
            days = request.daily.len(),
            weekly,
            "building trend series"
        );

        let (nutrient_data, weight_data, activity_data) = if weekly {
            weekly_series(request, &weights, display_unit)
        } else {
            daily_series(request, &weights, display_unit)
        };

        let mut event_data: Vec<JournalEvent> = request
            .events
            .iter()
            .filter(|e| e.date >= request.start && e.date <= request.end)
            .cloned()
            .collect();
        event_data.sort_by_key(|e| e.date);

        let (nutrient_target, nutrient_target_direction) =
            resolved_target(request.nutrient, request.target);

        LongitudinalTrend {
            start_date: request.start,
            end_date: request.end,
            time_range: request.time_range,
            nutrient_data,
            weight_data,
            activity_data,
            event_data,
            nutrient_target,
            nutrient_target_direction,
        }
    }
}

/// Fill segments for a stacked over/under area chart
///
/// Above target: the base is the target and the overshoot stacks on top.
/// At or below: the base is the actual value and the remaining headroom
/// stacks on top. Either side missing leaves all three null.
#[must_use]
pub fn fill_segments(
    actual: Option<f64>,
    target: Option<f64>,
) -> (Option<f64>, Option<f64>, Option<f64>) {
    match (actual, target) {
        (Some(a), Some(t)) => {
            if a > t {
                (Some(t), Some(a - t), Some(0.0))
            } else {
                (Some(a), Some(0.0), Some(t - a))
            }
        }
        _ => (None, None, None),
    }
}

/// Unit of the most recent sample; the whole displayed series uses it
fn display_unit(weights: &[WeightSample]) -> WeightUnit {
    weights
        .iter()
        .max_by_key(|s| s.date)
        .map_or(WeightUnit::Kg, |s| s.unit)
}

/// Latest in-range sample per day, normalized to kilograms
fn weights_by_date(
    weights: &[WeightSample],
    start: NaiveDate,
    end: NaiveDate,
) -> BTreeMap<NaiveDate, f64> {
    let mut by_date = BTreeMap::new();
    for sample in weights {
        if sample.date >= start && sample.date <= end {
            by_date.insert(sample.date, sample.as_kg());
        }
    }
    by_date
}

/// Per-point target: dynamic calorie budget, or the static configured goal
fn point_target(nutrient: NutrientKey, target: Option<&Target>, activity: f64) -> Option<f64> {
    let target = target?;
    if nutrient == NutrientKey::Calories {
        Some(TargetEvaluator::calorie_budget(
            target.basal_calories,
            activity,
        ))
    } else {
        target.goal(nutrient).map(|g| g.value)
    }
}

/// Static target value and direction exposed alongside the series
fn resolved_target(
    nutrient: NutrientKey,
    target: Option<&Target>,
) -> (Option<f64>, Option<TargetDirection>) {
    let Some(target) = target else {
        return (None, None);
    };
    if nutrient == NutrientKey::Calories {
        // The calorie budget is a ceiling unless the user configured otherwise
        let direction = target
            .goal(NutrientKey::Calories)
            .map_or(TargetDirection::Max, |g| g.direction);
        (Some(f64::from(target.basal_calories)), Some(direction))
    } else {
        match target.goal(nutrient) {
            Some(goal) => (Some(goal.value), Some(goal.direction)),
            None => (None, None),
        }
    }
}

/// Nutrient value of one daily bucket; days with no entries are "no data"
fn project_value(bucket: &DailyBucket, nutrient: NutrientKey) -> Option<f64> {
    if bucket.entry_count == 0 {
        None
    } else {
        bucket.totals.get(nutrient)
    }
}

fn trend_point(date: NaiveDate, value: Option<f64>, target: Option<f64>) -> TrendPoint {
    let (fill_base, over_fill, under_fill) = fill_segments(value, target);
    TrendPoint {
        date,
        value,
        target,
        fill_base,
        over_fill,
        under_fill,
    }
}

type SeriesTriple = (Vec<TrendPoint>, Vec<WeightPoint>, Vec<ActivityPoint>);

fn daily_series(
    request: &TrendRequest<'_>,
    weights: &BTreeMap<NaiveDate, f64>,
    display_unit: WeightUnit,
) -> SeriesTriple {
    let nutrient_data = request
        .daily
        .iter()
        .map(|bucket| {
            let value = project_value(bucket, request.nutrient);
            let target = point_target(request.nutrient, request.target, bucket.activity_calories);
            trend_point(bucket.date, value, target)
        })
        .collect();

    let weight_data = weights
        .iter()
        .map(|(&date, &kg)| WeightPoint {
            date,
            value: display_unit.from_kg(kg),
            unit: display_unit,
        })
        .collect();

    let activity_data = request
        .daily
        .iter()
        .map(|bucket| ActivityPoint {
            date: bucket.date,
            activity_calories: bucket.activity_calories,
        })
        .collect();

    (nutrient_data, weight_data, activity_data)
}

/// The Sunday starting the calendar week containing `date`
fn week_anchor(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

fn weekly_series(
    request: &TrendRequest<'_>,
    weights: &BTreeMap<NaiveDate, f64>,
    display_unit: WeightUnit,
) -> SeriesTriple {
    let mut by_week: BTreeMap<NaiveDate, Vec<&DailyBucket>> = BTreeMap::new();
    for bucket in request.daily {
        by_week.entry(week_anchor(bucket.date)).or_default().push(bucket);
    }

    let mut nutrient_data = Vec::with_capacity(by_week.len());
    let mut weight_data = Vec::with_capacity(by_week.len());
    let mut activity_data = Vec::with_capacity(by_week.len());
    let mut carried_weight_kg: Option<f64> = None;

    for (&sunday, buckets) in &by_week {
        let values: Vec<f64> = buckets
            .iter()
            .filter_map(|b| project_value(b, request.nutrient))
            .collect();
        let value = if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        };

        let mean_activity = buckets
            .iter()
            .map(|b| b.activity_calories)
            .sum::<f64>()
            / buckets.len() as f64;

        // Blend the week's mean activity into the dynamic calorie budget
        let target = point_target(request.nutrient, request.target, mean_activity);
        nutrient_data.push(trend_point(sunday, value, target));

        activity_data.push(ActivityPoint {
            date: sunday,
            activity_calories: mean_activity,
        });

        // Most recent sample in the bucket wins; weeks without a sample
        // carry the previous weight forward instead of averaging
        let week_end = sunday + Duration::days(6);
        let latest_in_week = weights
            .range(sunday..=week_end)
            .next_back()
            .map(|(_, &kg)| kg);
        if let Some(kg) = latest_in_week {
            carried_weight_kg = Some(kg);
        }
        if let Some(kg) = carried_weight_kg {
            weight_data.push(WeightPoint {
                date: sunday,
                value: display_unit.from_kg(kg),
                unit: display_unit,
            });
        }
    }

    (nutrient_data, weight_data, activity_data)
}
