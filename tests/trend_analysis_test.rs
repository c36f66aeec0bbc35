// ABOUTME: Integration tests for longitudinal trend series through the service layer
// ABOUTME: Range resolution, adaptive bucketing, fill segments, dynamic calorie budgets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashMap;

use common::{activity, date, entry, weight, InMemoryStore};
use nosh_engine::{
    NutrientGoal, NutrientKey, NutritionService, Target, TargetDirection, TimeRange, WeightUnit,
};
use uuid::Uuid;

fn target_blob(basal: u32, goals: HashMap<NutrientKey, NutrientGoal>) -> String {
    Target::new(basal, goals).unwrap().to_blob().unwrap()
}

#[tokio::test]
async fn week_range_stays_daily_with_dynamic_calorie_budget() {
    let store = InMemoryStore {
        entries: vec![entry("2024-06-14", 2200.0), entry("2024-06-15", 1800.0)],
        activity: vec![activity("2024-06-15", 500.0)],
        target_blob: Some(target_blob(2000, HashMap::new())),
        ..InMemoryStore::default()
    };
    let service = NutritionService::new(store);
    let result = service
        .trend_at(
            Uuid::new_v4(),
            NutrientKey::Calories,
            TimeRange::Week,
            date("2024-06-15"),
        )
        .await
        .unwrap();

    assert_eq!(result.start_date, date("2024-06-09"));
    assert_eq!(result.end_date, date("2024-06-15"));
    assert_eq!(result.nutrient_data.len(), 7);

    // 2024-06-14: 2200 against a flat 2000 budget
    let over_day = &result.nutrient_data[5];
    assert_eq!(over_day.value, Some(2200.0));
    assert_eq!(over_day.target, Some(2000.0));
    assert_eq!(over_day.fill_base, Some(2000.0));
    assert_eq!(over_day.over_fill, Some(200.0));
    assert_eq!(over_day.under_fill, Some(0.0));

    // 2024-06-15: 1800 against 2000 + 500 activity
    let under_day = &result.nutrient_data[6];
    assert_eq!(under_day.target, Some(2500.0));
    assert_eq!(under_day.fill_base, Some(1800.0));
    assert_eq!(under_day.over_fill, Some(0.0));
    assert_eq!(under_day.under_fill, Some(700.0));

    // Days without entries have a null value and null fills
    assert_eq!(result.nutrient_data[0].value, None);
    assert_eq!(result.nutrient_data[0].fill_base, None);
}

#[tokio::test]
async fn last_year_is_a_fixed_window() {
    let service = NutritionService::new(InMemoryStore::default());
    let result = service
        .trend_at(
            Uuid::new_v4(),
            NutrientKey::Calories,
            TimeRange::LastYear,
            date("2024-06-15"),
        )
        .await
        .unwrap();
    assert_eq!(result.start_date, date("2023-01-01"));
    assert_eq!(result.end_date, date("2023-12-31"));
    // A full year switches to weekly buckets
    assert!(result.nutrient_data.len() < 60);
}

#[tokio::test]
async fn sixty_day_range_daily_sixty_one_weekly() {
    let service = NutritionService::new(InMemoryStore::default());
    let user = Uuid::new_v4();

    let daily = service
        .trend_at(user, NutrientKey::Calories, TimeRange::Month, date("2024-06-15"))
        .await
        .unwrap();
    assert_eq!(daily.nutrient_data.len(), 30);

    let weekly = service
        .trend_at(
            user,
            NutrientKey::Calories,
            TimeRange::ThreeMonths,
            date("2024-06-15"),
        )
        .await
        .unwrap();
    // 3 calendar months back spans well over 60 days
    assert!(weekly.nutrient_data.len() < 30);
}

#[tokio::test]
async fn non_calorie_target_ignores_activity() {
    let mut goals = HashMap::new();
    goals.insert(
        NutrientKey::Sodium,
        NutrientGoal {
            value: 2300.0,
            direction: TargetDirection::Max,
        },
    );
    let store = InMemoryStore {
        activity: vec![activity("2024-06-15", 900.0)],
        target_blob: Some(target_blob(2000, goals)),
        ..InMemoryStore::default()
    };
    let service = NutritionService::new(store);
    let result = service
        .trend_at(
            Uuid::new_v4(),
            NutrientKey::Sodium,
            TimeRange::Week,
            date("2024-06-15"),
        )
        .await
        .unwrap();

    assert!(result
        .nutrient_data
        .iter()
        .all(|p| p.target == Some(2300.0)));
    assert_eq!(result.nutrient_target, Some(2300.0));
    assert_eq!(result.nutrient_target_direction, Some(TargetDirection::Max));
}

#[tokio::test]
async fn malformed_target_blob_never_blocks_the_trend() {
    let store = InMemoryStore {
        entries: vec![entry("2024-06-15", 1500.0)],
        target_blob: Some("{corrupt".to_owned()),
        ..InMemoryStore::default()
    };
    let service = NutritionService::new(store);
    let result = service
        .trend_at(
            Uuid::new_v4(),
            NutrientKey::Calories,
            TimeRange::Week,
            date("2024-06-15"),
        )
        .await
        .unwrap();

    assert_eq!(result.nutrient_target, None);
    assert_eq!(result.nutrient_target_direction, None);
    assert!(result.nutrient_data.iter().all(|p| p.target.is_none()));
    assert_eq!(result.nutrient_data[6].value, Some(1500.0));
}

#[tokio::test]
async fn weight_series_is_unit_consistent_per_request() {
    let store = InMemoryStore {
        weights: vec![
            weight("2024-06-10", 180.0, WeightUnit::Lb),
            weight("2024-06-14", 81.0, WeightUnit::Kg),
        ],
        ..InMemoryStore::default()
    };
    let service = NutritionService::new(store);
    let result = service
        .trend_at(
            Uuid::new_v4(),
            NutrientKey::Calories,
            TimeRange::Week,
            date("2024-06-15"),
        )
        .await
        .unwrap();

    // Most recent sample is kg, so the lb sample is re-expressed in kg
    assert_eq!(result.weight_data.len(), 2);
    assert!(result.weight_data.iter().all(|p| p.unit == WeightUnit::Kg));
    assert!((result.weight_data[0].value - 180.0 * 0.453_592).abs() < 1e-9);
    assert!((result.weight_data[1].value - 81.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn events_appear_sorted_in_the_result() {
    let store = InMemoryStore {
        events: vec![
            nosh_engine::JournalEvent {
                date: date("2024-06-14"),
                description: "long run".to_owned(),
                color: "green".to_owned(),
            },
            nosh_engine::JournalEvent {
                date: date("2024-06-10"),
                description: "cheat day".to_owned(),
                color: "orange".to_owned(),
            },
        ],
        ..InMemoryStore::default()
    };
    let service = NutritionService::new(store);
    let result = service
        .trend_at(
            Uuid::new_v4(),
            NutrientKey::Calories,
            TimeRange::Week,
            date("2024-06-15"),
        )
        .await
        .unwrap();
    assert_eq!(result.event_data.len(), 2);
    assert_eq!(result.event_data[0].description, "cheat day");
}
