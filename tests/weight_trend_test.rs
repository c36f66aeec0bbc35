// ABOUTME: Integration tests for weight trend classification through the service layer
// ABOUTME: Stable/down scenarios, unit round-trips, and the sample window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, weight, InMemoryStore};
use nosh_engine::{NutritionService, WeightTrendDirection, WeightUnit};
use uuid::Uuid;

#[tokio::test]
async fn seven_equal_samples_classify_stable() {
    let store = InMemoryStore {
        weights: (1..=7).map(|d| weight(&format!("2024-06-{d:02}"), 150.0, WeightUnit::Lb)).collect(),
        ..InMemoryStore::default()
    };
    let service = NutritionService::new(store);
    let trend = service
        .weight_trend_at(Uuid::new_v4(), date("2024-06-15"))
        .await
        .unwrap();
    assert_eq!(trend, WeightTrendDirection::Stable);
}

#[tokio::test]
async fn strictly_decreasing_samples_classify_down() {
    // 0.5 lb lighter per successive entry
    let store = InMemoryStore {
        weights: (0..7)
            .map(|i| {
                weight(
                    &format!("2024-06-{:02}", i + 1),
                    152.0 - 0.5 * f64::from(i),
                    WeightUnit::Lb,
                )
            })
            .collect(),
        ..InMemoryStore::default()
    };
    let service = NutritionService::new(store);
    let trend = service
        .weight_trend_at(Uuid::new_v4(), date("2024-06-15"))
        .await
        .unwrap();
    assert_eq!(trend, WeightTrendDirection::Down);
}

#[tokio::test]
async fn single_sample_yields_no_trend() {
    let store = InMemoryStore {
        weights: vec![weight("2024-06-01", 80.0, WeightUnit::Kg)],
        ..InMemoryStore::default()
    };
    let service = NutritionService::new(store);
    let trend = service
        .weight_trend_at(Uuid::new_v4(), date("2024-06-15"))
        .await
        .unwrap();
    assert_eq!(trend, WeightTrendDirection::NoTrend);
}

#[test]
fn kilogram_pound_round_trip() {
    let lb = WeightUnit::Lb.from_kg(100.0);
    let kg = WeightUnit::Lb.to_kg(lb);
    assert!((kg - 100.0).abs() < 1e-9);
    assert!((lb - 220.462).abs() < 1e-2);
}
