// ABOUTME: Integration tests for log-time nutrient snapshots through CalculatorService
// ABOUTME: Portion scaling, ownership scoping, recipe totals, and not-found aborts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::InMemoryCatalog;
use nosh_engine::{
    CalculatorService, CatalogCustomFood, CatalogFood, CatalogRecipe, EngineError,
    LoggableItemRef, NutrientKey, NutrientVector,
};
use uuid::Uuid;

fn macro_vector(calories: f64, protein: f64, carbs: f64) -> NutrientVector {
    NutrientVector::empty()
        .with(NutrientKey::Calories, calories)
        .with(NutrientKey::Protein, protein)
        .with(NutrientKey::Carbs, carbs)
}

#[tokio::test]
async fn raw_food_portions_scale_from_per_100g() {
    let food_id = Uuid::new_v4();
    let mut catalog = InMemoryCatalog::default();
    catalog.foods.insert(
        food_id,
        CatalogFood {
            name: "Brown Rice".to_owned(),
            per_100g: macro_vector(360.0, 7.5, 76.0),
        },
    );
    let service = CalculatorService::new(catalog);

    let snapshot = service
        .snapshot(
            Uuid::new_v4(),
            &LoggableItemRef::Food {
                id: food_id,
                grams: 250.0,
            },
        )
        .await
        .unwrap();

    assert_eq!(snapshot.name, "Brown Rice");
    assert_eq!(snapshot.nutrients.get(NutrientKey::Calories), Some(900.0));
    assert_eq!(snapshot.nutrients.get(NutrientKey::Protein), Some(18.75));
    // Unmeasured nutrients stay unknown, not zero
    assert_eq!(snapshot.nutrients.get(NutrientKey::Sodium), None);
}

#[tokio::test]
async fn custom_food_belongs_to_its_owner() {
    let id = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let mut catalog = InMemoryCatalog::default();
    catalog.custom.insert(
        (id, owner),
        CatalogCustomFood {
            name: "Overnight Oats".to_owned(),
            per_serving: macro_vector(420.0, 16.0, 60.0),
        },
    );
    let service = CalculatorService::new(catalog);

    let snapshot = service
        .snapshot(owner, &LoggableItemRef::CustomFood { id, servings: 0.5 })
        .await
        .unwrap();
    assert_eq!(snapshot.nutrients.get(NutrientKey::Calories), Some(210.0));

    let err = service
        .snapshot(stranger, &LoggableItemRef::CustomFood { id, servings: 0.5 })
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound { .. }));
}

#[tokio::test]
async fn recipe_snapshot_is_the_stored_grand_total() {
    let id = Uuid::new_v4();
    let user = Uuid::new_v4();
    let total = macro_vector(1600.0, 90.0, 120.0);
    let mut catalog = InMemoryCatalog::default();
    catalog.recipes.insert(
        (id, user),
        CatalogRecipe {
            name: "Lentil Stew".to_owned(),
            total: total.clone(),
            servings: 4.0,
        },
    );
    let service = CalculatorService::new(catalog);

    for servings in [1.0, 2.0, 4.0] {
        let snapshot = service
            .snapshot(user, &LoggableItemRef::Recipe { id, servings })
            .await
            .unwrap();
        assert_eq!(snapshot.nutrients, total);
    }
}

#[tokio::test]
async fn invalid_portions_are_rejected_before_lookup() {
    let service = CalculatorService::new(InMemoryCatalog::default());
    let err = service
        .snapshot(
            Uuid::new_v4(),
            &LoggableItemRef::Food {
                id: Uuid::new_v4(),
                grams: 0.01,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidPortion { .. }));

    let err = service
        .snapshot(
            Uuid::new_v4(),
            &LoggableItemRef::Recipe {
                id: Uuid::new_v4(),
                servings: -1.0,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidPortion { .. }));
}

#[tokio::test]
async fn unknown_food_aborts_with_not_found() {
    let service = CalculatorService::new(InMemoryCatalog::default());
    let err = service
        .snapshot(
            Uuid::new_v4(),
            &LoggableItemRef::Food {
                id: Uuid::new_v4(),
                grams: 100.0,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::NotFound {
            resource: "food",
            ..
        }
    ));
}

#[test]
fn recipe_per_serving_display_guards_zero_yield() {
    let recipe = CatalogRecipe {
        name: "No Yield".to_owned(),
        total: macro_vector(800.0, 40.0, 50.0),
        servings: 0.0,
    };
    assert!((recipe.calories_per_serving() - 0.0).abs() < f64::EPSILON);
}
