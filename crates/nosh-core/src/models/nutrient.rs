// ABOUTME: Nutrient key enumeration, static registry, and nutrient vector algebra
// ABOUTME: Fixed 17-key vectors with scale/sum operations over nullable amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nosh Nutrition

//! Nutrient definitions and vector math
//!
//! Every tracked nutrient is one of 17 fixed [`NutrientKey`] variants. A
//! [`NutrientVector`] always carries all 17 keys; an absent measurement is
//! `None`, never a missing key. The [`registry`] maps each key to its unit
//! and display name and is immutable for the lifetime of the process.

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// The closed set of tracked nutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKey {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Total carbohydrates (g)
    Carbs,
    /// Dietary fiber (g)
    Fiber,
    /// Added sugar (g)
    AddedSugar,
    /// Total sugar (g)
    TotalSugar,
    /// Total fat (g)
    TotalFat,
    /// Saturated fat (g)
    SaturatedFat,
    /// Trans fat (g)
    TransFat,
    /// Cholesterol (mg)
    Cholesterol,
    /// Sodium (mg)
    Sodium,
    /// Potassium (mg)
    Potassium,
    /// Calcium (mg)
    Calcium,
    /// Iron (mg)
    Iron,
    /// Vitamin A (mcg RAE)
    VitaminA,
    /// Vitamin C (mg)
    VitaminC,
    /// Vitamin D (mcg)
    VitaminD,
}

impl NutrientKey {
    /// Number of tracked nutrients
    pub const COUNT: usize = 17;

    /// All nutrient keys in canonical registry order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fiber,
        Self::AddedSugar,
        Self::TotalSugar,
        Self::TotalFat,
        Self::SaturatedFat,
        Self::TransFat,
        Self::Cholesterol,
        Self::Sodium,
        Self::Potassium,
        Self::Calcium,
        Self::Iron,
        Self::VitaminA,
        Self::VitaminC,
        Self::VitaminD,
    ];

    /// Canonical snake_case identifier for this key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fiber => "fiber",
            Self::AddedSugar => "added_sugar",
            Self::TotalSugar => "total_sugar",
            Self::TotalFat => "total_fat",
            Self::SaturatedFat => "saturated_fat",
            Self::TransFat => "trans_fat",
            Self::Cholesterol => "cholesterol",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Calcium => "calcium",
            Self::Iron => "iron",
            Self::VitaminA => "vitamin_a",
            Self::VitaminC => "vitamin_c",
            Self::VitaminD => "vitamin_d",
        }
    }

    /// Parse a nutrient key from its wire identifier
    ///
    /// Accepts both the canonical snake_case form and the legacy camelCase
    /// form used by older clients. Returns `None` for unknown identifiers.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "calories" => Some(Self::Calories),
            "protein" => Some(Self::Protein),
            "carbs" => Some(Self::Carbs),
            "fiber" => Some(Self::Fiber),
            "added_sugar" | "addedSugar" => Some(Self::AddedSugar),
            "total_sugar" | "totalSugar" => Some(Self::TotalSugar),
            "total_fat" | "totalFat" => Some(Self::TotalFat),
            "saturated_fat" | "saturatedFat" => Some(Self::SaturatedFat),
            "trans_fat" | "transFat" => Some(Self::TransFat),
            "cholesterol" => Some(Self::Cholesterol),
            "sodium" => Some(Self::Sodium),
            "potassium" => Some(Self::Potassium),
            "calcium" => Some(Self::Calcium),
            "iron" => Some(Self::Iron),
            "vitamin_a" | "vitaminA" => Some(Self::VitaminA),
            "vitamin_c" | "vitaminC" => Some(Self::VitaminC),
            "vitamin_d" | "vitaminD" => Some(Self::VitaminD),
            _ => None,
        }
    }

    /// Position of this key in [`Self::ALL`] and the registry
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Registry definition for this key
    #[must_use]
    pub fn definition(self) -> &'static NutrientDef {
        &REGISTRY[self.index()]
    }
}

/// Measurement unit of a nutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutrientUnit {
    /// Kilocalories
    Kilocalories,
    /// Grams
    Grams,
    /// Milligrams
    Milligrams,
    /// Micrograms
    Micrograms,
}

impl NutrientUnit {
    /// Short unit suffix for display
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kilocalories => "kcal",
            Self::Grams => "g",
            Self::Milligrams => "mg",
            Self::Micrograms => "mcg",
        }
    }
}

/// Static definition of one tracked nutrient
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NutrientDef {
    /// Nutrient key
    pub key: NutrientKey,
    /// Measurement unit
    pub unit: NutrientUnit,
    /// Human-readable name
    pub display_name: &'static str,
}

const fn def(key: NutrientKey, unit: NutrientUnit, display_name: &'static str) -> NutrientDef {
    NutrientDef {
        key,
        unit,
        display_name,
    }
}

/// Process-wide nutrient registry, in the same order as [`NutrientKey::ALL`]
static REGISTRY: [NutrientDef; NutrientKey::COUNT] = [
    def(NutrientKey::Calories, NutrientUnit::Kilocalories, "Calories"),
    def(NutrientKey::Protein, NutrientUnit::Grams, "Protein"),
    def(NutrientKey::Carbs, NutrientUnit::Grams, "Carbohydrates"),
    def(NutrientKey::Fiber, NutrientUnit::Grams, "Fiber"),
    def(NutrientKey::AddedSugar, NutrientUnit::Grams, "Added Sugar"),
    def(NutrientKey::TotalSugar, NutrientUnit::Grams, "Total Sugar"),
    def(NutrientKey::TotalFat, NutrientUnit::Grams, "Total Fat"),
    def(
        NutrientKey::SaturatedFat,
        NutrientUnit::Grams,
        "Saturated Fat",
    ),
    def(NutrientKey::TransFat, NutrientUnit::Grams, "Trans Fat"),
    def(
        NutrientKey::Cholesterol,
        NutrientUnit::Milligrams,
        "Cholesterol",
    ),
    def(NutrientKey::Sodium, NutrientUnit::Milligrams, "Sodium"),
    def(NutrientKey::Potassium, NutrientUnit::Milligrams, "Potassium"),
    def(NutrientKey::Calcium, NutrientUnit::Milligrams, "Calcium"),
    def(NutrientKey::Iron, NutrientUnit::Milligrams, "Iron"),
    def(NutrientKey::VitaminA, NutrientUnit::Micrograms, "Vitamin A"),
    def(NutrientKey::VitaminC, NutrientUnit::Milligrams, "Vitamin C"),
    def(NutrientKey::VitaminD, NutrientUnit::Micrograms, "Vitamin D"),
];

/// All nutrient definitions in canonical order
#[must_use]
pub fn registry() -> &'static [NutrientDef; NutrientKey::COUNT] {
    &REGISTRY
}

/// Fixed-shape vector of nutrient amounts
///
/// All 17 keys are always present; `None` means "not measured" for that
/// nutrient. Serialized as a flat map with explicit nulls so consumers never
/// see a partial shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientVector {
    /// Energy in kcal
    pub calories: Option<f64>,
    /// Protein in grams
    pub protein: Option<f64>,
    /// Total carbohydrates in grams
    pub carbs: Option<f64>,
    /// Dietary fiber in grams
    pub fiber: Option<f64>,
    /// Added sugar in grams
    pub added_sugar: Option<f64>,
    /// Total sugar in grams
    pub total_sugar: Option<f64>,
    /// Total fat in grams
    pub total_fat: Option<f64>,
    /// Saturated fat in grams
    pub saturated_fat: Option<f64>,
    /// Trans fat in grams
    pub trans_fat: Option<f64>,
    /// Cholesterol in mg
    pub cholesterol: Option<f64>,
    /// Sodium in mg
    pub sodium: Option<f64>,
    /// Potassium in mg
    pub potassium: Option<f64>,
    /// Calcium in mg
    pub calcium: Option<f64>,
    /// Iron in mg
    pub iron: Option<f64>,
    /// Vitamin A in mcg RAE
    pub vitamin_a: Option<f64>,
    /// Vitamin C in mg
    pub vitamin_c: Option<f64>,
    /// Vitamin D in mcg
    pub vitamin_d: Option<f64>,
}

impl NutrientVector {
    /// Vector with every key null ("nothing measured")
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Amount for one nutrient key
    #[must_use]
    pub const fn get(&self, key: NutrientKey) -> Option<f64> {
        match key {
            NutrientKey::Calories => self.calories,
            NutrientKey::Protein => self.protein,
            NutrientKey::Carbs => self.carbs,
            NutrientKey::Fiber => self.fiber,
            NutrientKey::AddedSugar => self.added_sugar,
            NutrientKey::TotalSugar => self.total_sugar,
            NutrientKey::TotalFat => self.total_fat,
            NutrientKey::SaturatedFat => self.saturated_fat,
            NutrientKey::TransFat => self.trans_fat,
            NutrientKey::Cholesterol => self.cholesterol,
            NutrientKey::Sodium => self.sodium,
            NutrientKey::Potassium => self.potassium,
            NutrientKey::Calcium => self.calcium,
            NutrientKey::Iron => self.iron,
            NutrientKey::VitaminA => self.vitamin_a,
            NutrientKey::VitaminC => self.vitamin_c,
            NutrientKey::VitaminD => self.vitamin_d,
        }
    }

    /// Set the amount for one nutrient key
    pub fn set(&mut self, key: NutrientKey, value: Option<f64>) {
        match key {
            NutrientKey::Calories => self.calories = value,
            NutrientKey::Protein => self.protein = value,
            NutrientKey::Carbs => self.carbs = value,
            NutrientKey::Fiber => self.fiber = value,
            NutrientKey::AddedSugar => self.added_sugar = value,
            NutrientKey::TotalSugar => self.total_sugar = value,
            NutrientKey::TotalFat => self.total_fat = value,
            NutrientKey::SaturatedFat => self.saturated_fat = value,
            NutrientKey::TransFat => self.trans_fat = value,
            NutrientKey::Cholesterol => self.cholesterol = value,
            NutrientKey::Sodium => self.sodium = value,
            NutrientKey::Potassium => self.potassium = value,
            NutrientKey::Calcium => self.calcium = value,
            NutrientKey::Iron => self.iron = value,
            NutrientKey::VitaminA => self.vitamin_a = value,
            NutrientKey::VitaminC => self.vitamin_c = value,
            NutrientKey::VitaminD => self.vitamin_d = value,
        }
    }

    /// Builder-style variant of [`Self::set`]
    #[must_use]
    pub fn with(mut self, key: NutrientKey, value: f64) -> Self {
        self.set(key, Some(value));
        self
    }

    /// Scale every measured amount by `factor`
    ///
    /// Null amounts stay null: scaling cannot invent a measurement. The
    /// factor must be finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFactor`] for a negative or non-finite
    /// factor.
    pub fn scale(&self, factor: f64) -> EngineResult<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(EngineError::InvalidFactor { factor });
        }
        let mut scaled = Self::empty();
        for key in NutrientKey::ALL {
            scaled.set(key, self.get(key).map(|v| v * factor));
        }
        Ok(scaled)
    }

    /// Elementwise sum of any number of vectors
    ///
    /// The result is always fully numeric: a key that is null in every input
    /// sums to 0.0. Aggregate totals treat "no data" as zero consumption,
    /// unlike [`Self::scale`] which preserves null as "unknown".
    #[must_use]
    pub fn sum<'a, I>(vectors: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut totals = Self::empty();
        for key in NutrientKey::ALL {
            totals.set(key, Some(0.0));
        }
        for vector in vectors {
            for key in NutrientKey::ALL {
                if let Some(amount) = vector.get(key) {
                    let running = totals.get(key).unwrap_or(0.0);
                    totals.set(key, Some(running + amount));
                }
            }
        }
        totals
    }
}
