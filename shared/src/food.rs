//! Static food nutrition table
//!
//! Ten common foods with per-100 g values. Lookup is an exact match on the
//! trimmed, lowercased query; there is no fuzzy matching or ranking.

use serde::{Deserialize, Serialize};

/// Nutrition facts per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
}

impl NutritionFacts {
    /// Scale the per-100 g values to a serving of `grams`
    pub fn scaled_to_grams(&self, grams: f64) -> NutritionFacts {
        let factor = grams / 100.0;
        NutritionFacts {
            name: self.name.clone(),
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
            fiber_g: self.fiber_g * factor,
        }
    }
}

struct FoodEntry {
    key: &'static str,
    name: &'static str,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    fiber_g: f64,
}

macro_rules! food {
    ($key:literal, $name:literal, $cal:expr, $protein:expr, $carbs:expr, $fat:expr, $fiber:expr) => {
        FoodEntry {
            key: $key,
            name: $name,
            calories: $cal,
            protein_g: $protein,
            carbs_g: $carbs,
            fat_g: $fat,
            fiber_g: $fiber,
        }
    };
}

const FOODS: [FoodEntry; 10] = [
    food!("apple", "Apple", 52.0, 0.3, 14.0, 0.2, 2.4),
    food!("banana", "Banana", 89.0, 1.1, 23.0, 0.3, 2.6),
    food!("chicken breast", "Chicken Breast", 165.0, 31.0, 0.0, 3.6, 0.0),
    food!("rice", "Rice (cooked)", 130.0, 2.7, 28.0, 0.3, 0.4),
    food!("eggs", "Eggs", 155.0, 13.0, 1.1, 11.0, 0.0),
    food!("oats", "Oats", 389.0, 17.0, 66.0, 7.0, 11.0),
    food!("salmon", "Salmon", 208.0, 25.0, 0.0, 12.0, 0.0),
    food!("broccoli", "Broccoli", 34.0, 2.8, 7.0, 0.4, 2.6),
    food!("sweet potato", "Sweet Potato", 86.0, 1.6, 20.0, 0.1, 3.0),
    food!("yogurt", "Greek Yogurt", 59.0, 10.0, 3.6, 0.4, 0.0),
];

/// Find a food by name, ignoring case and surrounding whitespace
pub fn lookup_food(query: &str) -> Option<NutritionFacts> {
    let key = query.trim().to_lowercase();
    FOODS.iter().find(|entry| entry.key == key).map(|entry| NutritionFacts {
        name: entry.name.to_string(),
        calories: entry.calories,
        protein_g: entry.protein_g,
        carbs_g: entry.carbs_g,
        fat_g: entry.fat_g,
        fiber_g: entry.fiber_g,
    })
}

/// Searchable keys in table order, for "not found" hints
pub fn food_suggestions() -> impl Iterator<Item = &'static str> {
    FOODS.iter().map(|entry| entry.key)
}
