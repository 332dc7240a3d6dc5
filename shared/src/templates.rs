//! Static diet and workout templates
//!
//! Meal lists are keyed by (goal, diet type); workout weeks by goal alone.
//! Both lookups are exhaustive matches, so every combination has a template.

use crate::models::{DietType, Goal, MealSlot};

/// Exercises for one day, label first
pub type DayTemplate = (&'static str, &'static [&'static str]);

/// Meal descriptions in breakfast, lunch, snack, dinner order
pub fn meal_template(goal: Goal, diet: DietType) -> [(MealSlot, &'static str); 4] {
    let [breakfast, lunch, snack, dinner] = match (goal, diet) {
        (Goal::WeightLoss, DietType::Vegetarian) => [
            "Oats with banana and almonds",
            "Mixed vegetables with dal and brown rice",
            "Buttermilk with roasted chana",
            "Moong soup with roti and fresh salad",
        ],
        (Goal::WeightLoss, DietType::NonVegetarian) => [
            "Scrambled eggs with brown bread",
            "Grilled chicken with steamed vegetables",
            "Greek yogurt with almonds",
            "Fish curry with roti and salad",
        ],
        (Goal::WeightGain, DietType::Vegetarian) => [
            "Paneer paratha with full-fat milk",
            "Rajma with rice and ghee",
            "Peanut butter sandwich with dry fruits",
            "Soya curry with paratha and salad",
        ],
        (Goal::WeightGain, DietType::NonVegetarian) => [
            "Eggs with toast and protein shake",
            "Chicken curry with rice and curd",
            "Chicken sandwich with mixed nuts",
            "Mutton curry with paratha",
        ],
        (Goal::Maintain, DietType::Vegetarian) => [
            "Fresh fruits with oats and nuts",
            "Vegetable curry with rice",
            "Milk or seasonal fruit",
            "Roti with sabzi and curd",
        ],
        (Goal::Maintain, DietType::NonVegetarian) => [
            "Eggs with whole wheat toast",
            "Chicken with vegetables and rice",
            "Protein shake or fruit",
            "Fish with roti and vegetables",
        ],
    };

    [
        (MealSlot::Breakfast, breakfast),
        (MealSlot::Lunch, lunch),
        (MealSlot::Snack, snack),
        (MealSlot::Dinner, dinner),
    ]
}

/// Seven-day workout week for a goal
pub fn workout_template(goal: Goal) -> &'static [DayTemplate; 7] {
    match goal {
        Goal::WeightLoss => &WEIGHT_LOSS_WEEK,
        Goal::WeightGain => &WEIGHT_GAIN_WEEK,
        Goal::Maintain => &MAINTAIN_WEEK,
    }
}

const WEIGHT_LOSS_WEEK: [DayTemplate; 7] = [
    ("Day 1", &["Jumping jacks (3×30)", "Squats (3×15)", "Planks (3×30s)"]),
    ("Day 2", &["High knees (3×30)", "Lunges (3×12)", "Mountain climbers (3×20)"]),
    ("Day 3", &["Jump rope (20 min)", "Planks (3×45s)", "Power walking (30 min)"]),
    ("Day 4", &["Cycling (30 min)", "Squats (3×20)", "Jumping jacks (3×40)"]),
    ("Day 5", &["Burpees (3×10)", "Lunges (3×15)", "Planks (3×60s)"]),
    ("Day 6", &["Power walking (45 min)", "High knees (3×40)", "Mountain climbers (3×25)"]),
    ("Day 7", &["Yoga or stretching (30 min)"]),
];

const WEIGHT_GAIN_WEEK: [DayTemplate; 7] = [
    ("Day 1", &["Push-ups (3×10)", "Squats (3×15)", "Dumbbell curls (3×12)"]),
    ("Day 2", &["Pull-ups (3×8)", "Lunges (3×12)", "Deadlifts (3×10)"]),
    ("Day 3", &["Bench press (3×10)", "Shoulder press (3×12)", "Leg raises (3×15)"]),
    ("Day 4", &["Rest day or light stretching"]),
    ("Day 5", &["Push-ups (3×12)", "Squats (3×20)", "Plank hold (3×45s)"]),
    ("Day 6", &["Pull-ups (3×10)", "Deadlifts (3×12)", "Shoulder press (3×15)"]),
    ("Day 7", &["Full body light circuit or yoga"]),
];

const MAINTAIN_WEEK: [DayTemplate; 7] = [
    ("Day 1", &["Brisk walking (30 min)"]),
    ("Day 2", &["Yoga and light stretching (30 min)"]),
    ("Day 3", &["Jogging (20 min)", "Squats (2×15)"]),
    ("Day 4", &["Rest day or deep breathing exercises"]),
    ("Day 5", &["Jump rope (15 min)", "Lunges (2×12)"]),
    ("Day 6", &["Core strengthening: planks, crunches (20 min)"]),
    ("Day 7", &["Dancing or swimming (30 min)"]),
];
