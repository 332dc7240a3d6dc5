//! Integration tests for the plan command

mod common;

use common::{reference_flags, temp_profile, TestApp};
use fitness_planner_shared::units::EnergyUnit;
use serde_json::Value;

#[tokio::test]
async fn test_weight_loss_text_summary() {
    let app = TestApp::new();

    let output = app.run(&reference_flags("weight_loss")).await.unwrap();

    assert!(output.contains("Hi Ravi, here's your personalized weight loss plan!"));
    assert!(output.contains("Target: Lose 5 kg"));
    assert!(output.contains("Duration: 77 days"));
    assert!(output.contains("Daily Calories: 2094 kcal"));
}

#[tokio::test]
async fn test_maintain_json_output() {
    let app = TestApp::new();
    let mut args = reference_flags("maintain");
    args.extend(["--format", "json"]);

    let output = app.run(&args).await.unwrap();
    let response: Value = serde_json::from_str(&output).unwrap();

    assert!((response["daily_calories"].as_f64().unwrap() - 2594.3125).abs() < 1e-9);
    assert_eq!(response["daily_calories_rounded"], 2594);
    assert!(response.get("days_required").is_none());
    assert_eq!(response["diet_plan"][0], "Breakfast: Fresh fruits with oats and nuts");
    assert_eq!(response["workout_plan"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_csv_output_rows() {
    let app = TestApp::new();
    let mut args = reference_flags("weight_gain");
    args.extend(["--format", "csv"]);

    let output = app.run(&args).await.unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "section,label,position,item");
    assert_eq!(lines.iter().filter(|l| l.starts_with("diet,")).count(), 4);
    assert!(lines.contains(&"workout,Day 1,1,Push-ups (3×10)"));
}

#[tokio::test]
async fn test_kilojoule_display_and_projected_date() {
    let app = TestApp::new().with_energy_unit(EnergyUnit::Kj);
    let mut args = reference_flags("weight_loss");
    args.extend(["--start", "2024-03-01"]);

    let output = app.run(&args).await.unwrap();

    // 2094.3125 * 4.184 = 8762.6
    assert!(output.contains("Daily Calories: 8763 kJ"));
    // 77 days after 1 March 2024
    assert!(output.contains("Projected completion: 2024-05-17"));
}

#[tokio::test]
async fn test_feet_and_inches_height() {
    let app = TestApp::new();
    let args = [
        "plan", "--name", "Sam", "--age", "25", "--weight", "70", "--height-ft", "5",
        "--height-in", "9", "--sex", "male", "--activity", "moderate", "--goal", "maintain",
        "--diet", "non_vegetarian", "--format", "json",
    ];

    let output = app.run(&args).await.unwrap();
    let response: Value = serde_json::from_str(&output).unwrap();

    // 5 ft 9 in = 175.26 cm; 0.26 cm adds 1.625 kcal of BMR before the 1.55 multiplier
    let expected = (1673.75 + 6.25 * 0.26) * 1.55;
    let actual = response["daily_calories"].as_f64().unwrap();
    assert!((actual - expected).abs() < 1e-6);
}

#[tokio::test]
async fn test_profile_file_with_flag_override() {
    let path = temp_profile(
        "override",
        "toml",
        r#"
name = "Ravi"
age = 25
weight = 70
height = 175
gender = "male"
activity = "moderate"
goal = "weight_loss"
target_weight = 5
diet_type = "vegetarian"
"#,
    );
    let app = TestApp::new();
    let path_arg = path.to_string_lossy().to_string();

    let output = app
        .run(&["plan", "--profile", &path_arg, "--target-kg", "3", "--format", "json"])
        .await;
    std::fs::remove_file(&path).ok();

    let response: Value = serde_json::from_str(&output.unwrap()).unwrap();
    // 3 * 7700 / 500 = 46.2
    assert_eq!(response["days_required"], 46);
    assert_eq!(response["target_delta_kg"], 3.0);
}

#[tokio::test]
async fn test_unrecognized_activity_is_reported() {
    let app = TestApp::new();
    let mut args = reference_flags("weight_loss");
    let index = args.iter().position(|a| *a == "moderate").unwrap();
    args[index] = "extreme";

    let err = app.run(&args).await.unwrap_err();

    assert_eq!(err.code(), "UNRECOGNIZED_VALUE");
    assert_eq!(err.to_response().error.field.as_deref(), Some("activity"));
}

#[tokio::test]
async fn test_missing_fields_are_validation_errors() {
    let app = TestApp::new();

    let err = app.run(&["plan", "--name", "Ravi"]).await.unwrap_err();

    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(err.to_response().error.field.as_deref(), Some("age"));
}
