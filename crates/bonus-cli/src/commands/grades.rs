use serde_json::Value;

use bonus_core::grades;

/// List the static grade profile table.
pub fn run_grades() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(grades::all())?)
}
