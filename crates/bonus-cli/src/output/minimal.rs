use serde_json::Value;

use super::scalar_to_string;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// descending into the bonus breakdown, then fall back to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // The calculate envelope nests the headline figure under "bonus".
    let bonus_obj = result_obj
        .as_object()
        .and_then(|m| m.get("bonus"))
        .unwrap_or(result_obj);

    let priority_keys = [
        "final_bonus",
        "base_bonus",
        "financial_score",
        "non_financial_score",
        "adjusted_qti",
        "deleted",
        "exported",
    ];

    if let Value::Object(map) = bonus_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", scalar_to_string(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_to_string(val));
            return;
        }
    }

    println!("{}", scalar_to_string(bonus_obj));
}
