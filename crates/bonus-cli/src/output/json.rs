use serde_json::Value;

/// Pretty-print the command output as JSON. The default format, and the one
/// the record store and `calculate --input` round-trip through.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{pretty}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
