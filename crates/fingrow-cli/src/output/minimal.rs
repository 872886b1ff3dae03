use serde_json::Value;

/// Print just the headline value of a command's output.
///
/// The result object is searched for well-known fields in priority order,
/// descending into `optimal_combination` for recommendations; otherwise the
/// first field is printed.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(headline) = headline(result_obj) {
        println!("{}", headline);
        return;
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn headline(result: &Value) -> Option<String> {
    let priority_keys = ["tier", "maturity_amount", "total_count"];
    let map = result.as_object()?;

    if let Some(Value::Object(combo)) = map.get("optimal_combination") {
        let total = combo.get("total_expected_return").map(format_minimal)?;
        let summary = combo.get("combination_summary").map(format_minimal)?;
        return Some(format!("{} (+{})", summary, total));
    }

    priority_keys
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|val| !val.is_null())
        .map(format_minimal)
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
