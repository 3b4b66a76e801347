use serde_json::Value;

/// Print just the key answer from the output.
///
/// Looks for well-known result fields in order of priority, descending one
/// level into nested sections, then falls back to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(Value::Object(display)) = result_obj.get("display") {
        for (name, shown) in display {
            println!("{}: {}", name, format_minimal(shown));
        }
        return;
    }

    let priority_keys = [
        "change_pct",
        "highest_severity",
        "return_on_equity",
        "equity_strength",
        "diagnosis",
    ];

    if let Value::Object(map) = result_obj {
        let sections = std::iter::once(map).chain(map.values().filter_map(Value::as_object));
        for section in sections {
            for key in &priority_keys {
                if let Some(val) = section.get(*key) {
                    if !val.is_null() {
                        println!("{}", format_minimal(val));
                        return;
                    }
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    if let Value::Array(cells) = result_obj {
        println!("{}", cells.len());
        return;
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
