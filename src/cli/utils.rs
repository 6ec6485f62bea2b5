use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(target), Some(Value::Object(extra))) = (response.as_object_mut(), data) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output records returned by the server
pub fn output_records(output_format: OutputFormat, records: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Text => match records {
            Value::Array(items) if items.is_empty() => println!("No records"),
            Value::Array(items) => {
                for item in items {
                    println!("{}", summarize(item));
                }
            }
            other => println!("{}", summarize(other)),
        },
    }
    Ok(())
}

/// One line per record: `key=value` pairs in field order
fn summarize(record: &Value) -> String {
    match record {
        Value::Object(fields) => fields
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}={}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect::<Vec<_>>()
            .join("  "),
        other => other.to_string(),
    }
}
