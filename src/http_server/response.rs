//! Success response envelopes
//!
//! Mutations respond with `{"Message": ...}`; creates and reads add the
//! record under its entity label, e.g. `{"Message": ..., "Employee": {...}}`.

use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

/// Plain message envelope
pub fn message(text: &str) -> Json<Value> {
    let mut map = Map::new();
    map.insert("Message".to_string(), Value::String(text.to_string()));
    Json(Value::Object(map))
}

/// Message plus a record under the given entity label
pub fn record<T: Serialize>(text: &str, label: &str, value: &T) -> Json<Value> {
    let mut map = Map::new();
    map.insert("Message".to_string(), Value::String(text.to_string()));
    map.insert(
        label.to_string(),
        serde_json::to_value(value).unwrap_or(Value::Null),
    );
    Json(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_envelope_shape() {
        #[derive(Serialize)]
        struct Row {
            #[serde(rename = "Hours")]
            hours: i64,
        }
        let Json(body) = record("'Working on' record added successfully!", "Working On", &Row { hours: 10 });
        assert_eq!(body["Message"], "'Working on' record added successfully!");
        assert_eq!(body["Working On"]["Hours"], 10);
    }
}
