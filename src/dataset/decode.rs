//! Payload shape detection and record decoding.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::DatasetError;
use crate::models::{Column, Dataset, Record, RecordBuilder};

/// Decodes a raw payload into a `Dataset`.
///
/// Accepted shapes:
///
/// - a CKAN envelope `{"success": true, "result": {"records": [...]}}`; a
///   result without `records` yields an empty dataset
/// - an object without `success` carrying `result.records` or `records`
/// - a bare array of record objects
///
/// `success: false` is reported as unavailable, using the portal's
/// `error.message` when present. Any other shape is a format error.
///
/// # Examples
///
/// ```
/// use renewal::dataset::decode_payload;
/// use serde_json::json;
///
/// let wrapped = json!({"success": true, "result": {"records": [{"Yeshuv": " חיפה "}]}});
/// let bare = json!([{"Yeshuv": "חיפה"}]);
///
/// assert_eq!(decode_payload(wrapped).unwrap(), decode_payload(bare).unwrap());
/// ```
pub fn decode_payload(payload: Value) -> Result<Dataset, DatasetError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(envelope) => unwrap_envelope(envelope)?,
        other => {
            return Err(DatasetError::Format(format!(
                "expected an object or an array, got {}",
                kind(&other)
            )));
        }
    };

    decode_records(items)
}

fn unwrap_envelope(mut envelope: Map<String, Value>) -> Result<Vec<Value>, DatasetError> {
    if envelope.contains_key("success") {
        match envelope.get("success").and_then(Value::as_bool) {
            Some(true) => {}
            Some(false) => {
                let reason = envelope
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
                    .unwrap_or("success flag is false");
                return Err(DatasetError::unavailable(reason.to_string()));
            }
            None => {
                return Err(DatasetError::Format(
                    "`success` must be a boolean".to_string(),
                ));
            }
        }

        let result = envelope
            .remove("result")
            .ok_or_else(|| DatasetError::Format("envelope has no `result`".to_string()))?;
        return match result {
            Value::Object(mut result) => match result.remove("records") {
                Some(records) => into_array(records),
                None => Ok(Vec::new()),
            },
            other => Err(DatasetError::Format(format!(
                "`result` must be an object, got {}",
                kind(&other)
            ))),
        };
    }

    let records = match envelope.remove("result") {
        Some(Value::Object(mut result)) if result.contains_key("records") => {
            result.remove("records")
        }
        _ => envelope.remove("records"),
    };

    match records {
        Some(records) => into_array(records),
        None => Err(DatasetError::Format(
            "payload has neither `result.records` nor `records`".to_string(),
        )),
    }
}

fn into_array(value: Value) -> Result<Vec<Value>, DatasetError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DatasetError::Format(format!(
            "`records` must be an array, got {}",
            kind(&other)
        ))),
    }
}

fn decode_records(items: Vec<Value>) -> Result<Dataset, DatasetError> {
    let mut columns = HashSet::new();
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let fields = match item {
            Value::Object(fields) => fields,
            other => {
                return Err(DatasetError::Format(format!(
                    "record {index} is {}, expected an object",
                    kind(&other)
                )));
            }
        };

        for column in Column::ALL {
            if fields.contains_key(column.field_name()) {
                columns.insert(column);
            }
        }

        records.push(decode_record(fields));
    }

    Ok(Dataset::new(records, columns))
}

fn decode_record(mut fields: Map<String, Value>) -> Record {
    let mut take = |column: Column| fields.remove(column.field_name()).and_then(text_of);

    let complex_id = take(Column::ComplexId);
    let municipality = take(Column::Municipality);
    let complex_name = take(Column::ComplexName);
    let declaration_date = take(Column::DeclarationDate);

    let mut builder = RecordBuilder::new();
    if let Some(id) = complex_id {
        builder = builder.complex_id(id);
    }
    if let Some(municipality) = municipality {
        builder = builder.municipality(municipality);
    }
    if let Some(name) = complex_name {
        builder = builder.complex_name(name);
    }
    if let Some(date) = declaration_date {
        builder = builder.declaration_date(date);
    }

    fields
        .into_iter()
        .fold(builder, |builder, (key, value)| builder.extra(key, value))
        .build()
}

/// Renders a JSON scalar as text; `null` is absent.
fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
