//! Field paths
//!
//! Fields are addressed with dotted paths such as `spec.cluster.external.domainName`,
//! which render as a kubectl JSONPath template or as a JSON pointer into an object.

use crate::error::ClusterError;
use base64::Engine;
use serde_json::Value;

/// `spec.cluster.external.httpsPort` -> `jsonpath={.spec.cluster.external.httpsPort}`
pub fn jsonpath_arg(field_path: &str) -> String {
    format!("jsonpath={{.{}}}", field_path)
}

/// `spec.cluster.external.httpsPort` -> `/spec/cluster/external/httpsPort`
pub fn json_pointer(field_path: &str) -> String {
    field_path
        .split('.')
        .map(|segment| segment.replace('~', "~0").replace('/', "~1"))
        .fold(String::new(), |mut pointer, segment| {
            pointer.push('/');
            pointer.push_str(&segment);
            pointer
        })
}

/// Read a scalar field from a JSON object and render it the way kubectl's JSONPath output does
///
/// Strings are returned verbatim, numbers and booleans in their JSON form.
/// Missing, null, and non-scalar values are reported as `FieldMissing`.
pub fn extract_scalar(object: &Value, object_name: &str, field_path: &str) -> Result<String, ClusterError> {
    let missing = || ClusterError::FieldMissing {
        object: object_name.to_string(),
        field: field_path.to_string(),
    };

    match object.pointer(&json_pointer(field_path)).ok_or_else(missing)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(missing()),
    }
}

/// Decode a base64 secret value into UTF-8 text
///
/// Surrounding whitespace (kubectl's trailing newline) is ignored.
pub fn decode_base64_text(field: &str, encoded: &str) -> Result<String, ClusterError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| ClusterError::Decode {
            field: field.to_string(),
            message: e.to_string(),
        })?;
    utf8_text(field, bytes)
}

/// Interpret raw secret bytes as UTF-8 text
pub fn utf8_text(field: &str, bytes: Vec<u8>) -> Result<String, ClusterError> {
    String::from_utf8(bytes).map_err(|e| ClusterError::Decode {
        field: field.to_string(),
        message: e.to_string(),
    })
}
