//! JSON merge patch (RFC 7396) used to apply content overrides.

use serde_json::{Map, Value};

/// Applies `patch` to `target` as a JSON merge patch (RFC 7396).
///
/// Objects merge recursively, `null` members remove the key and any other value replaces
/// the target wholesale.
pub fn merge_patch(target: &mut Value, patch: &Value) {
    let Value::Object(patch) = patch else {
        *target = patch.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    if let Value::Object(target) = target {
        for (key, value) in patch {
            if value.is_null() {
                target.remove(key);
            } else {
                merge_patch(target.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}
