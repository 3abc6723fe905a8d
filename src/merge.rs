use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Recursively merges `sources` into `target`, from left to right, and returns `target`.
///
/// Objects are merged key by key. Every other value, arrays included, replaces the value already
/// present in `target`. A nested object lands on a fresh `{}` when the target holds nothing there
/// or a falsy value (`null`, `false`, `0`, `""`). A source is skipped when it or the value it
/// merges into is not an object.
pub fn merge_deep<I>(target: &mut Value, sources: I) -> &mut Value
where
    I: IntoIterator<Item = Value>,
{
    for source in sources {
        merge_pair(target, source);
    }
    target
}

fn merge_pair(target: &mut Value, source: Value) {
    let (Value::Object(target), Value::Object(source)) = (target, source) else {
        return;
    };

    for (key, value) in source {
        match value {
            Value::Object(_) => {
                let slot = target.entry(key).or_insert(Value::Null);
                if is_empty_slot(slot) {
                    *slot = Value::Object(Map::new());
                }
                merge_pair(slot, value);
            }
            // Arrays and primitives replace the target value
            replacement => {
                target.insert(key, replacement);
            }
        }
    }
}

// Null, false, zero and the empty string make way for a nested object
fn is_empty_slot(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

pub trait MergeDeep {
    fn merge_deep<I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = Value>;
}

impl MergeDeep for Value {
    fn merge_deep<I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = Value>,
    {
        merge_deep(self, sources)
    }
}

/// Applies partial updates to a copy of `target` and reads the result back as a `T`.
pub fn merge_into<T, I>(target: &T, patches: I) -> Result<T, MergeError>
where
    T: Serialize + DeserializeOwned,
    I: IntoIterator<Item = Value>,
{
    let mut value = serde_json::to_value(target).map_err(MergeError::Serialize)?;
    merge_deep(&mut value, patches);
    serde_json::from_value(value).map_err(MergeError::Deserialize)
}

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("could not serialize the merge target: {0}")]
    Serialize(serde_json::Error),
    #[error("merged value does not fit the target type: {0}")]
    Deserialize(serde_json::Error),
}
