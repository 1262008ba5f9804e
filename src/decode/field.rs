//! Tolerant per-field extraction over a JSON object.

use serde_json::{Map, Value};

/// Reads individual fields out of an object that may be absent, partial or
/// carry unexpected types.
///
/// Every accessor returns `None` when the key is missing or the value has the
/// wrong type, and counts that as a miss. Callers choose the fallback value,
/// so an absent field stays distinguishable from a present zero until the
/// record is built.
pub(crate) struct FieldReader<'a> {
    object: Option<&'a Map<String, Value>>,
    misses: usize,
}

impl<'a> FieldReader<'a> {
    /// A reader over `value`; anything other than an object reads as empty.
    pub(crate) fn new(value: Option<&'a Value>) -> Self {
        Self {
            object: value.and_then(Value::as_object),
            misses: 0,
        }
    }

    pub(crate) fn field<T>(
        &mut self,
        key: &'static str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Option<T> {
        let found = self.object.and_then(|o| o.get(key)).and_then(extract);
        if found.is_none() {
            self.misses += 1;
            tracing::trace!(field = key, "field missing or mistyped, using zero value");
        }
        found
    }

    pub(crate) fn int(&mut self, key: &'static str) -> Option<i64> {
        self.field(key, Value::as_i64)
    }

    pub(crate) fn string(&mut self, key: &'static str) -> Option<String> {
        self.field(key, |v| v.as_str().map(str::to_owned))
    }

    pub(crate) fn boolean(&mut self, key: &'static str) -> Option<bool> {
        self.field(key, Value::as_bool)
    }

    pub(crate) fn array(&mut self, key: &'static str) -> Option<&'a Vec<Value>> {
        self.field(key, Value::as_array)
    }

    /// Number of fields that fell back so far.
    pub(crate) fn misses(&self) -> usize {
        self.misses
    }
}

