//! The annotated-object capability.

use std::collections::BTreeMap;

/// Access to a string-keyed annotation bag.
///
/// The reservation store depends only on this capability, not on any
/// concrete identity-object type. Implementations are expected to
/// persist annotations together with the object they belong to, under
/// whatever optimistic-concurrency discipline the backing store
/// enforces.
pub trait AnnotatedObject {
    /// Returns the annotation value for `key`, if set.
    fn annotation(&self, key: &str) -> Option<&str>;

    /// Sets the annotation `key` to `value`, creating the bag if
    /// needed.
    fn set_annotation(&mut self, key: &str, value: String);

    /// Removes the annotation `key`, if present.
    fn remove_annotation(&mut self, key: &str);
}

/// A bare map is a valid identity object for tests and embedders.
impl AnnotatedObject for BTreeMap<String, String> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn set_annotation(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }

    fn remove_annotation(&mut self, key: &str) {
        self.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_annotation_access() {
        let mut object = BTreeMap::new();
        assert_eq!(object.annotation("k"), None);

        object.set_annotation("k", "v".to_string());
        assert_eq!(object.annotation("k"), Some("v"));

        object.remove_annotation("k");
        assert_eq!(object.annotation("k"), None);
    }
}
