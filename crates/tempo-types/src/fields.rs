use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::schema::{field_def, FieldDef, MUTABLE_FIELDS};

/// Fully-materialized attribute map for one record version.
///
/// Every attribute from [`MUTABLE_FIELDS`] is always present; a field that
/// was never set (or was cleared by an explicit null) holds its zero value.
/// Full materialization is what lets a single version answer an as-of query
/// on its own, without replaying earlier versions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldSet(BTreeMap<String, Value>);

impl FieldSet {
    /// A field set with every mutable attribute at its zero value.
    pub fn zeroed() -> Self {
        let mut map = BTreeMap::new();
        for def in &MUTABLE_FIELDS {
            map.insert(def.name.to_string(), def.zero_value());
        }
        Self(map)
    }

    /// Value of a mutable attribute. `None` only for names outside the
    /// schema table; every schema attribute is always present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set an attribute. An explicit null is stored as the field's zero
    /// value, so a materialized set never distinguishes "cleared" from
    /// "never set".
    pub fn set(&mut self, def: &FieldDef, value: Value) {
        let value = if value.is_null() { def.zero_value() } else { value };
        self.0.insert(def.name.to_string(), value);
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.0
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<'de> Deserialize<'de> for FieldSet {
    /// Re-materializes on the way in: keys outside the schema are dropped,
    /// missing schema keys come back at their zero value.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut fields = FieldSet::zeroed();
        for (name, value) in raw {
            if let Some(def) = field_def(&name) {
                fields.set(def, value);
            }
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zeroed_contains_every_schema_field() {
        let fields = FieldSet::zeroed();
        for def in &MUTABLE_FIELDS {
            assert_eq!(fields.get(def.name), Some(&def.zero_value()));
        }
        assert_eq!(fields.as_map().len(), MUTABLE_FIELDS.len());
    }

    #[test]
    fn set_overwrites_and_null_clears() {
        let mut fields = FieldSet::zeroed();
        let email = field_def("email").unwrap();

        fields.set(email, json!("a@b.example"));
        assert_eq!(fields.get("email"), Some(&json!("a@b.example")));

        fields.set(email, Value::Null);
        assert_eq!(fields.get("email"), Some(&json!("")));
    }

    #[test]
    fn null_clears_date_to_null_zero() {
        let mut fields = FieldSet::zeroed();
        let dob = field_def("dob").unwrap();

        fields.set(dob, json!("1990-01-02T00:00:00Z"));
        fields.set(dob, Value::Null);
        assert_eq!(fields.get("dob"), Some(&Value::Null));
    }

    #[test]
    fn serialize_is_a_flat_object() {
        let mut fields = FieldSet::zeroed();
        fields.set(field_def("first_name").unwrap(), json!("Ada"));

        let value = serde_json::to_value(&fields).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), MUTABLE_FIELDS.len());
        assert_eq!(object["first_name"], json!("Ada"));
        assert_eq!(object["last_name"], json!(""));
    }

    #[test]
    fn deserialize_rematerializes_missing_keys() {
        let fields: FieldSet = serde_json::from_value(json!({
            "first_name": "Ada",
            "favorite_color": "green"
        }))
        .unwrap();

        assert_eq!(fields.get("first_name"), Some(&json!("Ada")));
        // Unknown key dropped, missing keys restored at zero.
        assert_eq!(fields.get("favorite_color"), None);
        assert_eq!(fields.get("zip"), Some(&json!("")));
        assert_eq!(fields.as_map().len(), MUTABLE_FIELDS.len());
    }

    #[test]
    fn serde_round_trip() {
        let mut fields = FieldSet::zeroed();
        fields.set(field_def("city").unwrap(), json!("Lisbon"));
        fields.set(field_def("dob").unwrap(), json!("1985-05-05T00:00:00Z"));

        let text = serde_json::to_string(&fields).unwrap();
        let back: FieldSet = serde_json::from_str(&text).unwrap();
        assert_eq!(back, fields);
    }
}
