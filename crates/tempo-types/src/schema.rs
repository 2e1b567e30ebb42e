use serde_json::Value;

/// Value shape of a mutable record attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text. Zero value is the empty string.
    Text,
    /// RFC3339 date. Zero value is JSON null (never set).
    Date,
}

/// One entry in the static schema table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    /// The value an attribute holds before it has ever been set, and the
    /// value an explicit null in an update payload clears it back to.
    pub fn zero_value(&self) -> Value {
        match self.kind {
            FieldKind::Text => Value::String(String::new()),
            FieldKind::Date => Value::Null,
        }
    }
}

/// The fixed set of mutable record attributes.
///
/// This table is the single source of truth for which payload keys the
/// system accepts. The sanitizer, the merge engine, and serialization all
/// consult it; keys not listed here are dropped at the boundary.
pub const MUTABLE_FIELDS: [FieldDef; 11] = [
    FieldDef { name: "first_name", kind: FieldKind::Text },
    FieldDef { name: "middle_name", kind: FieldKind::Text },
    FieldDef { name: "last_name", kind: FieldKind::Text },
    FieldDef { name: "email", kind: FieldKind::Text },
    FieldDef { name: "dob", kind: FieldKind::Date },
    FieldDef { name: "phone", kind: FieldKind::Text },
    FieldDef { name: "street", kind: FieldKind::Text },
    FieldDef { name: "city", kind: FieldKind::Text },
    FieldDef { name: "state", kind: FieldKind::Text },
    FieldDef { name: "zip", kind: FieldKind::Text },
    FieldDef { name: "country", kind: FieldKind::Text },
];

/// Look up a schema entry by attribute name.
pub fn field_def(name: &str) -> Option<&'static FieldDef> {
    MUTABLE_FIELDS.iter().find(|def| def.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_resolve() {
        let def = field_def("email").expect("email is in the schema");
        assert_eq!(def.kind, FieldKind::Text);
        assert_eq!(field_def("dob").unwrap().kind, FieldKind::Date);
    }

    #[test]
    fn unknown_fields_do_not_resolve() {
        assert!(field_def("password").is_none());
        assert!(field_def("").is_none());
        assert!(field_def("Email").is_none()); // names are case-sensitive
    }

    #[test]
    fn zero_values_match_kind() {
        assert_eq!(
            field_def("city").unwrap().zero_value(),
            Value::String(String::new())
        );
        assert_eq!(field_def("dob").unwrap().zero_value(), Value::Null);
    }

    #[test]
    fn table_has_no_duplicate_names() {
        for (i, a) in MUTABLE_FIELDS.iter().enumerate() {
            for b in &MUTABLE_FIELDS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
