use crate::core::field_type::FieldType;
use serde::{Deserialize, Serialize};

/// A named, fixed record schema. Shapes never change after construction;
/// path resolution relies on that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordType {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
}

impl RecordType {
    pub fn new(name: &str, fields: Vec<FieldDef>) -> Self {
        RecordType {
            name: name.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

impl FieldDef {
    pub fn new(name: &str, field_type: FieldType) -> Self {
        FieldDef {
            name: name.to_string(),
            field_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup_is_case_insensitive() {
        let record_type = RecordType::new(
            "user",
            vec![
                FieldDef::new("name", FieldType::String),
                FieldDef::new("age", FieldType::Int),
            ],
        );

        assert_eq!(record_type.field("NAME").map(|f| f.name.as_str()), Some("name"));
        assert_eq!(
            record_type.field("Age").map(|f| &f.field_type),
            Some(&FieldType::Int)
        );
        assert!(record_type.field("email").is_none());
    }
}
