use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// One record instance of a known record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub record_type: String,
    pub fields: Vec<FieldValue>,
}

impl Record {
    pub fn new(record_type: &str, fields: Vec<FieldValue>) -> Self {
        Record {
            record_type: record_type.to_string(),
            fields,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    /// Non-null value of a field. A missing field and an explicit Null both
    /// yield None.
    pub fn value_of(&self, field: &str) -> Option<&Value> {
        self.get(field)
            .and_then(|f| f.value.as_ref())
            .filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field_type::FieldType;

    #[test]
    fn test_get_is_case_insensitive() {
        let record = Record::new(
            "user",
            vec![FieldValue::new(
                "name",
                Some(Value::String("Ada".to_string())),
                FieldType::String,
            )],
        );

        assert!(record.get("NAME").is_some());
        assert!(record.get("email").is_none());
    }

    #[test]
    fn test_value_of_normalizes_null() {
        let record = Record::new(
            "user",
            vec![
                FieldValue::new("a", None, FieldType::String),
                FieldValue::new("b", Some(Value::Null), FieldType::String),
                FieldValue::new("c", Some(Value::Int(1)), FieldType::Int),
            ],
        );

        assert_eq!(record.value_of("a"), None);
        assert_eq!(record.value_of("b"), None);
        assert_eq!(record.value_of("c"), Some(&Value::Int(1)));
        assert_eq!(record.value_of("missing"), None);
    }
}
