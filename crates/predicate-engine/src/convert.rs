use crate::error::{PredicateError, Result};
use model::core::{field_type::FieldType, value::Value};

/// Converts caller-supplied value strings into typed values for non-textual
/// comparisons. The query layer can install its own conversion policy;
/// `DefaultConverter` parses with the model's own value grammar.
pub trait ValueConverter: Send + Sync {
    fn convert_one(&self, raw: &str, target: &FieldType) -> Result<Value>;

    fn convert_many(&self, raw: &[String], target: &FieldType) -> Result<Vec<Value>> {
        raw.iter().map(|v| self.convert_one(v, target)).collect()
    }
}

pub struct DefaultConverter;

impl ValueConverter for DefaultConverter {
    fn convert_one(&self, raw: &str, target: &FieldType) -> Result<Value> {
        Value::parse_as(raw, target).ok_or_else(|| PredicateError::Conversion {
            value: raw.to_string(),
            target: target.to_string(),
        })
    }
}
