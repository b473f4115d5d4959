use crate::schema::record_type::RecordType;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, sync::Arc};

/// Schema-side type descriptor of a record field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FieldType {
    String,
    Int,
    Float,
    Decimal,
    Boolean,
    Date,
    Timestamp,
    Uuid,
    Json,
    Record(Arc<RecordType>),
}

/// Comparison capability of a field type. Resolved once per path and reused
/// by every predicate compiled against that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// Case-mode-aware equality and substring tests.
    Textual,
    /// Equality and ordering.
    Ordered,
    /// Equality only.
    EqualityOnly,
    /// Nested record; not comparable.
    Composite,
}

lazy_static! {
    static ref SCALAR_TYPE_MAP: HashMap<&'static str, FieldType> = build_scalar_type_map();
}

impl FieldType {
    pub fn category(&self) -> TypeCategory {
        match self {
            FieldType::String => TypeCategory::Textual,
            FieldType::Int
            | FieldType::Float
            | FieldType::Decimal
            | FieldType::Date
            | FieldType::Timestamp => TypeCategory::Ordered,
            FieldType::Boolean | FieldType::Uuid | FieldType::Json => TypeCategory::EqualityOnly,
            FieldType::Record(_) => TypeCategory::Composite,
        }
    }

    /// Parse a scalar type name as declared by a schema description.
    pub fn parse(type_name: &str) -> Result<Self, String> {
        let normalized = type_name.trim().to_uppercase();
        SCALAR_TYPE_MAP
            .get(normalized.as_str())
            .cloned()
            .ok_or_else(|| format!("Unknown field type: {type_name}"))
    }
}

impl TryFrom<&str> for FieldType {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        FieldType::parse(s)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "STRING"),
            FieldType::Int => write!(f, "INT"),
            FieldType::Float => write!(f, "FLOAT"),
            FieldType::Decimal => write!(f, "DECIMAL"),
            FieldType::Boolean => write!(f, "BOOLEAN"),
            FieldType::Date => write!(f, "DATE"),
            FieldType::Timestamp => write!(f, "TIMESTAMP"),
            FieldType::Uuid => write!(f, "UUID"),
            FieldType::Json => write!(f, "JSON"),
            FieldType::Record(record_type) => write!(f, "RECORD<{}>", record_type.name),
        }
    }
}

fn build_scalar_type_map() -> HashMap<&'static str, FieldType> {
    use FieldType::*;

    let entries = [
        ("STRING", String),
        ("TEXT", String),
        ("VARCHAR", String),
        ("INT", Int),
        ("INTEGER", Int),
        ("BIGINT", Int),
        ("FLOAT", Float),
        ("DOUBLE", Float),
        ("DECIMAL", Decimal),
        ("NUMERIC", Decimal),
        ("BOOLEAN", Boolean),
        ("BOOL", Boolean),
        ("DATE", Date),
        ("TIMESTAMP", Timestamp),
        ("DATETIME", Timestamp),
        ("UUID", Uuid),
        ("JSON", Json),
    ];

    let mut map = HashMap::new();
    for (name, field_type) in entries {
        map.insert(name, field_type);
    }
    map
}
