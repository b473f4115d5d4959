use crate::{core::field_type::FieldType, records::record::Record};
use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use uuid::Uuid;

/// Runtime value carried by a record field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Decimal(BigDecimal),
    String(String),
    Boolean(bool),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Json(serde_json::Value),
    Record(Record),
    Null,
}

impl Value {
    /// Borrow the textual payload without allocating.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Same-category comparison. Numeric values compare across Int, Float
    /// and Decimal through f64; incomparable pairs (including anything
    /// against Null) yield None.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Decimal(a), Decimal(b)) => Some(a.cmp(b)),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)),
            (Int(_), Decimal(_))
            | (Decimal(_), Int(_))
            | (Float(_), Decimal(_))
            | (Decimal(_), Float(_)) => {
                let l = self.as_f64()?;
                let r = other.as_f64()?;
                l.partial_cmp(&r)
            }
            (String(a), String(b)) => Some(a.cmp(b)),
            (Boolean(a), Boolean(b)) => Some(a.cmp(b)),
            (Uuid(a), Uuid(b)) => Some(a.cmp(b)),
            (Date(a), Date(b)) => Some(a.cmp(b)),
            (Timestamp(a), Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub fn equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Json(a), Value::Json(b)) => a == b,
            _ => self.compare(other) == Some(Ordering::Equal),
        }
    }

    /// Parse a string as a value of the given field type.
    /// Composite targets have no string form and always yield None.
    pub fn parse_as(raw: &str, target: &FieldType) -> Option<Value> {
        match target {
            FieldType::String => Some(Value::String(raw.to_string())),
            FieldType::Int => raw.trim().parse::<i64>().ok().map(Value::Int),
            FieldType::Float => raw.trim().parse::<f64>().ok().map(Value::Float),
            FieldType::Decimal => raw.trim().parse::<BigDecimal>().ok().map(Value::Decimal),
            FieldType::Boolean => match raw.trim().to_lowercase().as_str() {
                "true" | "1" => Some(Value::Boolean(true)),
                "false" | "0" => Some(Value::Boolean(false)),
                _ => None,
            },
            FieldType::Date => raw.trim().parse::<NaiveDate>().ok().map(Value::Date),
            FieldType::Timestamp => DateTime::parse_from_rfc3339(raw.trim())
                .ok()
                .map(|t| Value::Timestamp(t.with_timezone(&Utc))),
            FieldType::Uuid => Uuid::parse_str(raw.trim()).ok().map(Value::Uuid),
            FieldType::Json => serde_json::from_str(raw).ok().map(Value::Json),
            FieldType::Record(_) => None,
        }
    }

    /// Type descriptor of this value. Null carries no type, and a nested
    /// record's schema is not recoverable from the value alone.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Value::Int(_) => Some(FieldType::Int),
            Value::Float(_) => Some(FieldType::Float),
            Value::Decimal(_) => Some(FieldType::Decimal),
            Value::String(_) => Some(FieldType::String),
            Value::Boolean(_) => Some(FieldType::Boolean),
            Value::Uuid(_) => Some(FieldType::Uuid),
            Value::Date(_) => Some(FieldType::Date),
            Value::Timestamp(_) => Some(FieldType::Timestamp),
            Value::Json(_) => Some(FieldType::Json),
            Value::Record(_) | Value::Null => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "'{v}'"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "{v}"),
            Value::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Json(v) => write!(f, "{v}"),
            Value::Record(v) => write!(f, "[{} record]", v.record_type),
            Value::Null => write!(f, "NULL"),
        }
    }
}

/// One named, typed field of a record instance. An absent value and an
/// explicit Null are equivalent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: Option<Value>,
    pub field_type: FieldType,
}

impl FieldValue {
    pub fn new(name: &str, value: Option<Value>, field_type: FieldType) -> Self {
        FieldValue {
            name: name.to_string(),
            value,
            field_type,
        }
    }

    pub fn value_field_type(&self) -> Option<FieldType> {
        self.value.as_ref().and_then(|v| v.field_type())
    }
}
