use crate::error::{PredicateError, Result};
use model::{
    core::field_type::{FieldType, TypeCategory},
    filter::descriptor::{CaseMode, ComparisonOp},
};

/// Rejects operator/type/case-mode combinations before any expression is
/// built. The data-access layer can install a stricter policy;
/// `DefaultValidator` covers the semantic rules.
pub trait ComparisonValidator: Send + Sync {
    /// Legality of a comparison against a textual field.
    fn validate_string(
        &self,
        path: &str,
        comparison: ComparisonOp,
        case_mode: CaseMode,
    ) -> Result<()>;

    /// Legality of a comparison against a non-textual field. An explicit
    /// case mode is part of what gets validated here.
    fn validate_object(
        &self,
        path: &str,
        field_type: &FieldType,
        comparison: ComparisonOp,
        explicit_case: Option<CaseMode>,
    ) -> Result<()>;
}

pub struct DefaultValidator;

impl ComparisonValidator for DefaultValidator {
    fn validate_string(
        &self,
        path: &str,
        comparison: ComparisonOp,
        _case_mode: CaseMode,
    ) -> Result<()> {
        if comparison.is_ordering() {
            return Err(invalid(
                path,
                comparison,
                "ordering is not defined for a STRING field",
            ));
        }
        Ok(())
    }

    fn validate_object(
        &self,
        path: &str,
        field_type: &FieldType,
        comparison: ComparisonOp,
        explicit_case: Option<CaseMode>,
    ) -> Result<()> {
        if explicit_case.is_some() {
            return Err(invalid(
                path,
                comparison,
                format!("case mode is only meaningful for STRING fields, field is {field_type}"),
            ));
        }
        if comparison.is_substring() {
            return Err(invalid(
                path,
                comparison,
                format!("{comparison:?} requires a STRING field, field is {field_type}"),
            ));
        }
        match field_type.category() {
            TypeCategory::Composite => Err(invalid(
                path,
                comparison,
                "nested record fields cannot be compared",
            )),
            TypeCategory::EqualityOnly if comparison.is_ordering() => Err(invalid(
                path,
                comparison,
                format!("{field_type} fields support equality only"),
            )),
            _ => Ok(()),
        }
    }
}

fn invalid(path: &str, comparison: ComparisonOp, detail: impl Into<String>) -> PredicateError {
    PredicateError::Validation {
        path: path.to_string(),
        comparison,
        detail: detail.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_rejected_on_string() {
        let validator = DefaultValidator;
        assert!(validator
            .validate_string("name", ComparisonOp::GreaterThan, CaseMode::default())
            .is_err());
        assert!(validator
            .validate_string("name", ComparisonOp::Contains, CaseMode::Ordinal)
            .is_ok());
    }

    #[test]
    fn test_substring_rejected_on_non_string() {
        let validator = DefaultValidator;
        assert!(validator
            .validate_object("age", &FieldType::Int, ComparisonOp::StartsWith, None)
            .is_err());
        assert!(validator
            .validate_object("age", &FieldType::Int, ComparisonOp::GreaterThan, None)
            .is_ok());
    }

    #[test]
    fn test_explicit_case_mode_rejected_on_non_string() {
        let validator = DefaultValidator;
        let err = validator
            .validate_object(
                "age",
                &FieldType::Int,
                ComparisonOp::Equal,
                Some(CaseMode::Ordinal),
            )
            .unwrap_err();
        assert!(matches!(err, PredicateError::Validation { .. }));
    }

    #[test]
    fn test_ordering_rejected_on_equality_only_types() {
        let validator = DefaultValidator;
        assert!(validator
            .validate_object("active", &FieldType::Boolean, ComparisonOp::LessThan, None)
            .is_err());
        assert!(validator
            .validate_object("active", &FieldType::Boolean, ComparisonOp::Equal, None)
            .is_ok());
        assert!(validator
            .validate_object("id", &FieldType::Uuid, ComparisonOp::In, None)
            .is_ok());
    }

    #[test]
    fn test_composite_fields_not_comparable() {
        use model::schema::record_type::RecordType;
        use std::sync::Arc;

        let validator = DefaultValidator;
        let nested = FieldType::Record(Arc::new(RecordType::new("address", vec![])));
        assert!(validator
            .validate_object("address", &nested, ComparisonOp::Equal, None)
            .is_err());
    }
}
