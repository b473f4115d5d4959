use model::filter::descriptor::ComparisonOp;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredicateError {
    #[error("Unknown field '{segment}' in path '{path}' on record type '{record_type}'")]
    UnknownField {
        path: String,
        segment: String,
        record_type: String,
    },

    #[error("Invalid comparison {comparison:?} on '{path}': {detail}")]
    Validation {
        path: String,
        comparison: ComparisonOp,
        detail: String,
    },

    #[error("Cannot convert '{value}' to {target}")]
    Conversion { value: String, target: String },

    #[error("{comparison:?} expects exactly one value, got {actual}")]
    Arity {
        comparison: ComparisonOp,
        actual: usize,
    },

    #[error("Operator {comparison:?} reached the {branch} comparison branch")]
    UnsupportedOperator {
        comparison: ComparisonOp,
        branch: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, PredicateError>;
