use crate::{
    convert::ValueConverter,
    error::{PredicateError, Result},
    path::ResolvedAccessor,
};
use model::{
    core::value::Value,
    filter::descriptor::{CaseMode, ComparisonOp},
    records::record::Record,
};
use std::{cmp::Ordering, sync::Arc};

/// Boxed boolean test over one record instance.
pub(crate) type PredicateFn = Box<dyn Fn(&Record) -> bool + Send + Sync>;

/// Build the boolean expression for a textual field.
///
/// Every test is null-guarded: a null field never equals, starts with, ends
/// with, or contains anything. `NotEqual` is the exact negation of `Equal`,
/// so a null field is not-equal to every candidate value.
pub(crate) fn build_string(
    accessor: Arc<ResolvedAccessor>,
    comparison: ComparisonOp,
    values: &[String],
    case_mode: CaseMode,
) -> Result<PredicateFn> {
    match comparison {
        ComparisonOp::Equal => {
            string_test(accessor, comparison, values, move |field, value| {
                case_mode.eq(field, value)
            })
        }
        ComparisonOp::NotEqual => {
            let equal = string_test(accessor, comparison, values, move |field, value| {
                case_mode.eq(field, value)
            })?;
            Ok(Box::new(move |record| !equal(record)))
        }
        ComparisonOp::StartsWith => {
            string_test(accessor, comparison, values, move |field, value| {
                case_mode.starts_with(field, value)
            })
        }
        ComparisonOp::EndsWith => {
            string_test(accessor, comparison, values, move |field, value| {
                case_mode.ends_with(field, value)
            })
        }
        ComparisonOp::Contains => {
            string_test(accessor, comparison, values, move |field, value| {
                case_mode.contains(field, value)
            })
        }
        // any candidate matches; an empty set matches nothing
        ComparisonOp::In => {
            let candidates = values.to_vec();
            Ok(Box::new(move |record| {
                accessor
                    .extract(record)
                    .and_then(Value::as_str)
                    .is_some_and(|field| {
                        candidates.iter().any(|candidate| case_mode.eq(field, candidate))
                    })
            }))
        }
        _ => Err(PredicateError::UnsupportedOperator {
            comparison,
            branch: "string",
        }),
    }
}

/// Build the comparison for a non-textual field. Value strings are converted
/// to the field's type up front; a comparison against a null or incomparable
/// field evaluates false.
pub(crate) fn build_object(
    accessor: Arc<ResolvedAccessor>,
    comparison: ComparisonOp,
    values: &[String],
    converter: &dyn ValueConverter,
) -> Result<PredicateFn> {
    match comparison {
        ComparisonOp::Equal => {
            let constant = converter.convert_one(single(comparison, values)?, accessor.field_type())?;
            Ok(Box::new(move |record| {
                accessor
                    .extract(record)
                    .is_some_and(|field| field.equal(&constant))
            }))
        }
        ComparisonOp::NotEqual => {
            let constant = converter.convert_one(single(comparison, values)?, accessor.field_type())?;
            Ok(Box::new(move |record| {
                !accessor
                    .extract(record)
                    .is_some_and(|field| field.equal(&constant))
            }))
        }
        ComparisonOp::GreaterThan => {
            ordered_test(accessor, comparison, values, converter, |o| {
                o == Ordering::Greater
            })
        }
        ComparisonOp::GreaterThanOrEqual => {
            ordered_test(accessor, comparison, values, converter, |o| {
                o != Ordering::Less
            })
        }
        ComparisonOp::LessThan => {
            ordered_test(accessor, comparison, values, converter, |o| {
                o == Ordering::Less
            })
        }
        ComparisonOp::LessThanOrEqual => {
            ordered_test(accessor, comparison, values, converter, |o| {
                o != Ordering::Greater
            })
        }
        ComparisonOp::In => {
            let candidates = converter.convert_many(values, accessor.field_type())?;
            Ok(Box::new(move |record| {
                accessor.extract(record).is_some_and(|field| {
                    candidates.iter().any(|candidate| field.equal(candidate))
                })
            }))
        }
        _ => Err(PredicateError::UnsupportedOperator {
            comparison,
            branch: "object",
        }),
    }
}

fn string_test<F>(
    accessor: Arc<ResolvedAccessor>,
    comparison: ComparisonOp,
    values: &[String],
    test: F,
) -> Result<PredicateFn>
where
    F: Fn(&str, &str) -> bool + Send + Sync + 'static,
{
    let value = single(comparison, values)?.clone();
    Ok(Box::new(move |record| {
        accessor
            .extract(record)
            .and_then(Value::as_str)
            .is_some_and(|field| test(field, &value))
    }))
}

fn ordered_test(
    accessor: Arc<ResolvedAccessor>,
    comparison: ComparisonOp,
    values: &[String],
    converter: &dyn ValueConverter,
    accept: fn(Ordering) -> bool,
) -> Result<PredicateFn> {
    let constant = converter.convert_one(single(comparison, values)?, accessor.field_type())?;
    Ok(Box::new(move |record| {
        accessor
            .extract(record)
            .and_then(|field| field.compare(&constant))
            .is_some_and(accept)
    }))
}

fn single(comparison: ComparisonOp, values: &[String]) -> Result<&String> {
    match values {
        [value] => Ok(value),
        _ => Err(PredicateError::Arity {
            comparison,
            actual: values.len(),
        }),
    }
}
