use crate::{
    convert::{DefaultConverter, ValueConverter},
    error::{PredicateError, Result},
    factory::{self, PredicateFn},
    path::PathResolver,
    validate::{ComparisonValidator, DefaultValidator},
};
use model::{
    core::field_type::TypeCategory,
    filter::descriptor::FilterDescriptor,
    records::record::Record,
};
use std::sync::Arc;
use tracing::debug;

/// A compiled filter: a pure, reentrant boolean test over one record
/// instance. Holds no state beyond the closed-over constants and the shared
/// accessor, so it is safe to invoke concurrently.
pub struct CompiledPredicate {
    test: PredicateFn,
}

impl CompiledPredicate {
    pub fn matches(&self, record: &Record) -> bool {
        (self.test)(record)
    }
}

impl std::fmt::Debug for CompiledPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledPredicate").finish_non_exhaustive()
    }
}

/// Turns one `FilterDescriptor` into a `CompiledPredicate` for the
/// resolver's record type: resolve the path, validate the combination,
/// check arity, then build the comparison closure.
pub struct PredicateCompiler {
    resolver: Arc<PathResolver>,
    validator: Box<dyn ComparisonValidator>,
    converter: Box<dyn ValueConverter>,
}

impl PredicateCompiler {
    pub fn new(resolver: Arc<PathResolver>) -> Self {
        Self::with_collaborators(resolver, Box::new(DefaultValidator), Box::new(DefaultConverter))
    }

    pub fn with_collaborators(
        resolver: Arc<PathResolver>,
        validator: Box<dyn ComparisonValidator>,
        converter: Box<dyn ValueConverter>,
    ) -> Self {
        PredicateCompiler {
            resolver,
            validator,
            converter,
        }
    }

    pub fn compile(&self, descriptor: &FilterDescriptor) -> Result<CompiledPredicate> {
        let accessor = self.resolver.resolve(&descriptor.path)?;

        let test = if accessor.field_type().category() == TypeCategory::Textual {
            let case_mode = descriptor.case_mode.unwrap_or_default();
            self.validator
                .validate_string(&descriptor.path, descriptor.comparison, case_mode)?;
            check_arity(descriptor)?;
            factory::build_string(accessor, descriptor.comparison, &descriptor.values, case_mode)?
        } else {
            self.validator.validate_object(
                &descriptor.path,
                accessor.field_type(),
                descriptor.comparison,
                descriptor.case_mode,
            )?;
            check_arity(descriptor)?;
            factory::build_object(
                accessor,
                descriptor.comparison,
                &descriptor.values,
                self.converter.as_ref(),
            )?
        };

        debug!(
            "Compiled {:?} filter on '{}'",
            descriptor.comparison, descriptor.path
        );

        Ok(CompiledPredicate { test })
    }
}

fn check_arity(descriptor: &FilterDescriptor) -> Result<()> {
    if descriptor.comparison.takes_value_set() || descriptor.values.len() == 1 {
        return Ok(());
    }
    Err(PredicateError::Arity {
        comparison: descriptor.comparison,
        actual: descriptor.values.len(),
    })
}
