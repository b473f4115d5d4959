use crate::{error::Result, path::PathResolver};
use model::{core::value::Value, records::record::Record};
use std::sync::Arc;

/// A compiled field accessor: exposes one field's value as a generic
/// `Value` for sorting and selection contexts. No boolean logic involved.
pub struct CompiledProjection {
    get: Box<dyn Fn(&Record) -> Value + Send + Sync>,
}

impl CompiledProjection {
    pub fn get(&self, record: &Record) -> Value {
        (self.get)(record)
    }
}

impl std::fmt::Debug for CompiledProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledProjection").finish_non_exhaustive()
    }
}

/// Compiles dotted paths into value accessors, sharing the predicate
/// compiler's resolver and path cache.
pub struct ProjectionCompiler {
    resolver: Arc<PathResolver>,
}

impl ProjectionCompiler {
    pub fn new(resolver: Arc<PathResolver>) -> Self {
        ProjectionCompiler { resolver }
    }

    pub fn compile_accessor(&self, path: &str) -> Result<CompiledProjection> {
        let accessor = self.resolver.resolve(path)?;
        Ok(CompiledProjection {
            get: Box::new(move |record| {
                accessor.extract(record).cloned().unwrap_or(Value::Null)
            }),
        })
    }
}
