use crate::error::{PredicateError, Result};
use model::{
    core::{field_type::FieldType, value::Value},
    records::record::Record,
    schema::record_type::RecordType,
};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tracing::debug;

/// The cached result of translating a dotted field path into a typed
/// field-access chain for one record type.
///
/// Immutable once built; shared behind `Arc` by every predicate and
/// projection compiled for the same path.
#[derive(Debug)]
pub struct ResolvedAccessor {
    path: String,
    segments: Vec<String>,
    field_type: FieldType,
}

impl ResolvedAccessor {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Walk the access chain on a record instance.
    ///
    /// Yields None for a missing field, an explicit null, and a null
    /// intermediate record; a predicate treats all three as a null field.
    pub fn extract<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        let first = self.segments.first()?;
        let mut current = record.value_of(first)?;
        for segment in &self.segments[1..] {
            match current {
                Value::Record(nested) => current = nested.value_of(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }
}

/// Resolves dotted field paths against one record type, memoizing the
/// resolved accessor per path for the life of the resolver.
///
/// The cache is unbounded; its key set is the application's own field
/// paths. Do not feed it arbitrary caller-controlled paths.
pub struct PathResolver {
    record_type: Arc<RecordType>,
    cache: RwLock<HashMap<String, Arc<ResolvedAccessor>>>,
}

impl PathResolver {
    pub fn new(record_type: Arc<RecordType>) -> Self {
        PathResolver {
            record_type,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    /// Resolve a dotted path to its cached accessor, building it on first
    /// use. Concurrent callers may race to build an unseen path; the first
    /// insert wins and every caller observes that one instance afterwards.
    pub fn resolve(&self, path: &str) -> Result<Arc<ResolvedAccessor>> {
        if let Some(hit) = self.cache.read().unwrap().get(path) {
            return Ok(hit.clone());
        }

        let accessor = Arc::new(self.build(path)?);
        let mut cache = self.cache.write().unwrap();
        Ok(cache.entry(path.to_string()).or_insert(accessor).clone())
    }

    fn build(&self, path: &str) -> Result<ResolvedAccessor> {
        let mut segments = Vec::new();
        let mut current_type = Arc::clone(&self.record_type);
        let mut leaf_type: Option<FieldType> = None;

        for raw in path.split('.') {
            match leaf_type.take() {
                // descending is only possible through a nested record field
                Some(FieldType::Record(nested)) => current_type = nested,
                Some(_) => return Err(self.unknown_field(path, raw)),
                None => {}
            }

            let field = current_type
                .field(raw)
                .ok_or_else(|| self.unknown_field(path, raw))?;
            segments.push(field.name.clone());
            leaf_type = Some(field.field_type.clone());
        }

        let field_type = match leaf_type {
            Some(t) => t,
            None => return Err(self.unknown_field(path, path)),
        };

        debug!(
            "Resolved path '{}' on '{}' as {}",
            path, self.record_type.name, field_type
        );

        Ok(ResolvedAccessor {
            path: path.to_string(),
            segments,
            field_type,
        })
    }

    fn unknown_field(&self, path: &str, segment: &str) -> PredicateError {
        PredicateError::UnknownField {
            path: path.to_string(),
            segment: segment.to_string(),
            record_type: self.record_type.name.clone(),
        }
    }
}
