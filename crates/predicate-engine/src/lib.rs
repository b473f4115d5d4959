pub mod compile;
pub mod convert;
pub mod error;
mod factory;
pub mod path;
pub mod projection;
pub mod validate;

pub use compile::{CompiledPredicate, PredicateCompiler};
pub use convert::{DefaultConverter, ValueConverter};
pub use error::{PredicateError, Result};
pub use path::{PathResolver, ResolvedAccessor};
pub use projection::{CompiledProjection, ProjectionCompiler};
pub use validate::{ComparisonValidator, DefaultValidator};
