//! Pure domain types.

mod dependency;

pub use dependency::{Dependency, DependencyKind, DependencyStatus};
