//! Error types for furniture factories.

use crate::model::{Category, Family};
use thiserror::Error;

/// Errors raised while binding a factory to a catalog.
///
/// Both are construction-time failures: once a [`FamilyFactory`](super::FamilyFactory)
/// exists, every `create` call succeeds.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FactoryError {
    /// The catalog has no constructor for this family and category.
    #[error("Unsupported category: no {category} registered for family {family}")]
    UnsupportedCategory { family: Family, category: Category },

    /// A registered constructor produced an item from the wrong family or category.
    #[error("Family mismatch: constructor for {family} {category} produced a {produced_family} {produced_category}")]
    FamilyMismatch {
        family: Family,
        category: Category,
        produced_family: Family,
        produced_category: Category,
    },
}
