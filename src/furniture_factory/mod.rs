//! Family-consistent furniture factories.
//!
//! A [`FamilyFactory`] is bound to exactly one [`Family`] when it is built and can never
//! hand out an item from another family. Switching families means building another
//! factory.
//!
//! Concrete items are not modelled as one type per family and category. Instead a
//! [`Catalog`] maps each `(Family, Category)` pair to a constructor, and the factory
//! resolves its family's row once, at construction time.

pub mod catalog;
pub mod error;

pub use catalog::*;
pub use error::*;

use crate::model::{Category, Family, FurnitureItem};
use tracing::{debug, info, warn};

/// Declares [`FurnitureFactory`] with one provided `create_<category>` method per category.
macro_rules! furniture_factory {
    ($($category:ident),+ $(,)?) => {
        paste::paste! {
            /// Produces one item of each known category, all from the same family.
            ///
            /// Implementors only provide [`family`](Self::family) and
            /// [`create`](Self::create); the per-category helpers forward to `create`.
            pub trait FurnitureFactory: Send + Sync {
                /// The family every item from this factory belongs to.
                fn family(&self) -> Family;

                /// Creates a fresh item of `category`. Never fails.
                fn create(&self, category: Category) -> FurnitureItem;

                $(
                    fn [<create_ $category:snake>](&self) -> FurnitureItem {
                        self.create(Category::$category)
                    }
                )+
            }
        }
    };
}

furniture_factory!(Chair, Table, Sofa);

/// The concrete factory: one family, one resolved constructor per category.
#[derive(Debug, Clone)]
pub struct FamilyFactory {
    family: Family,
    // Indexed in `Category::ALL` order.
    constructors: Vec<Constructor>,
}

impl FamilyFactory {
    /// Builds a factory for `family` backed by the global catalog.
    pub fn new(family: Family) -> Self {
        let catalog = Catalog::global();
        let constructors = Category::ALL
            .iter()
            .map(|&category| match catalog.lookup(family, category) {
                Ok(build) => build,
                // The global catalog is the complete standard table.
                Err(_) => unreachable!("standard catalog is missing {family} {category}"),
            })
            .collect();
        info!(%family, "Factory ready");
        Self { family, constructors }
    }

    /// Builds a factory for `family` from a caller-supplied catalog.
    ///
    /// # Errors
    /// - [`FactoryError::UnsupportedCategory`] if any category has no constructor.
    /// - [`FactoryError::FamilyMismatch`] if a constructor builds an item from another
    ///   family or category.
    pub fn with_catalog(family: Family, catalog: &Catalog) -> Result<Self, FactoryError> {
        let mut constructors = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let build = catalog.lookup(family, category).inspect_err(|e| {
                warn!(%family, %category, error = %e, "Catalog incomplete");
            })?;

            let sample = build();
            if sample.family() != family || sample.category() != category {
                let err = FactoryError::FamilyMismatch {
                    family,
                    category,
                    produced_family: sample.family(),
                    produced_category: sample.category(),
                };
                warn!(%family, %category, error = %err, "Catalog inconsistent");
                return Err(err);
            }
            constructors.push(build);
        }
        info!(%family, "Factory ready");
        Ok(Self { family, constructors })
    }
}

impl FurnitureFactory for FamilyFactory {
    fn family(&self) -> Family {
        self.family
    }

    fn create(&self, category: Category) -> FurnitureItem {
        let item = (self.constructors[category.index()])();
        debug!(family = %self.family, %category, "Create");
        item
    }
}
