//! Data-driven lookup from `(Family, Category)` to a constructor.
//!
//! The process-wide catalog is created lazily on first use by [`Catalog::global`] and
//! lives until the process exits. Callers that want isolation (tests, custom ranges)
//! build their own with [`Catalog::standard`] or [`Catalog::empty`].

use super::FactoryError;
use crate::model::{Category, Family, FurnitureItem};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Builds one item of a fixed family and category.
pub type Constructor = fn() -> FurnitureItem;

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Expands to a `(Family, Category, Constructor)` triple backed by a local fn item.
macro_rules! entry {
    ($family:ident, $category:ident) => {{
        fn build() -> FurnitureItem {
            FurnitureItem::new(Family::$family, Category::$category)
        }
        (Family::$family, Category::$category, build as Constructor)
    }};
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<(Family, Category), Constructor>,
}

impl Catalog {
    /// A catalog with no constructors registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The complete catalog: one constructor for every family and category.
    pub fn standard() -> Self {
        let entries = [
            entry!(Modern, Chair),
            entry!(Modern, Table),
            entry!(Modern, Sofa),
            entry!(Victorian, Chair),
            entry!(Victorian, Table),
            entry!(Victorian, Sofa),
            entry!(ArtDeco, Chair),
            entry!(ArtDeco, Table),
            entry!(ArtDeco, Sofa),
        ];

        let mut catalog = Self::empty();
        for (family, category, build) in entries {
            catalog.register(family, category, build);
        }
        catalog
    }

    /// Returns the process-wide catalog, building it on the first call.
    ///
    /// Every call returns the same instance.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| {
            info!("Initializing global catalog");
            Catalog::standard()
        })
    }

    /// Registers `build` for `(family, category)`, replacing any previous constructor.
    pub fn register(&mut self, family: Family, category: Category, build: Constructor) -> &mut Self {
        debug!(%family, %category, "Register");
        self.entries.insert((family, category), build);
        self
    }

    /// Finds the constructor for `(family, category)`.
    pub fn lookup(&self, family: Family, category: Category) -> Result<Constructor, FactoryError> {
        self.entries
            .get(&(family, category))
            .copied()
            .ok_or(FactoryError::UnsupportedCategory { family, category })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
