use crate::furniture_factory::FurnitureFactory;
use crate::model::Family;
use tracing::{info, instrument};

/// Furnishes a showroom from exactly one factory.
///
/// The client works with any [`FurnitureFactory`] and only ever asks items to describe
/// themselves, so it never learns which concrete items it was given.
#[derive(Debug, Clone)]
pub struct FurnitureClient<F: FurnitureFactory> {
    factory: F,
}

impl<F: FurnitureFactory> FurnitureClient<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn family(&self) -> Family {
        self.factory.family()
    }

    /// Requests one item of every category and returns their descriptions.
    #[instrument(skip(self), fields(family = %self.factory.family()))]
    pub fn show_products(&self) -> Vec<String> {
        let products = vec![
            self.factory.create_table().describe(),
            self.factory.create_chair().describe(),
            self.factory.create_sofa().describe(),
        ];
        info!(count = products.len(), "Showroom furnished");
        products
    }
}
