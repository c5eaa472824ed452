//! Demo driver: prints one report per pattern.

use pattern_recipe::adapter::{RoundHole, RoundPeg, SquarePeg, SquarePegAdapter};
use pattern_recipe::car_builder::{CarAssembler, CarBuilder, Director, Recipe};
use pattern_recipe::clients::FurnitureClient;
use pattern_recipe::framework::Report;
use pattern_recipe::furniture_factory::{Catalog, FamilyFactory};
use pattern_recipe::lifecycle::setup_tracing;
use pattern_recipe::logistics::{Logistics, RoadLogistics, SeaLogistics};
use pattern_recipe::model::Family;
use tracing::info;

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting pattern demos");

    // Abstract factory: one showroom per family
    for family in Family::ALL {
        let client = FurnitureClient::new(FamilyFactory::new(family));
        let report = Report::new(format!("{} showroom", client.family()))
            .lines(client.show_products());
        println!("{}", report);
    }

    // Builder: the caller resets between sessions, not the director
    let director = Director::new();
    let mut builder = CarAssembler::new();
    for recipe in [Recipe::Basic, Recipe::FullFeatured] {
        director.reset_builder(&mut builder);
        director
            .construct(recipe, &mut builder)
            .map_err(|e| e.to_string())?;
        let report = Report::new(format!("{} car has below parts:", recipe))
            .lines(builder.result().parts().iter().cloned());
        println!("{}", report);
    }

    // Factory method
    let planners: [&dyn Logistics; 2] = [&SeaLogistics, &RoadLogistics];
    let report = Report::new("deliveries").lines(planners.iter().map(|l| l.plan_delivery()));
    println!("{}", report);

    // Adapter
    let hole = RoundHole::new(5.0);
    let square = SquarePeg::new(5.0);
    let report = Report::new("peg fitting")
        .line(format!(
            "RoundHole(5) fits RoundPeg(5): {}",
            hole.fits(&RoundPeg::new(5.0))
        ))
        .line(format!(
            "RoundHole(5) fits SquarePeg(5) via adapter: {}",
            hole.fits(&SquarePegAdapter::from(square))
        ))
        .line(format!(
            "RoundHole(5) fits SquarePeg(10) via adapter: {}",
            hole.fits(&SquarePegAdapter::from(SquarePeg::new(10.0)))
        ));
    println!("{}", report);

    // Single instance
    let same = std::ptr::eq(Catalog::global(), Catalog::global());
    let report = Report::new("global catalog").line(format!("one instance: {}", same));
    println!("{}", report);

    info!("Pattern demos completed");
    Ok(())
}
