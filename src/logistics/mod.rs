//! Delivery planning through a factory method.
//!
//! [`Logistics::plan_delivery`] is written once against [`Transporter`]; each logistics
//! kind decides which transporter to create by implementing
//! [`Logistics::create_transporter`].

use tracing::debug;

/// Anything that can carry a delivery.
pub trait Transporter {
    fn deliver(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Truck;

impl Transporter for Truck {
    fn deliver(&self) -> String {
        "A Truck delivers by road".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ship;

impl Transporter for Ship {
    fn deliver(&self) -> String {
        "A Ship delivers by sea".to_string()
    }
}

pub trait Logistics {
    /// The factory method.
    fn create_transporter(&self) -> Box<dyn Transporter>;

    /// Creates a transporter and hands the delivery to it.
    fn plan_delivery(&self) -> String {
        let transporter = self.create_transporter();
        let plan = transporter.deliver();
        debug!(%plan, "Delivery planned");
        plan
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn create_transporter(&self) -> Box<dyn Transporter> {
        Box::new(Truck)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn create_transporter(&self) -> Box<dyn Transporter> {
        Box::new(Ship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_logistics_picks_its_transporter() {
        assert_eq!(RoadLogistics.plan_delivery(), "A Truck delivers by road");
        assert_eq!(SeaLogistics.plan_delivery(), "A Ship delivers by sea");
    }

    #[test]
    fn test_logistics_as_trait_objects() {
        let planners: Vec<Box<dyn Logistics>> = vec![Box::new(SeaLogistics), Box::new(RoadLogistics)];
        let plans: Vec<String> = planners.iter().map(|l| l.plan_delivery()).collect();
        assert_eq!(plans, ["A Ship delivers by sea", "A Truck delivers by road"]);
    }
}
