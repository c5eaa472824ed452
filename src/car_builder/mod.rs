//! Step-wise car construction: a builder, its accumulator, and a director of recipes.

pub mod builder;
pub mod director;
pub mod error;

pub use builder::*;
pub use director::*;
pub use error::*;
