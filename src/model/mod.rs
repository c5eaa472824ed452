//! Pure value types shared by the factories, builders and clients.

pub mod car;
pub mod furniture;

pub use car::*;
pub use furniture::*;
