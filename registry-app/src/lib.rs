pub mod catalogue;
pub mod error;
pub mod generation;
pub mod registry;

pub use error::Error;
pub use registry::VehicleRegistry;
