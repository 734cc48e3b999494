mod build_plate;
mod revolve;
mod slump;

pub use build_plate::{BuildPlate, DEFAULT_RADIAL_SEGMENTS};
pub use revolve::RevolvePlate;
pub use slump::{SlumpParams, SlumpPlate};
