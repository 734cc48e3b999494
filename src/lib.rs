pub mod config;
pub mod error;
pub mod material;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod profile;
pub mod texture;
pub mod uv;

pub use error::{PlateError, Result};
