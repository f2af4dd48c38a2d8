pub mod model;
pub mod typing;
pub mod raster;
mod utils;
