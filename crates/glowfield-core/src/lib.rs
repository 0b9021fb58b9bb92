pub mod color;
pub mod constants;
pub mod field;
pub mod params;
pub mod particle;
pub mod surface;

pub use color::*;
pub use field::*;
pub use params::*;
pub use particle::*;
pub use surface::*;
