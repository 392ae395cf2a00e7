//! Pure control-path computations: pulse mapping and the colour transform.

pub mod colour;
pub mod mapping;

pub use mapping::LightCommand;
