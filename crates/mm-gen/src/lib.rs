pub mod generator;
pub mod fixed;
pub mod uniform;

pub use generator::MatrixGenerator;
pub use fixed::{IdentityGenerator, ZeroGenerator};
pub use uniform::UniformGenerator;
