pub mod example;
pub mod multiply;
