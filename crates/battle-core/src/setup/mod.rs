//! World Setup
//!
//! Creation of the initial population.

pub mod population;

pub use population::{spawn_population, Population};
