//! Synthetic price-path generation.

pub mod monte_carlo;

pub use monte_carlo::{simulate, simulate_seeded};
