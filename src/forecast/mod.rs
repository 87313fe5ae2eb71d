//! Forecast panel aggregation.

pub mod crowd;

pub use crowd::wisdom_of_crowds;
