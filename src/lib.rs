//! # Creatures - Ray-Sensing Evolutionary Arena
//!
//! A population of small creatures steers through a bordered arena full of
//! drifting line obstacles. Each creature reads distances along rays cast
//! around its body and a tiny recurrent network turns those readings into a
//! turn and a move. Touching the border or an obstacle kills it, and the
//! longest survivors are remembered in a hall of fame that seeds new spawns.
//!
//! ## Features
//!
//! - Recurrent two-layer perceptron brains (tanh activation)
//! - Sensing and collision against a rasterized occupancy grid
//! - Hall of fame of the best distinct weight vectors
//! - Clone / crossover / random spawning policy with creature recycling
//! - Seedable, deterministic ticks
//!
//! ## Core Modules
//!
//! - [`simulation::brain`] - Neural controller
//! - [`simulation::surface`] - Occupancy grid, ray marching and collision
//! - [`simulation::ecosystem`] - Main tick loop
//! - [`simulation::hall_of_fame`] - Ranked gene pool
//! - [`simulation::evolution`] - Spawning policy

/// Core simulation logic and data structures.
pub mod simulation {
    /// Recurrent perceptron controller for creature brains.
    pub mod brain;
    /// Creature state and per-tick motion rules.
    pub mod creature;
    /// The arena world and its tick loop.
    pub mod ecosystem;
    /// Error types for configuration and setup.
    pub mod error;
    /// Spawning policy driven by the hall of fame.
    pub mod evolution;
    /// RGBA frame composed for display after each tick.
    pub mod frame;
    /// Geometric helpers shared by rasterization and sensing.
    pub mod geometric_utils;
    /// Ranked registry of the best distinct weight vectors.
    pub mod hall_of_fame;
    /// Moving line obstacles.
    pub mod obstacle;
    /// Simulation parameters.
    pub mod params;
    /// Rasterized occupancy grid used for sensing and death checks.
    pub mod surface;
}
