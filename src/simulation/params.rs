use std::path::Path;

use serde::{Deserialize, Serialize};

use super::brain::Topology;
use super::error::{Error, Result};

/// Simulation parameters that control arena size, population and brains.
///
/// Missing fields fall back to [`Params::default`] when loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Arena width, excluding the border.
    pub width: u32,
    /// Arena height, excluding the border.
    pub height: u32,
    /// Thickness of the solid border surrounding the arena.
    pub border_width: u32,
    /// Creature body radius in cells.
    pub creature_radius: u32,
    /// Stroke width of obstacle segments.
    pub obstacle_width: f32,
    /// Population floor, topped up every tick.
    pub min_creatures: usize,
    /// Spawn ceiling used by the evolution cycle.
    /// Also the size the hall of fame is truncated to.
    pub max_creatures: usize,
    /// Hall-of-fame size that triggers truncation.
    pub max_hall_of_fame: usize,
    /// Target number of obstacles in the arena.
    pub num_obstacles: usize,
    /// Ticks between evolution cycles.
    pub evolution_cycle_ticks: u64,
    /// Number of distance rays evenly spaced around each creature.
    pub num_sensor_rays: usize,
    /// Number of recurrent memory cells in each brain.
    pub memory_size: usize,
    /// Heading change per unit of `turn` output (radians).
    pub turn_rate: f32,
    /// Distance covered per unit of `move` output.
    pub move_speed: f32,
    /// Seed for the shared random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        let min_creatures = 10;
        let max_creatures = 2 * min_creatures;
        Self {
            width: 405,
            height: 720,
            border_width: 16,
            creature_radius: 6,
            obstacle_width: 3.0,
            min_creatures,
            max_creatures,
            max_hall_of_fame: 2 * max_creatures,
            num_obstacles: 6,
            evolution_cycle_ticks: 30 * 5,
            num_sensor_rays: 12,
            memory_size: 12,
            turn_rate: 1.0 / 8.0,
            move_speed: 4.0,
            seed: None,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file and validates them.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        tracing::info!(path = %path.display(), "loaded parameters");
        Ok(params)
    }

    /// Checks that the parameters describe a world that can be simulated.
    pub fn validate(&self) -> Result<()> {
        if self.width <= self.creature_radius || self.height <= self.creature_radius {
            return Err(Error::InvalidParams(format!(
                "arena {}x{} must be larger than the creature radius {}",
                self.width, self.height, self.creature_radius
            )));
        }
        if self.num_sensor_rays == 0 {
            return Err(Error::InvalidParams(
                "creatures need at least one sensor ray".to_string(),
            ));
        }
        if self.evolution_cycle_ticks == 0 {
            return Err(Error::InvalidParams(
                "evolution_cycle_ticks must be positive".to_string(),
            ));
        }
        if self.max_creatures < self.min_creatures {
            return Err(Error::InvalidParams(format!(
                "max_creatures ({}) is below min_creatures ({})",
                self.max_creatures, self.min_creatures
            )));
        }
        if self.max_hall_of_fame < self.max_creatures {
            return Err(Error::InvalidParams(format!(
                "max_hall_of_fame ({}) is below max_creatures ({})",
                self.max_hall_of_fame, self.max_creatures
            )));
        }
        if self.obstacle_width.is_nan() || self.obstacle_width <= 0.0 {
            return Err(Error::InvalidParams(
                "obstacle_width must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Width of the occupancy surface including both border bands.
    pub fn frame_width(&self) -> usize {
        (self.width + 2 * self.border_width) as usize
    }

    /// Height of the occupancy surface including both border bands.
    pub fn frame_height(&self) -> usize {
        (self.height + 2 * self.border_width) as usize
    }

    /// Brain topology implied by the sensor and memory sizes.
    pub fn topology(&self) -> Topology {
        Topology::new(self.num_sensor_rays, self.memory_size)
    }
}
